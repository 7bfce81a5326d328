pub mod alert;
pub mod data_table;
pub mod field;
pub mod loading_spinner;
pub mod modal;

pub use alert::{Alert, AlertKind, ErrorBanner};
pub use data_table::{BulkAction, DataTable};
pub use field::{choice_options, SelectField, TextAreaField, TextField};
pub use loading_spinner::{LoadingSpinner, SpinnerSize};
pub use modal::Modal;

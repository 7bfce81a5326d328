pub mod form;
pub mod table;

pub use form::StoreVisitForm;
pub use table::{columns, StoreVisitsTable};

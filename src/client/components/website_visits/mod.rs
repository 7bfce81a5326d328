pub mod form;
pub mod table;

pub use form::WebsiteVisitForm;
pub use table::{columns, WebsiteVisitsTable};

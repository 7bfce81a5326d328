pub mod dashboard;
pub mod not_found;
pub mod register;

pub use dashboard::{LoginSignup, Overview, StoreVisits, WebsiteVisits};
pub use not_found::NotFound;
pub use register::Register;

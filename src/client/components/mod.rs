pub mod auth;
pub mod dashboard;
pub mod layout;
pub mod login_signup;
pub mod page;
pub mod store_visits;
pub mod ui;
pub mod website_visits;

pub use layout::DashboardLayout;
pub use page::Page;

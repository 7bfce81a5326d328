pub mod login_signup;
pub mod overview;
pub mod store_visits;
pub mod website_visits;

pub use login_signup::LoginSignup;
pub use overview::Overview;
pub use store_visits::StoreVisits;
pub use website_visits::WebsiteVisits;

pub mod form;
pub mod table;

pub use form::LoginSignupForm;
pub use table::{columns, LoginSignupTable};

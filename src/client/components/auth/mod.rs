pub mod register_form;

pub use register_form::RegisterForm;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod overview;
pub mod router;
pub mod routes;
pub mod table;
pub mod util;
pub mod validation;

pub use app::App;

//! REST client for the dashboard API.
//!
//! Every record type is a [`Resource`] served under its own collection path:
//!
//! - `GET {path}` - all records
//! - `POST {path}` - create, returns the created record
//! - `PUT {path}/{id}` - update, returns the updated record
//! - `DELETE {path}/{id}` - delete
//!
//! No authentication headers, paging, or filter parameters are sent; the client always works on
//! the full collection. Each request is bounded by [`Config::request_timeout`] and is never
//! retried. Responses are decoded from text so that a body of the wrong shape surfaces as
//! [`ApiError::Decode`] instead of failing later during rendering.
//!
//! [`Config::request_timeout`]: crate::client::config::Config::request_timeout
//! [`ApiError::Decode`]: crate::client::error::ApiError::Decode

pub mod resource;
pub mod response;
pub mod timeout;

#[cfg(feature = "web")]
pub mod request;

pub use resource::Resource;
pub use timeout::with_timeout;

#[cfg(feature = "web")]
pub use request::{create, delete, fetch_all, register, update};

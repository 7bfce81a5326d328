//! Fixtures for testing the dashboard client.
//!
//! Factories build single records and valid form drafts with fixed, deterministic values;
//! [`RowsBuilder`] builds whole datasets for table tests.

pub mod builder;
pub mod fixtures;

pub use builder::RowsBuilder;

pub mod prelude {
    pub use crate::{fixtures::factory, RowsBuilder};
}

pub mod collection;
pub mod request_tracker;
pub mod use_records;

pub use collection::{EditTarget, LoadOutcome, RecordCollection};
pub use request_tracker::{RequestTicket, RequestTracker};
pub use use_records::{use_records, Records};

use dioxus_logger::tracing;

use crate::client::{
    error::ApiError,
    table::{RowId, TableRow},
    util::{RequestTicket, RequestTracker},
};

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were replaced, the caller should reset its table navigation
    Applied,
    /// The request failed and the previous records were kept
    Failed,
    /// A newer load was started after this one, the response was discarded
    Stale,
}

/// Record being edited in a modal
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget<R> {
    New,
    Existing(R),
}

impl<R: TableRow> EditTarget<R> {
    /// Id of the record being updated, `None` when creating
    pub fn id(&self) -> Option<RowId> {
        match self {
            EditTarget::New => None,
            EditTarget::Existing(record) => Some(record.row_id()),
        }
    }

    pub fn record(&self) -> Option<R> {
        match self {
            EditTarget::New => None,
            EditTarget::Existing(record) => Some(record.clone()),
        }
    }
}

/// In-memory list of one record type plus the state of its requests
///
/// Load failures and mutation failures are kept apart so that the reload issued after a failed
/// mutation does not hide the mutation's error.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCollection<R> {
    records: Vec<R>,
    loading: bool,
    loaded: bool,
    load_error: Option<String>,
    action_error: Option<String>,
    tracker: RequestTracker,
}

impl<R> Default for RecordCollection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            loaded: false,
            load_error: None,
            action_error: None,
            tracker: RequestTracker::default(),
        }
    }
}

impl<R> RecordCollection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True until the first load has finished, used to show a spinner instead of an empty table
    pub fn is_initial_load(&self) -> bool {
        !self.loaded
    }

    /// Messages to show in the error banner, load failure first
    pub fn errors(&self) -> Vec<String> {
        self.load_error
            .iter()
            .chain(self.action_error.iter())
            .cloned()
            .collect()
    }

    /// Mark a load as started and take its ticket
    pub fn begin_load(&mut self) -> RequestTicket {
        self.loading = true;
        self.tracker.begin()
    }

    /// Apply the result of the load that was given `ticket`
    ///
    /// Responses of superseded loads are discarded without touching any state.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<R>, ApiError>,
        name: &str,
    ) -> LoadOutcome {
        if !self.tracker.is_latest(ticket) {
            tracing::warn!("Discarding stale response while loading {}", name);

            return LoadOutcome::Stale;
        }

        self.loading = false;
        self.loaded = true;

        match result {
            Ok(records) => {
                self.records = records;
                self.load_error = None;

                LoadOutcome::Applied
            }
            Err(err) => {
                tracing::error!("Failed to load {}: {}", name, err);
                self.load_error = Some(format!("Failed to load {}: {}", name, err.user_message()));

                LoadOutcome::Failed
            }
        }
    }

    /// Record a failed create, update or delete
    pub fn fail_action(&mut self, message: String) {
        self.action_error = Some(message);
    }

    /// Record a failed create or update of one `name` record
    pub fn fail_save(&mut self, name: &str, err: &ApiError) {
        tracing::error!("Failed to save {}: {}", name, err);
        self.fail_action(format!("Failed to save {}: {}", name, err.user_message()));
    }

    /// Record that deleting the `name` records in `ids` failed, `err` being the last failure
    pub fn fail_delete(&mut self, name: &str, ids: &[RowId], err: &ApiError) {
        let ids = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        self.fail_action(format!(
            "Failed to delete {} {}: {}",
            name,
            ids,
            err.user_message()
        ));
    }

    /// Clear a previous mutation failure after a mutation succeeds
    pub fn clear_action_error(&mut self) {
        self.action_error = None;
    }

    /// Hide every message in the error banner
    pub fn dismiss_errors(&mut self) {
        self.load_error = None;
        self.action_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "database offline".to_string(),
        }
    }

    /// Tests a successful load.
    ///
    /// Verifies that the records are replaced and the loading flags are cleared.
    ///
    /// Expected: Applied with the new records
    #[test]
    fn applies_latest_load() {
        let mut collection = RecordCollection::<i64>::new();
        assert!(collection.is_initial_load());

        let ticket = collection.begin_load();
        assert!(collection.is_loading());

        let outcome = collection.finish_load(ticket, Ok(vec![1, 2, 3]), "numbers");

        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(collection.records(), &[1, 2, 3]);
        assert!(!collection.is_loading());
        assert!(!collection.is_initial_load());
        assert!(collection.errors().is_empty());
    }

    /// Tests overlapping loads finishing out of order.
    ///
    /// Verifies that the response of the superseded load is discarded, even when it arrives
    /// after the newer one.
    ///
    /// Expected: newer records kept, older response reported as Stale
    #[test]
    fn discards_stale_load() {
        let mut collection = RecordCollection::<i64>::new();
        let first = collection.begin_load();
        let second = collection.begin_load();

        assert_eq!(
            collection.finish_load(second, Ok(vec![2]), "numbers"),
            LoadOutcome::Applied
        );
        assert_eq!(
            collection.finish_load(first, Ok(vec![1]), "numbers"),
            LoadOutcome::Stale
        );

        assert_eq!(collection.records(), &[2]);
    }

    /// Tests a stale load finishing while a newer load is in flight.
    ///
    /// Verifies that the loading flag stays set for the newer request.
    ///
    /// Expected: still loading, no records
    #[test]
    fn stale_load_keeps_loading_flag() {
        let mut collection = RecordCollection::<i64>::new();
        let first = collection.begin_load();
        let _second = collection.begin_load();

        collection.finish_load(first, Ok(vec![1]), "numbers");

        assert!(collection.is_loading());
        assert!(collection.records().is_empty());
    }

    /// Tests a failed load.
    ///
    /// Verifies that the previous records are kept and the failure becomes a banner message
    /// carrying the server's message.
    ///
    /// Expected: Failed, old records kept, message "Failed to load numbers: database offline"
    #[test]
    fn failed_load_keeps_records() {
        let mut collection = RecordCollection::<i64>::new();
        let ticket = collection.begin_load();
        collection.finish_load(ticket, Ok(vec![7]), "numbers");

        let ticket = collection.begin_load();
        let outcome = collection.finish_load(ticket, Err(failure()), "numbers");

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(collection.records(), &[7]);
        assert_eq!(
            collection.errors(),
            vec!["Failed to load numbers: database offline".to_string()]
        );
    }

    /// Tests a reload after a failed mutation.
    ///
    /// Verifies that a successful load clears its own error but keeps the mutation error.
    ///
    /// Expected: only the mutation message remains
    #[test]
    fn reload_keeps_action_error() {
        let mut collection = RecordCollection::<i64>::new();
        let ticket = collection.begin_load();
        collection.finish_load(ticket, Err(failure()), "numbers");
        collection.fail_action("Failed to delete number 4: gone".to_string());

        let ticket = collection.begin_load();
        collection.finish_load(ticket, Ok(vec![]), "numbers");

        assert_eq!(
            collection.errors(),
            vec!["Failed to delete number 4: gone".to_string()]
        );

        collection.dismiss_errors();
        assert!(collection.errors().is_empty());
    }

    /// Tests a mutation attempted where requests cannot be sent.
    ///
    /// Verifies that save and delete failures land in the error banner with the transport
    /// message, the delete naming every id it could not remove.
    ///
    /// Expected: save message first replaced by the delete message
    #[test]
    fn unavailable_requests_reach_banner() {
        let mut collection = RecordCollection::<i64>::new();
        let err = ApiError::web_only();

        collection.fail_save("website visit", &err);
        assert_eq!(
            collection.errors(),
            vec![format!("Failed to save website visit: {}", err)]
        );

        collection.fail_delete("website visit", &[3, 22], &err);
        assert_eq!(
            collection.errors(),
            vec![format!("Failed to delete website visit 3, 22: {}", err)]
        );
    }
}

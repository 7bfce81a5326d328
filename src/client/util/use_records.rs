use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(not(feature = "web"))]
use crate::client::error::ApiError;
#[cfg(feature = "web")]
use crate::client::{api, util::LoadOutcome};
use crate::client::{
    api::Resource,
    config::Config,
    table::{RowId, TableState},
    util::RecordCollection,
};

/// Records of one resource plus the table state of the page showing them
///
/// Both signals are owned by the page that called [`use_records`], so the handle is `Copy` and
/// can be moved into any number of event handlers.
pub struct Records<R: 'static> {
    pub collection: Signal<RecordCollection<R>>,
    pub table: Signal<TableState>,
    config: Config,
}

impl<R: 'static> Clone for Records<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for Records<R> {}

impl<R: 'static> PartialEq for Records<R> {
    fn eq(&self, other: &Self) -> bool {
        self.collection == other.collection && self.table == other.table
    }
}

/// Load every record of `R` when the page mounts
pub fn use_records<R: Resource>() -> Records<R> {
    let config = use_context::<Config>();
    let collection = use_signal(RecordCollection::<R>::new);
    let table = use_signal(TableState::new);

    let records = Records {
        collection,
        table,
        config,
    };

    use_effect(move || records.reload());

    records
}

impl<R: Resource> Records<R> {
    /// Fetch the full collection again
    ///
    /// A successful load resets the table to its first page and clears the selection. If
    /// reloads overlap, only the most recently started one is applied.
    pub fn reload(self) {
        let mut collection = self.collection;
        let ticket = collection.write().begin_load();

        #[cfg(feature = "web")]
        {
            let mut table = self.table;
            let config = self.config;

            spawn(async move {
                let result = api::fetch_all::<R>(&config).await;

                let outcome = collection.write().finish_load(ticket, result, R::PLURAL);
                if outcome == LoadOutcome::Applied {
                    table.write().reset();
                }
            });
        }

        #[cfg(not(feature = "web"))]
        {
            collection
                .write()
                .finish_load(ticket, Err(ApiError::web_only()), R::PLURAL);
        }
    }

    /// Create a record when `id` is `None`, otherwise update it
    ///
    /// `on_saved` runs before the list is reloaded. On failure it is not called and the message
    /// is shown in the page's error banner.
    pub fn save(self, id: Option<RowId>, payload: R::Payload, on_saved: impl FnOnce() + 'static) {
        #[cfg(feature = "web")]
        {
            let mut collection = self.collection;
            let config = self.config;

            spawn(async move {
                let result = match id {
                    Some(id) => api::update::<R>(&config, id, &payload).await.map(|_| ()),
                    None => api::create::<R>(&config, &payload).await.map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        collection.write().clear_action_error();
                        on_saved();
                        self.reload();
                    }
                    Err(err) => collection.write().fail_save(R::SINGULAR, &err),
                }
            });
        }

        #[cfg(not(feature = "web"))]
        {
            let _ = (id, payload, on_saved);
            let mut collection = self.collection;
            collection
                .write()
                .fail_save(R::SINGULAR, &ApiError::web_only());
        }
    }

    /// Delete every record in `ids`, one request per id
    ///
    /// Deletion continues past a failed id; the list is reloaded afterwards in every case since
    /// some records may already be gone.
    pub fn delete_many(self, ids: Vec<RowId>) {
        if ids.is_empty() {
            return;
        }

        #[cfg(feature = "web")]
        {
            let mut collection = self.collection;
            let config = self.config;

            spawn(async move {
                let mut failed = Vec::new();
                let mut last_error = None;

                for id in ids {
                    if let Err(err) = api::delete::<R>(&config, id).await {
                        tracing::error!("Failed to delete {} {}: {}", R::SINGULAR, id, err);
                        failed.push(id);
                        last_error = Some(err);
                    }
                }

                match last_error {
                    Some(err) => collection.write().fail_delete(R::SINGULAR, &failed, &err),
                    None => collection.write().clear_action_error(),
                }

                self.reload();
            });
        }

        #[cfg(not(feature = "web"))]
        {
            let mut collection = self.collection;
            collection
                .write()
                .fail_delete(R::SINGULAR, &ids, &ApiError::web_only());
        }
    }
}

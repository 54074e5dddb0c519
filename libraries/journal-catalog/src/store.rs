//! The authoritative in-memory collection for the active session.

use crate::events::{CatalogEvent, LoadStatus};
use journal_core::error::Result;
use journal_core::normalize::{normalize, normalize_collection};
use journal_core::types::{RecordPayload, SeriesDraft, SeriesRecord};
use journal_core::validate::validate;
use journal_core::{CatalogError, RecordService};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Owner of the canonical record collection.
///
/// All mutation flows through this component: remote calls are awaited
/// without holding the state lock, and the collection is touched only after
/// the record service confirms success, so readers never observe an
/// unconfirmed change. Consumers get cloned snapshots and recomputed
/// projections, never a live reference.
///
/// # Example
///
/// ```ignore
/// use journal_catalog::CatalogStore;
/// use std::sync::Arc;
///
/// let store = CatalogStore::new(Arc::new(client));
/// store.load().await?;
/// let records = store.records().await;
/// ```
pub struct CatalogStore {
    service: Arc<dyn RecordService>,
    state: RwLock<CatalogState>,
    load_seq: AtomicU64,
    events: broadcast::Sender<CatalogEvent>,
}

#[derive(Default)]
struct CatalogState {
    records: Vec<SeriesRecord>,
    status: LoadStatus,
}

impl CatalogStore {
    /// Create an empty store backed by the given record service.
    pub fn new(service: Arc<dyn RecordService>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            service,
            state: RwLock::new(CatalogState::default()),
            load_seq: AtomicU64::new(0),
            events,
        }
    }

    /// Fetch all records and replace the collection wholesale.
    ///
    /// Loads follow a last-issued-wins rule: if another load is issued while
    /// this one is in flight, whichever response belongs to the later-issued
    /// load ends up authoritative and the other response is silently
    /// discarded. On failure the collection is left empty and the failure is
    /// retrievable through [`status`](Self::status); there is no automatic
    /// retry.
    pub async fn load(&self) -> Result<()> {
        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.status = LoadStatus::Loading;
        debug!(seq, "loading catalog");

        let outcome = self.service.fetch_all().await;

        let mut state = self.state.write().await;
        if self.load_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "load superseded, discarding response");
            return Ok(());
        }

        match outcome {
            Ok(raw) => {
                state.records = normalize_collection(&raw);
                state.status = LoadStatus::Ready;
                let count = state.records.len();
                drop(state);
                info!(count, "catalog loaded");
                self.emit(CatalogEvent::Loaded { count });
                Ok(())
            }
            Err(e) => {
                state.records.clear();
                state.status = LoadStatus::Failed(e.to_string());
                drop(state);
                warn!(error = %e, "catalog load failed");
                self.emit(CatalogEvent::LoadFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Validate a draft, persist it, and append the stored record.
    ///
    /// Validation violations are resolved locally: the record service is
    /// never called and the collection is untouched. Remote failures
    /// propagate unchanged, also without mutation.
    pub async fn create(&self, draft: &SeriesDraft) -> Result<SeriesRecord> {
        let report = validate(draft);
        if !report.is_valid() {
            debug!(%report, "create rejected by validation");
            return Err(CatalogError::Validation(report));
        }

        let payload = RecordPayload::from_draft(draft);
        let raw = self.service.create(&payload).await?;
        let record = normalize(&raw);

        let mut state = self.state.write().await;
        state.records.push(record.clone());
        drop(state);

        let id = record.id.clone().unwrap_or_default();
        info!(%id, title = %record.title, "record created");
        self.emit(CatalogEvent::Created { id });
        Ok(record)
    }

    /// Validate a draft, persist it as a whole-record replace, and swap the
    /// matching element.
    ///
    /// A confirmed update whose id matches nothing in the collection is a
    /// no-op success: the stored record is returned but nothing local
    /// changes. See DESIGN.md for this contract decision.
    pub async fn update(&self, id: &str, draft: &SeriesDraft) -> Result<SeriesRecord> {
        let report = validate(draft);
        if !report.is_valid() {
            debug!(%report, "update rejected by validation");
            return Err(CatalogError::Validation(report));
        }

        let payload = RecordPayload::from_draft(draft);
        let raw = self.service.update(id, &payload).await?;
        let record = normalize(&raw);

        let mut state = self.state.write().await;
        match state
            .records
            .iter()
            .position(|r| r.id.as_deref() == Some(id))
        {
            Some(pos) => {
                state.records[pos] = record.clone();
                drop(state);
                info!(%id, "record updated");
                self.emit(CatalogEvent::Updated { id: id.to_string() });
            }
            None => {
                drop(state);
                warn!(%id, "update confirmed for an id not in the collection");
            }
        }
        Ok(record)
    }

    /// Delete a record, removing the matching element once confirmed.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.service.delete(id).await?;

        let mut state = self.state.write().await;
        state.records.retain(|r| r.id.as_deref() != Some(id));
        drop(state);

        info!(%id, "record deleted");
        self.emit(CatalogEvent::Deleted { id: id.to_string() });
        Ok(())
    }

    /// Cloned snapshot of the collection, in insertion order.
    pub async fn records(&self) -> Vec<SeriesRecord> {
        self.state.read().await.records.clone()
    }

    /// Status of the last issued load.
    pub async fn status(&self) -> LoadStatus {
        self.state.read().await.status.clone()
    }

    /// Number of records in the collection.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Whether the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: CatalogEvent) {
        // Nobody listening is fine
        let _ = self.events.send(event);
    }
}

//! Events and status published by the catalog store.
//!
//! Presentation collaborators subscribe to these instead of holding their
//! own mutable copies of the collection; on any event they re-read the
//! store's snapshot and the derived projections they need.

use serde::Serialize;

/// Status of the last bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum LoadStatus {
    /// No load has been issued yet
    #[default]
    Idle,
    /// A load is in flight
    Loading,
    /// The collection reflects the last issued load
    Ready,
    /// The last issued load failed; the collection is empty
    Failed(String),
}

impl LoadStatus {
    /// True while a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

/// A change notification from the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogEvent {
    /// The collection was replaced by a completed load
    Loaded {
        /// Number of records now in the collection
        count: usize,
    },
    /// The last issued load failed
    LoadFailed {
        /// Human-readable failure message
        message: String,
    },
    /// A record was created and appended
    Created {
        /// Id assigned by the record service
        id: String,
    },
    /// A record was replaced in place
    Updated {
        /// Id of the replaced record
        id: String,
    },
    /// A record was removed
    Deleted {
        /// Id of the removed record
        id: String,
    },
}

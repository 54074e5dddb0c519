//! Series Journal Catalog
//!
//! The stateful heart of the catalog: a [`CatalogStore`] owning the
//! authoritative in-memory collection for the session, plus pure
//! projections over snapshots of it ([`filter`], [`aggregate`]).
//!
//! The store talks to the remote record service only through the
//! [`RecordService`](journal_core::RecordService) trait, keeps the
//! collection consistent across create/update/delete, and announces changes
//! on a broadcast channel that presentation collaborators subscribe to.

mod events;
mod filter;
mod stats;
mod store;

// Public exports
pub use events::{CatalogEvent, LoadStatus};
pub use filter::filter;
pub use stats::{aggregate, CatalogStats, RECENTLY_WATCHED_LIMIT};
pub use store::CatalogStore;

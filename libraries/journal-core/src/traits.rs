/// Core traits for the series catalog
use crate::error::Result;
use crate::types::RecordPayload;
use async_trait::async_trait;
use serde_json::Value;

/// Remote CRUD contract for series records.
///
/// The catalog core depends on the remote store only through this trait.
/// Implementations return raw JSON values; callers run them through the
/// normalizer, so implementations never need to understand the canonical
/// shape of a record.
///
/// All calls are asynchronous and non-blocking; timeout handling is the
/// implementation's responsibility and surfaces as
/// [`CatalogError::Transport`](crate::CatalogError::Transport).
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait RecordService: Send + Sync {
    /// Fetch every record.
    ///
    /// Returns whatever the store sends; a well-behaved store sends an
    /// array, but callers must tolerate anything.
    async fn fetch_all(&self) -> Result<Value>;

    /// Fetch a single record by id.
    async fn fetch_one(&self, id: &str) -> Result<Value>;

    /// Create a record, returning the stored record (with its assigned id).
    async fn create(&self, payload: &RecordPayload) -> Result<Value>;

    /// Replace the record with the given id, returning the stored result.
    async fn update(&self, id: &str, payload: &RecordPayload) -> Result<Value>;

    /// Delete the record with the given id.
    async fn delete(&self, id: &str) -> Result<()>;
}

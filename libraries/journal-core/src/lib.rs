//! Series Journal Core
//!
//! Platform-agnostic types, traits, and validation for the series catalog.
//!
//! This crate provides the foundational building blocks consumed by the
//! catalog store and the record-service clients:
//!
//! - **Domain Types**: [`SeriesRecord`], [`SeriesDraft`], [`Category`], and
//!   the wire-format [`RecordPayload`]
//! - **Core Traits**: [`RecordService`], the remote CRUD contract
//! - **Normalization**: [`normalize`]/[`normalize_collection`], mapping
//!   arbitrary remote shapes onto the canonical one
//! - **Validation**: [`validate`], field-level business rules for drafts
//! - **Error Handling**: unified [`CatalogError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use journal_core::{normalize, validate, SeriesDraft};
//! use serde_json::json;
//!
//! // Remote records arrive in whatever shape the store uses
//! let record = normalize(&json!({ "name": "Dark", "seasons": 3 }));
//! assert_eq!(record.title, "Dark");
//!
//! // User input is validated before it is ever sent anywhere
//! let report = validate(&SeriesDraft::default());
//! assert!(!report.is_valid());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod normalize;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use error::{CatalogError, Result};
pub use normalize::{normalize, normalize_collection};
pub use traits::RecordService;
pub use types::{Category, RecordPayload, SeriesDraft, SeriesRecord, UnknownCategory};
pub use validate::{validate, ValidationReport};

#[cfg(feature = "mock")]
pub use traits::MockRecordService;

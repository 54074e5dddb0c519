//! Series Journal Server Client
//!
//! HTTP client for the remote series record service.
//!
//! Implements the [`RecordService`](journal_core::RecordService) contract
//! over the original REST API: records live under `/series`, payloads use
//! the service's own field names, and responses are returned as raw JSON
//! for the normalizer to canonicalize.
//!
//! # Example
//!
//! ```ignore
//! use journal_server_client::{ClientConfig, SeriesApiClient};
//! use journal_core::RecordService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SeriesApiClient::new(ClientConfig::new("http://localhost:5000"))?;
//!
//!     if !client.probe().await {
//!         eprintln!("record service is not running");
//!         return Ok(());
//!     }
//!
//!     let raw = client.fetch_all().await?;
//!     let records = journal_core::normalize_collection(&raw);
//!     println!("found {} series", records.len());
//!     Ok(())
//! }
//! ```

mod client;
mod config;

// Re-export main types
pub use client::SeriesApiClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT};

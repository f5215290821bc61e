#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retaildynamics/retail-data/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for the retail transaction store.
//!
//! This crate provides the foundational abstractions for working with the
//! transaction dataset:
//!
//! - [`TransactionSource`](source::TransactionSource) - Backend that produces invoice batches
//! - [`TransactionCache`](cache::TransactionCache) - Caching abstraction with TTL-based freshness
//! - [`Invoice`](types::Invoice) - One parsed transaction row
//! - [`Clock`](clock::Clock) - Injectable time source for testable expiry

/// Cache trait for storing loaded datasets.
pub mod cache;
/// Injectable time source.
pub mod clock;
/// Error types for data operations.
pub mod error;
/// Source trait for loading transaction datasets.
pub mod source;
/// Core data types (Invoice, Dataset, LoadReport, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use cache::TransactionCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, RetailError};
pub use source::TransactionSource;
pub use types::{Dataset, Invoice, InvoiceBatch, LoadReport};

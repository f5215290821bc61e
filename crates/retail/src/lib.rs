#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retaildynamics/retail-data/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Unified interface for the retail transaction dataset.
//!
//! This crate re-exports core types and both backends, and provides a
//! [`TransactionStore`] that fronts a source with a TTL cache.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use retail::{CsvTransactionSource, InMemoryCache, TransactionStore, query};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = TransactionStore::new(Arc::new(CsvTransactionSource::new()))
//!         .with_cache(Arc::new(InMemoryCache::new()));
//!
//!     let batch = store.load_cleaned().await;
//!     let lanterns = query::search(&batch.invoices, "lantern");
//!     let page = query::paginate(&lanterns, 1, 25).unwrap();
//!     println!("{} matches, showing {}", page.total_items, page.items.len());
//! }
//! ```

// Core types and traits
pub use retail_core::*;

// Cache implementations
pub use retail_cache::{InMemoryCache, NoopCache};

// Sources
pub use retail_csv::CsvTransactionSource;

mod store;
pub use store::TransactionStore;

/// Priority-ordered role dispatch for the admin dashboards.
pub mod dispatch;
/// Search, pagination, and aggregate statistics over loaded lists.
pub mod query;

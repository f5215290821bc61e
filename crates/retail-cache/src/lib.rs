#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retaildynamics/retail-data/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Caching implementations for the retail transaction store.
//!
//! This crate provides implementations of the [`TransactionCache`] trait
//! from `retail-core`:
//!
//! - [`InMemoryCache`] - TTL-based in-memory cache with per-dataset slots
//! - [`NoopCache`] - No-op cache that doesn't store anything

/// In-memory cache implementation.
pub mod memory;
/// No-op cache implementation.
pub mod noop;

// Re-export the trait for convenience
pub use retail_core::TransactionCache;

// Re-export implementations
pub use memory::InMemoryCache;
pub use noop::NoopCache;

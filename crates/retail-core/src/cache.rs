//! Cache trait for storing loaded datasets.
//!
//! This module defines the [`TransactionCache`] trait that bounds file I/O
//! by keeping recently loaded datasets in memory for a fixed time window.

use async_trait::async_trait;
use std::time::Duration;

use crate::{
    error::Result,
    types::{Dataset, InvoiceBatch},
};

/// Trait for caching loaded transaction datasets.
///
/// Each dataset occupies its own slot with its own refresh timestamp, so
/// refreshing one dataset never makes the other appear fresh.
#[async_trait]
pub trait TransactionCache: Send + Sync {
    /// Retrieves the cached batch for a dataset if one exists and is fresh.
    ///
    /// Returns `Ok(Some(batch))` on a fresh hit, `Ok(None)` when the slot is
    /// empty or expired. Implementations return a defensive copy; callers
    /// can never mutate the cached backing data.
    async fn get(&self, dataset: Dataset) -> Result<Option<InvoiceBatch>>;

    /// Stores a batch in the dataset's slot, replacing it wholesale and
    /// stamping the slot's refresh time.
    async fn put(&self, dataset: Dataset, batch: &InvoiceBatch) -> Result<()>;

    /// Removes cache entries older than the specified TTL.
    ///
    /// Returns the number of entries invalidated.
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize>;

    /// Clears all cached data, forcing the next load to re-read from the
    /// source regardless of elapsed time.
    async fn clear(&self) -> Result<()>;
}

//! Source trait for loading transaction datasets.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{Dataset, InvoiceBatch},
};

/// Backend that produces invoice batches.
///
/// Implementations read one of the two named datasets from wherever they
/// keep it (local CSV files, a database, a fixture in tests) and return the
/// parsed rows together with a load report. Sources perform no caching of
/// their own; that is the store's job.
#[async_trait]
pub trait TransactionSource: Send + Sync + Debug {
    /// Returns the name of this source (e.g., "csv").
    fn name(&self) -> &str;

    /// Returns a description of this source.
    fn description(&self) -> &str;

    /// Loads the requested dataset.
    ///
    /// Individual malformed rows are handled softly (skipped and counted in
    /// the batch report); an error is returned only when the dataset itself
    /// cannot be produced - no backing file, or an I/O failure mid-read, in
    /// which case any partially parsed rows are discarded.
    async fn load(&self, dataset: Dataset) -> Result<InvoiceBatch>;
}

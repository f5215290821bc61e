#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retaildynamics/retail-data/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! CSV-backed transaction source.
//!
//! # Example
//!
//! ```no_run
//! use retail_csv::CsvTransactionSource;
//! use retail_core::{Dataset, TransactionSource};
//!
//! # async fn example() -> retail_core::Result<()> {
//! let source = CsvTransactionSource::new();
//! let batch = source.load(Dataset::Cleaned).await?;
//! println!("parsed {} rows, skipped {}", batch.len(), batch.report.rows_skipped);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use retail_core::{Dataset, InvoiceBatch, Result, RetailError, TransactionSource};
use tracing::debug;

mod fields;
mod parse;
mod probe;
mod tokenize;

/// Default directory probed for data files.
const DEFAULT_DATA_DIR: &str = "data";

/// Default file name for the cleaned dataset.
const DEFAULT_CLEANED_FILE: &str = "online_retail_cleaned.csv";

/// Default file name for the full dataset.
const DEFAULT_FULL_FILE: &str = "online_retail_full.csv";

/// Transaction source backed by local CSV files.
///
/// The backing file for a dataset is located by probing, in order:
/// `<data_dir>/<file>`, `../<data_dir>/<file>`, `./<file>`, `<file>`.
/// The first path that exists on disk wins; if none does, [`load`] returns
/// [`RetailError::SourceNotFound`] and no partial state is produced.
///
/// [`load`]: TransactionSource::load
#[derive(Debug, Clone)]
pub struct CsvTransactionSource {
    data_dir: PathBuf,
    cleaned_file: String,
    full_file: String,
}

impl Default for CsvTransactionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvTransactionSource {
    /// Create a source with the default data directory and file names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cleaned_file: DEFAULT_CLEANED_FILE.to_string(),
            full_file: DEFAULT_FULL_FILE.to_string(),
        }
    }

    /// Set the directory probed for data files.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the per-dataset file names.
    #[must_use]
    pub fn with_file_names(
        mut self,
        cleaned: impl Into<String>,
        full: impl Into<String>,
    ) -> Self {
        self.cleaned_file = cleaned.into();
        self.full_file = full.into();
        self
    }

    fn file_name(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Cleaned => &self.cleaned_file,
            Dataset::Full => &self.full_file,
        }
    }
}

#[async_trait]
impl TransactionSource for CsvTransactionSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "Delimited text files located under a local data directory"
    }

    async fn load(&self, dataset: Dataset) -> Result<InvoiceBatch> {
        let file_name = self.file_name(dataset);
        let Some(path) = probe::locate(&self.data_dir, file_name) else {
            return Err(RetailError::SourceNotFound {
                dataset,
                file_name: file_name.to_string(),
            });
        };

        debug!(dataset = %dataset, path = %path.display(), "Reading transaction file");

        // The format is UTF-8-ish; decode lossily rather than failing the
        // whole file on a stray byte.
        let bytes = tokio::fs::read(&path).await.map_err(|e| RetailError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let batch = parse::parse_batch(&content);
        debug!(
            dataset = %dataset,
            rows = batch.report.rows_parsed,
            skipped = batch.report.rows_skipped,
            "Parsed transaction file"
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(dir: &std::path::Path, name: &str, content: &str) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn loads_cleaned_dataset_from_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");
        write_fixture(
            &data_dir,
            "online_retail_cleaned.csv",
            "InvoiceNo,StockCode,Quantity,UnitPrice\n\
             536365,85123A,6,2.55\n\
             536366,71053,3,3.39\n",
        );

        let source = CsvTransactionSource::new().with_data_dir(&data_dir);
        let batch = source.load(Dataset::Cleaned).await.unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.report.lines_read, 2);
        assert_eq!(batch.report.rows_skipped, 0);
        assert_eq!(batch.invoices[0].invoice_no, Some(536_365));
        assert_eq!(batch.invoices[0].total_price, Some(6.0 * 2.55));
    }

    #[tokio::test]
    async fn datasets_map_to_distinct_files() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");
        write_fixture(
            &data_dir,
            "cleaned.csv",
            "InvoiceNo,Quantity\n1,1\n",
        );
        write_fixture(
            &data_dir,
            "full.csv",
            "InvoiceNo,Quantity\n1,1\n2,-1\n",
        );

        let source = CsvTransactionSource::new()
            .with_data_dir(&data_dir)
            .with_file_names("cleaned.csv", "full.csv");

        let cleaned = source.load(Dataset::Cleaned).await.unwrap();
        let full = source.load(Dataset::Full).await.unwrap();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(full.len(), 2);
        assert!(full.invoices[1].is_return());
    }

    #[tokio::test]
    async fn missing_file_is_an_error_not_a_panic() {
        let tmp = tempfile::tempdir().unwrap();
        let source = CsvTransactionSource::new().with_data_dir(tmp.path().join("data"));

        let err = source.load(Dataset::Full).await.unwrap_err();
        match err {
            RetailError::SourceNotFound { dataset, file_name } => {
                assert_eq!(dataset, Dataset::Full);
                assert_eq!(file_name, DEFAULT_FULL_FILE);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn dropped_rows_are_counted_not_silently_lost() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");
        write_fixture(
            &data_dir,
            "online_retail_full.csv",
            "InvoiceNo,StockCode,Quantity,UnitPrice\n\
             536365,85123A,6,2.55\n\
             536366,71053\n\
             536367,84406B,8,2.75\n",
        );

        let source = CsvTransactionSource::new().with_data_dir(&data_dir);
        let batch = source.load(Dataset::Full).await.unwrap();

        // total data lines - dropped lines == returned count
        assert_eq!(batch.report.lines_read, 3);
        assert_eq!(batch.report.rows_skipped, 1);
        assert_eq!(batch.len(), batch.report.lines_read - batch.report.rows_skipped);
    }
}

//! Core data types for the retail transaction dataset.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Invoice`] - One parsed transaction row
//! - [`Dataset`] - Which of the two source datasets a value belongs to
//! - [`LoadReport`] - Data-quality counters from one load pass
//! - [`InvoiceBatch`] - Parsed rows together with their load report

use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed transaction row.
///
/// Numeric fields are optional: a malformed value in the source file nulls
/// the field without dropping the row. `total_price` is taken verbatim from
/// the source when present; otherwise it is derived once at parse time as
/// `quantity * unit_price` and never recomputed afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Transaction identifier.
    pub invoice_no: Option<i64>,
    /// Item code.
    pub stock_code: String,
    /// Item description.
    pub description: String,
    /// Quantity; negative values represent returns.
    pub quantity: Option<i32>,
    /// Transaction timestamp, kept verbatim (loosely formatted upstream).
    pub invoice_date: String,
    /// Unit price.
    pub unit_price: Option<f64>,
    /// Customer identifier; missing for anonymous transactions.
    pub customer_id: Option<i64>,
    /// Country the transaction was placed from.
    pub country: String,
    /// Total line price.
    pub total_price: Option<f64>,
    /// Denormalized invoice year.
    pub invoice_year: Option<i32>,
    /// Denormalized invoice month.
    pub invoice_month: Option<i32>,
}

impl Invoice {
    /// Returns true if this line represents a return (negative quantity).
    #[must_use]
    pub fn is_return(&self) -> bool {
        self.quantity.is_some_and(|q| q < 0)
    }
}

/// Which of the two source datasets a value belongs to.
///
/// The cleaned dataset excludes cancelled/returned transactions per the
/// upstream file content; the full dataset includes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    /// Source file excluding cancelled/returned transactions.
    Cleaned,
    /// Source file including cancellations.
    Full,
}

impl Dataset {
    /// Returns the dataset name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cleaned => "cleaned",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data-quality counters from one load pass.
///
/// Invariant: `rows_parsed + rows_skipped == lines_read`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Physical data lines read, header excluded.
    pub lines_read: usize,
    /// Rows that produced an [`Invoice`].
    pub rows_parsed: usize,
    /// Rows dropped for having fewer fields than the header.
    pub rows_skipped: usize,
}

impl LoadReport {
    /// Returns true if no rows were dropped during the load.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rows_skipped == 0
    }
}

/// Parsed rows together with the report describing how they were produced.
///
/// This is the unit a [`TransactionSource`](crate::TransactionSource)
/// returns and a [`TransactionCache`](crate::TransactionCache) stores, so
/// data-quality counters survive cache hits.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceBatch {
    /// The parsed transaction rows.
    pub invoices: Vec<Invoice>,
    /// Counters from the load pass that produced the rows.
    pub report: LoadReport,
}

impl InvoiceBatch {
    /// Creates a batch from parsed rows and their report.
    #[must_use]
    pub const fn new(invoices: Vec<Invoice>, report: LoadReport) -> Self {
        Self { invoices, report }
    }

    /// Returns the number of rows in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    /// Returns true if the batch holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.iter()
    }

    /// Consumes the batch and returns the underlying rows.
    #[must_use]
    pub fn into_invoices(self) -> Vec<Invoice> {
        self.invoices
    }
}

impl IntoIterator for InvoiceBatch {
    type Item = Invoice;
    type IntoIter = std::vec::IntoIter<Invoice>;

    fn into_iter(self) -> Self::IntoIter {
        self.invoices.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_lines_have_negative_quantity() {
        let line = Invoice {
            quantity: Some(-3),
            ..Default::default()
        };
        assert!(line.is_return());

        let sale = Invoice {
            quantity: Some(3),
            ..Default::default()
        };
        assert!(!sale.is_return());

        // A missing quantity is not a return
        assert!(!Invoice::default().is_return());
    }

    #[test]
    fn invoice_serializes_missing_fields_as_null() {
        let invoice = Invoice {
            stock_code: "A1".to_string(),
            quantity: Some(2),
            ..Default::default()
        };
        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["stock_code"], "A1");
        assert_eq!(json["quantity"], 2);
        assert!(json["unit_price"].is_null());
        assert!(json["customer_id"].is_null());
    }

    #[test]
    fn report_counts_add_up() {
        let report = LoadReport {
            lines_read: 10,
            rows_parsed: 8,
            rows_skipped: 2,
        };
        assert_eq!(report.rows_parsed + report.rows_skipped, report.lines_read);
        assert!(!report.is_clean());
        assert!(LoadReport::default().is_clean());
    }
}

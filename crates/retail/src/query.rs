//! Search, pagination, and aggregate statistics over loaded invoice lists.
//!
//! These helpers are plain in-memory operations: the route layer loads a
//! dataset through the store, narrows it with [`search`], slices it with
//! [`paginate`], and summarizes it with [`summarize`].

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use retail_core::{Invoice, Result, RetailError};

/// One page of results, sliced from a larger list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
    /// Total items across all pages.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: usize,
}

/// Slice one page out of a list.
///
/// Pages are 1-based. A page past the end is a valid, empty page; a zero
/// page number or page size is an [`RetailError::InvalidParameter`].
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>> {
    if page == 0 {
        return Err(RetailError::InvalidParameter(
            "page numbers start at 1".to_string(),
        ));
    }
    if page_size == 0 {
        return Err(RetailError::InvalidParameter(
            "page size must be positive".to_string(),
        ));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total_items);
    let slice: &[T] = if start >= total_items {
        &[]
    } else {
        &items[start..end]
    };

    Ok(Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
    })
}

/// Filter invoices by a free-text search term.
///
/// Matches case-insensitively against invoice number, stock code,
/// description, and country. An empty or whitespace-only term matches
/// everything.
#[must_use]
pub fn search(invoices: &[Invoice], term: &str) -> Vec<Invoice> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return invoices.to_vec();
    }
    invoices
        .iter()
        .filter(|invoice| matches(invoice, &needle))
        .cloned()
        .collect()
}

fn matches(invoice: &Invoice, needle: &str) -> bool {
    invoice.stock_code.to_lowercase().contains(needle)
        || invoice.description.to_lowercase().contains(needle)
        || invoice.country.to_lowercase().contains(needle)
        || invoice
            .invoice_no
            .is_some_and(|no| no.to_string().contains(needle))
}

/// All lines belonging to one transaction.
#[must_use]
pub fn invoice_lines(invoices: &[Invoice], invoice_no: i64) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|invoice| invoice.invoice_no == Some(invoice_no))
        .cloned()
        .collect()
}

/// First line carrying the given stock code, if any.
#[must_use]
pub fn find_by_stock_code(invoices: &[Invoice], stock_code: &str) -> Option<Invoice> {
    invoices
        .iter()
        .find(|invoice| invoice.stock_code == stock_code)
        .cloned()
}

/// Aggregate statistics over a list of invoice lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Number of invoice lines.
    pub line_count: usize,
    /// Number of distinct transactions.
    pub invoice_count: usize,
    /// Number of distinct customers (lines without a customer are excluded).
    pub distinct_customers: usize,
    /// Number of distinct stock codes.
    pub distinct_products: usize,
    /// Sum of line totals, over lines where a total is present.
    pub total_revenue: f64,
    /// Revenue per distinct transaction; `None` when there are none.
    pub average_invoice_value: Option<f64>,
}

/// Compute aggregate statistics over a list of invoice lines.
#[must_use]
pub fn summarize(invoices: &[Invoice]) -> SalesSummary {
    let mut invoice_nos = HashSet::new();
    let mut customers = HashSet::new();
    let mut products = HashSet::new();
    let mut total_revenue = 0.0;

    for invoice in invoices {
        if let Some(no) = invoice.invoice_no {
            invoice_nos.insert(no);
        }
        if let Some(customer) = invoice.customer_id {
            customers.insert(customer);
        }
        if !invoice.stock_code.is_empty() {
            products.insert(invoice.stock_code.as_str());
        }
        if let Some(total) = invoice.total_price {
            total_revenue += total;
        }
    }

    let invoice_count = invoice_nos.len();
    let average_invoice_value =
        (invoice_count > 0).then(|| total_revenue / invoice_count as f64);

    SalesSummary {
        line_count: invoices.len(),
        invoice_count,
        distinct_customers: customers.len(),
        distinct_products: products.len(),
        total_revenue,
        average_invoice_value,
    }
}

/// Revenue summed per country.
#[must_use]
pub fn revenue_by_country(invoices: &[Invoice]) -> HashMap<String, f64> {
    let mut by_country: HashMap<String, f64> = HashMap::new();
    for invoice in invoices {
        if let Some(total) = invoice.total_price {
            *by_country.entry(invoice.country.clone()).or_default() += total;
        }
    }
    by_country
}

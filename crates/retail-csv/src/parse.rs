//! Header mapping and row parsing.

use retail_core::{Invoice, InvoiceBatch, LoadReport};
use tracing::warn;

use crate::{fields, tokenize};

/// One sampled diagnostic per this many skipped rows, not per-occurrence.
const SKIP_LOG_SAMPLE: usize = 10_000;

/// A recognized header column, matched case-sensitively.
///
/// Unrecognized headers map to [`Column::Ignored`]; their values are never
/// read into an [`Invoice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    InvoiceNo,
    StockCode,
    Description,
    Quantity,
    InvoiceDate,
    UnitPrice,
    CustomerId,
    Country,
    TotalPrice,
    InvoiceYear,
    InvoiceMonth,
    Ignored,
}

fn column_for(header: &str) -> Column {
    match header {
        "InvoiceNo" => Column::InvoiceNo,
        "StockCode" => Column::StockCode,
        "Description" => Column::Description,
        "Quantity" => Column::Quantity,
        "InvoiceDate" => Column::InvoiceDate,
        "UnitPrice" => Column::UnitPrice,
        "CustomerID" => Column::CustomerId,
        "Country" => Column::Country,
        "TotalPrice" | "Revenue" => Column::TotalPrice,
        "InvoiceYear" => Column::InvoiceYear,
        "InvoiceMonth" => Column::InvoiceMonth,
        _ => Column::Ignored,
    }
}

/// Parse a whole file's worth of lines into a batch.
///
/// Line 1 defines the column order and is never treated as data. Each
/// subsequent line is parsed independently; a line with fewer fields than
/// the header is skipped and counted.
pub(crate) fn parse_batch(content: &str) -> InvoiceBatch {
    let mut lines = content.lines();
    let Some(header_line) = lines.next() else {
        return InvoiceBatch::default();
    };
    let header: Vec<Column> = tokenize::split_line(header_line)
        .iter()
        .map(|cell| column_for(cell))
        .collect();

    let mut invoices = Vec::new();
    let mut report = LoadReport::default();

    for line in lines {
        report.lines_read += 1;
        let cells = tokenize::split_line(line);
        if cells.len() < header.len() {
            report.rows_skipped += 1;
            if report.rows_skipped % SKIP_LOG_SAMPLE == 0 {
                warn!(
                    skipped = report.rows_skipped,
                    line = report.lines_read,
                    "Skipping incomplete rows"
                );
            }
            continue;
        }
        invoices.push(row_to_invoice(&header, &cells));
        report.rows_parsed += 1;
    }

    InvoiceBatch::new(invoices, report)
}

fn row_to_invoice(header: &[Column], cells: &[String]) -> Invoice {
    let mut invoice = Invoice::default();
    for (column, cell) in header.iter().zip(cells) {
        match column {
            Column::InvoiceNo => invoice.invoice_no = fields::parse_identifier(cell),
            Column::StockCode => invoice.stock_code = cell.clone(),
            Column::Description => invoice.description = cell.clone(),
            Column::Quantity => invoice.quantity = fields::parse_int(cell),
            Column::InvoiceDate => invoice.invoice_date = cell.clone(),
            Column::UnitPrice => invoice.unit_price = fields::parse_float(cell),
            Column::CustomerId => invoice.customer_id = fields::parse_identifier(cell),
            Column::Country => invoice.country = cell.clone(),
            Column::TotalPrice => invoice.total_price = fields::parse_float(cell),
            Column::InvoiceYear => invoice.invoice_year = fields::parse_int(cell),
            Column::InvoiceMonth => invoice.invoice_month = fields::parse_int(cell),
            Column::Ignored => {}
        }
    }

    // Derived once here; an explicit TotalPrice/Revenue value is never
    // overwritten.
    if invoice.total_price.is_none() {
        if let (Some(quantity), Some(unit_price)) = (invoice.quantity, invoice.unit_price) {
            invoice.total_price = Some(f64::from(quantity) * unit_price);
        }
    }
    invoice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_total_price_when_absent() {
        let batch = parse_batch("InvoiceNo,StockCode,Quantity,UnitPrice\n\"INV-001\",A1,3,2.5\n");
        assert_eq!(batch.len(), 1);
        let invoice = &batch.invoices[0];
        assert_eq!(invoice.invoice_no, Some(1));
        assert_eq!(invoice.stock_code, "A1");
        assert_eq!(invoice.quantity, Some(3));
        assert_eq!(invoice.unit_price, Some(2.5));
        assert_eq!(invoice.total_price, Some(7.5));
    }

    #[test]
    fn explicit_total_price_is_used_verbatim() {
        let batch = parse_batch("Quantity,UnitPrice,TotalPrice\n3,2.5,99.0\n");
        assert_eq!(batch.invoices[0].total_price, Some(99.0));
    }

    #[test]
    fn revenue_is_an_alias_for_total_price() {
        let batch = parse_batch("Quantity,UnitPrice,Revenue\n3,2.5,42.0\n");
        assert_eq!(batch.invoices[0].total_price, Some(42.0));
    }

    #[test]
    fn malformed_numeric_field_nulls_the_field_but_keeps_the_row() {
        let batch = parse_batch("InvoiceNo,Quantity,UnitPrice\n536365,six,2.55\n");
        assert_eq!(batch.len(), 1);
        let invoice = &batch.invoices[0];
        assert_eq!(invoice.quantity, None);
        assert_eq!(invoice.unit_price, Some(2.55));
        // No quantity, so no derived total either
        assert_eq!(invoice.total_price, None);
    }

    #[test]
    fn short_rows_are_dropped_and_counted() {
        let batch = parse_batch(
            "InvoiceNo,StockCode,Quantity\n\
             536365,85123A,6\n\
             536366,71053\n",
        );
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.report.lines_read, 2);
        assert_eq!(batch.report.rows_parsed, 1);
        assert_eq!(batch.report.rows_skipped, 1);
    }

    #[test]
    fn nine_column_row_parses_without_truncation() {
        let batch = parse_batch(
            "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country,TotalPrice\n\
             536365,71053,\"WHITE METAL LANTERN\",6,12/1/2010 8:26,3.39,17850,United Kingdom,20.34\n",
        );
        assert_eq!(batch.len(), 1);
        let invoice = &batch.invoices[0];
        assert_eq!(invoice.invoice_no, Some(536_365));
        assert_eq!(invoice.stock_code, "71053");
        assert_eq!(invoice.description, "WHITE METAL LANTERN");
        assert_eq!(invoice.quantity, Some(6));
        assert_eq!(invoice.invoice_date, "12/1/2010 8:26");
        assert_eq!(invoice.unit_price, Some(3.39));
        assert_eq!(invoice.customer_id, Some(17_850));
        assert_eq!(invoice.country, "United Kingdom");
        assert_eq!(invoice.total_price, Some(20.34));
    }

    #[test]
    fn unrecognized_headers_are_ignored() {
        let batch = parse_batch("InvoiceNo,Warehouse,Quantity\n1,STOCKHOLM-3,5\n");
        let invoice = &batch.invoices[0];
        assert_eq!(invoice.invoice_no, Some(1));
        assert_eq!(invoice.quantity, Some(5));
        // "Warehouse" is not a recognized column; its value is never read
        assert_eq!(invoice.stock_code, "");
    }

    #[test]
    fn header_matching_is_case_sensitive() {
        let batch = parse_batch("invoiceno,QUANTITY\n1,5\n");
        let invoice = &batch.invoices[0];
        assert_eq!(invoice.invoice_no, None);
        assert_eq!(invoice.quantity, None);
    }

    #[test]
    fn year_and_month_columns_are_read() {
        let batch = parse_batch("InvoiceNo,InvoiceYear,InvoiceMonth\n1,2010,12\n");
        let invoice = &batch.invoices[0];
        assert_eq!(invoice.invoice_year, Some(2010));
        assert_eq!(invoice.invoice_month, Some(12));
    }

    #[test]
    fn empty_and_header_only_inputs_yield_empty_batches() {
        assert!(parse_batch("").is_empty());

        let header_only = parse_batch("InvoiceNo,Quantity\n");
        assert!(header_only.is_empty());
        assert_eq!(header_only.report.lines_read, 0);
    }

    #[test]
    fn extra_cells_beyond_the_header_are_ignored() {
        let batch = parse_batch("InvoiceNo,Quantity\n1,5,leftover\n");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.invoices[0].quantity, Some(5));
    }
}

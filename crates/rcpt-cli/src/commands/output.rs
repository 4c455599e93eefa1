//! Output formatting shared by `process` and `batch`.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::Serialize;

use rcpt_core::{CategorySummary, ParsedItem, Receipt, StoreInfo};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per item
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for written outputs.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Serialized view of a processed receipt.
#[derive(Serialize)]
struct ReceiptReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'a StoreInfo>,
    items: &'a [ParsedItem],
    total: Decimal,
    categories: Vec<CategorySummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

/// Render a categorized receipt in the requested format.
pub fn format_receipt(
    receipt: &Receipt,
    warnings: &[String],
    format: OutputFormat,
    include_store: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = ReceiptReport {
                store: include_store.then_some(&receipt.store),
                items: &receipt.items,
                total: receipt.total(),
                categories: receipt.category_summary(),
                warnings: warnings.to_vec(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => format_csv(&receipt.items),
        OutputFormat::Text => Ok(format_text(receipt, include_store)),
    }
}

fn format_csv(items: &[ParsedItem]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["name", "quantity", "unit_price", "total_price", "category"])?;

    for item in items {
        let quantity = item.quantity().to_string();
        let unit_price = item.unit_price().to_string();
        let total_price = item.total_price().to_string();
        let category = item.category().map(|c| c.as_str()).unwrap_or_default();

        wtr.write_record([
            item.name(),
            quantity.as_str(),
            unit_price.as_str(),
            total_price.as_str(),
            category,
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(receipt: &Receipt, include_store: bool) -> String {
    let mut output = String::new();

    if include_store && !receipt.store.is_empty() {
        let store = &receipt.store;
        let fields = [
            ("Store", &store.name),
            ("Address", &store.address),
            ("Phone", &store.phone),
            ("Date", &store.date),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                let _ = writeln!(output, "{label}: {value}");
            }
        }
        output.push('\n');
    }

    output.push_str("Items:\n");
    for item in &receipt.items {
        let category = item.category().map(|c| c.as_str()).unwrap_or("-");
        let _ = writeln!(
            output,
            "  {:<28} {:>3} x {:>7} {:>8}  {}",
            item.name(),
            item.quantity(),
            item.unit_price(),
            item.total_price(),
            category
        );
    }
    let _ = writeln!(output, "\nTotal: {}", receipt.total());

    output.push_str("\nBy category:\n");
    for summary in receipt.category_summary() {
        let _ = writeln!(
            output,
            "  {:<14} {:>3} items {:>9}",
            summary.category.as_str(),
            summary.count,
            summary.total
        );
    }

    output
}

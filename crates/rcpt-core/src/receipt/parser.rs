//! Line-by-line receipt parser.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info, trace};

use crate::error::ExtractionError;
use crate::models::config::ParserConfig;
use crate::models::item::{ParsedItem, Receipt, StoreInfo};

use super::rules::{
    clean_item_name, ignore_line, is_boilerplate_name, ExtractionMatch, FieldExtractor,
    PriceExtractor, QuantityExtractor, StoreExtractor, MIN_NAME_LEN,
};
use super::{ReceiptParser, Result};

/// Result of receipt extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted receipt (items are not categorized yet).
    pub receipt: Receipt,
    /// Raw input text.
    pub raw_text: String,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Number of non-empty lines dropped by the line filter.
    pub ignored_lines: usize,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser turning OCR receipt text into line items.
///
/// Every decision is local to one line except the final validation pass;
/// parsing is a pure function of the text and the configured ranges.
pub struct LineParser {
    config: ParserConfig,
    prices: PriceExtractor,
    quantities: QuantityExtractor,
    store: StoreExtractor,
}

impl LineParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ParserConfig::default())
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            config: config.clone(),
            prices: PriceExtractor::from_config(config),
            quantities: QuantityExtractor::from_config(config),
            store: StoreExtractor::from_config(config),
        }
    }

    /// Set the accepted item price range (inclusive).
    pub fn with_price_range(mut self, min_price: Decimal, max_price: Decimal) -> Self {
        self.config.min_price = min_price;
        self.config.max_price = max_price;
        self.prices = self.prices.with_range(min_price, max_price);
        self
    }

    /// Set the largest accepted quantity.
    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        self.config.max_quantity = max_quantity;
        self.quantities = self.quantities.with_max_quantity(max_quantity);
        self
    }

    /// Set how many leading lines may hold the store name and address.
    pub fn with_store_header_lines(mut self, header_lines: usize) -> Self {
        self.config.store_header_lines = header_lines;
        self.store = self.store.with_header_lines(header_lines);
        self
    }

    /// Extract all valid items, in receipt order.
    pub fn parse_receipt(&self, text: &str) -> Vec<ParsedItem> {
        let candidates = lines(text)
            .filter(|line| !self.ignore_line(line))
            .filter_map(|line| self.extract_item(line))
            .collect();

        self.validate_items(candidates)
    }

    /// Parse a single line, applying the line filter and item validation.
    pub fn parse_line(&self, line: &str) -> Option<ParsedItem> {
        let line = line.trim();
        if line.is_empty() || self.ignore_line(line) {
            return None;
        }

        self.extract_item(line)
            .filter(|item| self.is_valid_item(item))
    }

    /// Whether a line is receipt chrome rather than an item candidate.
    pub fn ignore_line(&self, line: &str) -> bool {
        match ignore_line(line) {
            Some(reason) => {
                debug!("Ignoring line {:?}: {:?}", line, reason);
                true
            }
            None => false,
        }
    }

    /// Find the item price on a line.
    pub fn find_price(&self, line: &str) -> Option<ExtractionMatch<Decimal>> {
        self.prices.extract(line)
    }

    /// Find the item quantity on a line (with the price already removed).
    pub fn find_quantity(&self, line: &str) -> Option<ExtractionMatch<u32>> {
        self.quantities.extract(line)
    }

    /// Drop candidates that fail the item sanity checks.
    pub fn validate_items(&self, items: Vec<ParsedItem>) -> Vec<ParsedItem> {
        items
            .into_iter()
            .filter(|item| {
                let valid = self.is_valid_item(item);
                if !valid {
                    debug!("Dropping invalid item {:?} from {:?}", item.name(), item.raw_line());
                }
                valid
            })
            .collect()
    }

    /// Check price, quantity and name of a candidate item.
    pub fn is_valid_item(&self, item: &ParsedItem) -> bool {
        let price = item.total_price();
        if price <= Decimal::ZERO || price > self.config.max_price {
            return false;
        }

        if item.quantity() < 1 || item.quantity() > self.config.max_quantity {
            return false;
        }

        if item.name().chars().count() < MIN_NAME_LEN {
            return false;
        }

        !is_boilerplate_name(item.name())
    }

    /// Extract the store header from receipt text.
    pub fn extract_store_info(&self, text: &str) -> StoreInfo {
        self.store.extract(text)
    }

    fn extract_item(&self, line: &str) -> Option<ParsedItem> {
        let Some(price) = self.find_price(line) else {
            trace!("No price on line {:?}", line);
            return None;
        };
        let remaining = price.remove_from(line);

        let (quantity, remaining) = match self.find_quantity(&remaining) {
            Some(quantity) => (quantity.value, quantity.remove_from(&remaining)),
            None => (1, remaining),
        };

        let name = clean_item_name(&remaining);
        if name.chars().count() < MIN_NAME_LEN {
            trace!("No usable name left on line {:?}", line);
            return None;
        }

        debug!(
            "Parsed item {:?} x{} at {} ({} price)",
            name, quantity, price.value, price.pattern
        );

        Some(ParsedItem::new(name, quantity, price.value, line))
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for LineParser {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        info!("Parsing receipt from {} characters of text", text.len());

        let ignored_lines = lines(text).filter(|line| ignore_line(line).is_some()).count();

        let items = self.parse_receipt(text);
        if items.is_empty() {
            return Err(ExtractionError::NoItems);
        }

        let store = self.extract_store_info(text);
        if store.name.is_none() {
            warnings.push("Could not extract store name".to_string());
        }
        if store.date.is_none() {
            warnings.push("Could not extract purchase date".to_string());
        } else if store.parsed_date.is_none() {
            warnings.push("Purchase date is not a valid calendar date".to_string());
        }

        let receipt = Receipt { store, items };

        debug!(
            "Extracted {} items totalling {} ({} lines ignored)",
            receipt.items.len(),
            receipt.total(),
            ignored_lines
        );

        Ok(ExtractionResult {
            receipt,
            raw_text: text.to_string(),
            warnings,
            ignored_lines,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Trimmed, non-empty lines of the text.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

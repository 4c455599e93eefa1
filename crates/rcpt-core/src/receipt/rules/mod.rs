//! Rule-based field extractors for receipt lines.

pub mod filter;
pub mod names;
pub mod patterns;
pub mod prices;
pub mod quantity;
pub mod store;

pub use filter::{ignore_line, is_boilerplate_name, IgnoreReason};
pub use names::{clean_item_name, title_case, MIN_NAME_LEN};
pub use prices::{parse_price, PriceExtractor, PricePattern, PRICE_PATTERNS};
pub use quantity::{QuantityExtractor, QuantityPattern, QUANTITY_PATTERNS};
pub use store::{extract_store_info, parse_receipt_date, StoreExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract every accepted candidate, highest priority first.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value matched in a line, with the span it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span of the whole match in the source text.
    pub position: (usize, usize),
    /// Source text that was matched.
    pub source: String,
    /// Name of the pattern that produced the match.
    pub pattern: &'static str,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, pattern: &'static str, source: impl Into<String>) -> Self {
        Self {
            value,
            position: (0, 0),
            source: source.into(),
            pattern,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = (start, end);
        self
    }

    /// The text with the matched span cut out.
    pub fn remove_from(&self, text: &str) -> String {
        let (start, end) = self.position;
        let mut remaining = String::with_capacity(text.len());
        remaining.push_str(&text[..start]);
        remaining.push_str(&text[end..]);
        remaining
    }
}

//! Quantity extraction for receipt lines.

use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::{QTY_AT, QTY_LABEL, QTY_PC, QTY_PCS, QTY_TIMES};
use super::{ExtractionMatch, FieldExtractor};
use crate::models::config::ParserConfig;

/// One entry of the ordered quantity pattern table.
pub struct QuantityPattern {
    pub name: &'static str,
    /// Pattern whose first group holds the count.
    pub regex: &'static Regex,
}

lazy_static! {
    /// Quantity patterns in priority order.
    pub static ref QUANTITY_PATTERNS: [QuantityPattern; 5] = [
        QuantityPattern { name: "times", regex: &QTY_TIMES },
        QuantityPattern { name: "at", regex: &QTY_AT },
        QuantityPattern { name: "qty_label", regex: &QTY_LABEL },
        QuantityPattern { name: "pc", regex: &QTY_PC },
        QuantityPattern { name: "pcs", regex: &QTY_PCS },
    ];
}

/// Quantity field extractor. Lines without a match default to one unit,
/// which is the caller's decision.
pub struct QuantityExtractor {
    max_quantity: u32,
}

impl QuantityExtractor {
    pub fn new() -> Self {
        Self::from_config(&ParserConfig::default())
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            max_quantity: config.max_quantity,
        }
    }

    pub fn with_max_quantity(mut self, max_quantity: u32) -> Self {
        self.max_quantity = max_quantity;
        self
    }

    pub fn accepts(&self, quantity: u32) -> bool {
        (1..=self.max_quantity).contains(&quantity)
    }
}

impl Default for QuantityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for QuantityExtractor {
    type Output = ExtractionMatch<u32>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        QUANTITY_PATTERNS
            .iter()
            .filter_map(|pattern| {
                let caps = pattern.regex.captures(text)?;
                let quantity: u32 = caps[1].parse().ok()?;
                if !self.accepts(quantity) {
                    return None;
                }
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(quantity, pattern.name, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

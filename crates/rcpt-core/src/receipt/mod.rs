//! Receipt line item extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, LineParser};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse a whole receipt from OCR text.
    ///
    /// Fails only when the receipt as a whole yields nothing usable.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

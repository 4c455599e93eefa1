//! Core library for grocery receipt processing.
//!
//! This crate provides:
//! - Line item extraction from raw OCR receipt text (name, quantity, prices)
//! - Store header extraction (name, address, phone, date)
//! - Spending categorization of item names against a keyword catalog
//! - Configuration shared by the parser and the categorizer

pub mod category;
pub mod error;
pub mod models;
pub mod receipt;

pub use category::{CategoryCatalog, CategoryMatch, Categorizer, MatchStage, Suggestion};
pub use error::{CategoryError, ExtractionError, RcptError, Result};
pub use models::category::CategoryLabel;
pub use models::config::RcptConfig;
pub use models::item::{CategorySummary, ParsedItem, Receipt, StoreInfo};
pub use receipt::{ExtractionResult, LineParser, ReceiptParser};

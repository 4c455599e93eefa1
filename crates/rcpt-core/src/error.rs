//! Error types for the rcpt-core library.

use thiserror::Error;

use crate::models::category::CategoryLabel;

/// Main error type for the rcpt library.
#[derive(Error, Debug)]
pub enum RcptError {
    /// Receipt extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Categorization error.
    #[error("category error: {0}")]
    Category(#[from] CategoryError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to receipt item extraction.
///
/// Individual lines never fail; these describe a whole receipt that yielded
/// nothing usable, which callers should surface as "try a clearer input".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The input text was empty or whitespace only.
    #[error("receipt text is empty")]
    EmptyInput,

    /// No line of the receipt produced a valid item.
    #[error("could not identify any items in the receipt")]
    NoItems,
}

/// Errors related to the category catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// The label has no keyword list (only `other` is in this position).
    #[error("category '{0}' cannot hold keyword mappings")]
    Unmapped(CategoryLabel),

    /// A string did not name any known category.
    #[error("unknown category: {0}")]
    UnknownLabel(String),

    /// A mapping keyword was empty after normalization.
    #[error("mapping keyword is empty")]
    EmptyKeyword,
}

/// Result type for the rcpt library.
pub type Result<T> = std::result::Result<T, RcptError>;

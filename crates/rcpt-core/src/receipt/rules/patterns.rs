//! Common regex patterns for receipt line extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Line filtering
    pub static ref DIGITS_ONLY: Regex = Regex::new(r"^\d+$").unwrap();

    pub static ref TIMESTAMP_PREFIX: Regex = Regex::new(r"^\d{1,2}[:/]\d{1,2}").unwrap();

    pub static ref NO_ALPHANUMERIC: Regex = Regex::new(r"^[^a-zA-Z0-9]*$").unwrap();

    // Prices, in priority order
    pub static ref PRICE_STANDARD: Regex = Regex::new(r"\$?(\d+\.\d{2})").unwrap();

    pub static ref PRICE_COMMA: Regex = Regex::new(r"(\d+,\d{2})").unwrap();

    pub static ref PRICE_SINGLE_DECIMAL: Regex = Regex::new(r"(\d+\.\d)").unwrap();

    // Quantities, in priority order
    pub static ref QTY_TIMES: Regex = Regex::new(r"(?i)(\d+)\s*x\s*").unwrap();

    pub static ref QTY_AT: Regex = Regex::new(r"(?i)(\d+)\s*@\s*").unwrap();

    pub static ref QTY_LABEL: Regex = Regex::new(r"(?i)qty\s*:?\s*(\d+)").unwrap();

    pub static ref QTY_PC: Regex = Regex::new(r"(?i)(\d+)\s*pc\b").unwrap();

    pub static ref QTY_PCS: Regex = Regex::new(r"(?i)(\d+)\s*pcs\b").unwrap();

    // Item name cleanup
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    pub static ref NAME_DISALLOWED: Regex = Regex::new(r"[^\w\s\-&]").unwrap();

    pub static ref NAME_LABEL_PREFIX: Regex = Regex::new(r"(?i)^(?:item|product)\b\s*:?\s*").unwrap();

    pub static ref NAME_UNIT_SUFFIX: Regex = Regex::new(r"(?i)\s*\b(?:each|ea|pcs|pc)$").unwrap();

    // Store header
    pub static ref PHONE: Regex = Regex::new(
        r"\(?\b\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}\b"
    ).unwrap();

    pub static ref DATE_MDY: Regex = Regex::new(
        r"\b(\d{1,2})[/\-](\d{1,2})[/\-](\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[/\-](\d{1,2})[/\-](\d{1,2})\b"
    ).unwrap();
}

//! Line filtering: decides which receipt lines are never item candidates.

use super::patterns::{DIGITS_ONLY, NO_ALPHANUMERIC, TIMESTAMP_PREFIX};

/// Words marking totals, payment and receipt chrome. Matched as
/// case-insensitive substrings anywhere in the line.
pub const BOILERPLATE_WORDS: &[&str] = &[
    "total",
    "subtotal",
    "tax",
    "change",
    "cash",
    "credit",
    "debit",
    "visa",
    "mastercard",
    "amex",
    "discover",
    "receipt",
    "thank you",
    "thanks",
    "store",
    "location",
    "date",
    "time",
    "cashier",
    "clerk",
    "balance",
    "tender",
    "due",
    "paid",
    "amount",
];

/// Department headings printed between item groups. Matched against the
/// whole line, case-insensitively.
pub const SECTION_HEADERS: &[&str] = &[
    "grocery",
    "produce",
    "dairy",
    "meat",
    "bakery",
    "frozen",
    "beverages",
    "health",
    "beauty",
    "household",
    "pharmacy",
];

/// Words that disqualify an already extracted item name.
pub const NAME_STOPWORDS: &[&str] = &["total", "tax", "subtotal", "balance"];

/// Why a line was dropped before extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The line is a bare number.
    DigitsOnly,
    /// The line starts with a time or date.
    Timestamp,
    /// The line has no letters or digits at all.
    NoAlphanumeric,
    /// The line contains a boilerplate word.
    Boilerplate(&'static str),
    /// The line is a department heading.
    SectionHeader(&'static str),
}

/// Check a trimmed line against the filter rules, in order.
pub fn ignore_line(line: &str) -> Option<IgnoreReason> {
    if DIGITS_ONLY.is_match(line) {
        return Some(IgnoreReason::DigitsOnly);
    }
    if TIMESTAMP_PREFIX.is_match(line) {
        return Some(IgnoreReason::Timestamp);
    }
    if NO_ALPHANUMERIC.is_match(line) {
        return Some(IgnoreReason::NoAlphanumeric);
    }

    let lower = line.to_lowercase();

    if let Some(word) = BOILERPLATE_WORDS.iter().find(|w| lower.contains(*w)) {
        return Some(IgnoreReason::Boilerplate(*word));
    }

    SECTION_HEADERS
        .iter()
        .find(|h| lower == **h)
        .map(|h| IgnoreReason::SectionHeader(*h))
}

/// Second-chance check for names that still look like totals or taxes.
pub fn is_boilerplate_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    NAME_STOPWORDS.iter().any(|w| lower.contains(*w))
}

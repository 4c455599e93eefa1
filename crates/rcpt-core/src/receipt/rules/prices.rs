//! Price extraction for receipt lines.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use super::patterns::{PRICE_COMMA, PRICE_SINGLE_DECIMAL, PRICE_STANDARD};
use super::{ExtractionMatch, FieldExtractor};
use crate::models::config::ParserConfig;

/// One entry of the ordered price pattern table.
pub struct PricePattern {
    /// Short name, reported on matches and in logs.
    pub name: &'static str,
    /// Pattern whose first group holds the numeric part.
    pub regex: &'static Regex,
}

lazy_static! {
    /// Price patterns in priority order.
    pub static ref PRICE_PATTERNS: [PricePattern; 3] = [
        PricePattern { name: "standard", regex: &PRICE_STANDARD },
        PricePattern { name: "comma_decimal", regex: &PRICE_COMMA },
        PricePattern { name: "single_decimal", regex: &PRICE_SINGLE_DECIMAL },
    ];
}

/// Price field extractor.
///
/// Each pattern contributes at most its leftmost match; a match is accepted
/// only when its value falls inside the configured price range.
pub struct PriceExtractor {
    min_price: Decimal,
    max_price: Decimal,
}

impl PriceExtractor {
    pub fn new() -> Self {
        Self::from_config(&ParserConfig::default())
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            min_price: config.min_price,
            max_price: config.max_price,
        }
    }

    /// Set the accepted price range (inclusive).
    pub fn with_range(mut self, min_price: Decimal, max_price: Decimal) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    /// Check a value against the accepted range.
    pub fn accepts(&self, price: Decimal) -> bool {
        price >= self.min_price && price <= self.max_price
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PriceExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in PRICE_PATTERNS.iter() {
            let Some(caps) = pattern.regex.captures(text) else {
                continue;
            };
            let Some(price) = parse_price(&caps[1]) else {
                continue;
            };
            if !self.accepts(price) {
                continue;
            }

            let full_match = &caps[0];
            let span = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or_default();
            results.push(
                ExtractionMatch::new(price, pattern.name, full_match)
                    .with_position(span.0, span.1),
            );
        }

        results
    }
}

/// Parse a price token, accepting either `.` or `,` as the decimal mark.
pub fn parse_price(s: &str) -> Option<Decimal> {
    let normalized = s.trim().trim_start_matches('$').replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1.50"), Some(dec("1.50")));
        assert_eq!(parse_price("3,49"), Some(dec("3.49")));
        assert_eq!(parse_price("$12.00"), Some(dec("12.00")));
        assert_eq!(parse_price("abc"), None);
    }

    #[test]
    fn test_standard_price_with_currency_mark() {
        let extractor = PriceExtractor::new();
        let m = extractor.extract("Bananas 2x $1.50").unwrap();

        assert_eq!(m.value, dec("1.50"));
        assert_eq!(m.source, "$1.50");
        assert_eq!(m.position, (11, 16));
        assert_eq!(m.pattern, "standard");
    }

    #[test]
    fn test_pattern_priority() {
        let extractor = PriceExtractor::new();

        assert_eq!(extractor.extract("Cheese 3,49").unwrap().pattern, "comma_decimal");
        assert_eq!(extractor.extract("Cheese 3,49").unwrap().value, dec("3.49"));

        let m = extractor.extract("Apples 2.5").unwrap();
        assert_eq!(m.pattern, "single_decimal");
        assert_eq!(m.value, dec("2.5"));

        // Standard wins even when a comma price appears first.
        let m = extractor.extract("Wine 12,99 13.49").unwrap();
        assert_eq!(m.value, dec("13.49"));
    }

    #[test]
    fn test_price_boundaries() {
        let extractor = PriceExtractor::new();

        assert_eq!(extractor.extract("Steak 999.99").unwrap().value, dec("999.99"));
        assert_eq!(extractor.extract("Penny candy 0.01").unwrap().value, dec("0.01"));
        assert!(extractor.extract("Television 1000.00").is_none());
        assert!(extractor.extract("Free sample 0.00").is_none());
    }

    #[test]
    fn test_only_leftmost_match_per_pattern() {
        let extractor = PriceExtractor::new();
        assert!(extractor.extract("Grill 1200.00 4.99").is_none());
    }

    #[test]
    fn test_extract_all_one_candidate_per_pattern() {
        let extractor = PriceExtractor::new();
        let all = extractor.extract_all("Mix 1.25 2,50");

        let patterns: Vec<&str> = all.iter().map(|m| m.pattern).collect();
        assert_eq!(patterns, vec!["standard", "comma_decimal", "single_decimal"]);
    }

    #[test]
    fn test_custom_range() {
        let extractor = PriceExtractor::new().with_range(dec("1.00"), dec("50.00"));
        assert!(extractor.extract("Gum 0.99").is_none());
        assert!(extractor.extract("Roast 50.51").is_none());
        assert_eq!(extractor.extract("Roast 49.99").unwrap().value, dec("49.99"));
    }
}

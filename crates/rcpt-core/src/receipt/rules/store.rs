//! Store header extraction (name, address, phone, purchase date).

use chrono::NaiveDate;

use super::patterns::{DATE_MDY, DATE_YMD, PHONE};
use crate::models::config::ParserConfig;
use crate::models::item::StoreInfo;

/// Store header extractor.
pub struct StoreExtractor {
    header_lines: usize,
}

impl StoreExtractor {
    pub fn new() -> Self {
        Self::from_config(&ParserConfig::default())
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            header_lines: config.store_header_lines,
        }
    }

    /// Set how many leading lines may hold the name and address.
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    pub fn extract(&self, text: &str) -> StoreInfo {
        let mut info = StoreInfo::default();

        // Name is the first plausible header line, address the next one
        for line in text.lines().take(self.header_lines) {
            let line = line.trim();
            if line.chars().count() <= 3 || line.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }

            if info.name.is_none() {
                info.name = Some(line.to_string());
            } else if info.address.is_none() && !line.to_lowercase().contains("store") {
                info.address = Some(line.to_string());
            }
        }

        info.phone = text
            .lines()
            .find_map(|line| PHONE.find(line))
            .map(|m| m.as_str().trim().to_string());

        info.date = text.lines().find_map(|line| {
            DATE_MDY
                .find(line)
                .or_else(|| DATE_YMD.find(line))
                .map(|m| m.as_str().to_string())
        });
        info.parsed_date = info.date.as_deref().and_then(parse_receipt_date);

        info
    }
}

impl Default for StoreExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the store header from receipt text.
pub fn extract_store_info(text: &str) -> StoreInfo {
    StoreExtractor::new().extract(text)
}

/// Interpret a printed receipt date.
///
/// `YYYY-MM-DD` is unambiguous; slash or dash dates are read month-first,
/// falling back to day-first when the month would be out of range.
pub fn parse_receipt_date(s: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE_YMD.captures(s) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let caps = DATE_MDY.captures(s)?;
    let first: u32 = caps[1].parse().ok()?;
    let second: u32 = caps[2].parse().ok()?;
    let year = parse_year(&caps[3])?;

    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    match s.len() {
        2 => Some(2000 + year),
        4 => Some(year),
        _ => None,
    }
}

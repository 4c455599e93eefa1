//! Configuration structures for the receipt pipeline.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::CategoryLabel;
use crate::category::Categorizer;
use crate::error::{RcptError, Result};
use crate::receipt::LineParser;

/// Main configuration for the rcpt pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RcptConfig {
    /// Line parser configuration.
    pub parser: ParserConfig,

    /// Categorizer configuration.
    pub categorizer: CategorizerConfig,
}

/// Line parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Smallest price accepted as an item total.
    pub min_price: Decimal,

    /// Largest price accepted as an item total.
    pub max_price: Decimal,

    /// Largest quantity accepted on a line.
    pub max_quantity: u32,

    /// Leading lines searched for the store name and address.
    pub store_header_lines: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_price: Decimal::new(1, 2),
            max_price: Decimal::new(99999, 2),
            max_quantity: 99,
            store_header_lines: 5,
        }
    }
}

/// Categorizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorizerConfig {
    /// Minimum fuzzy similarity (0-100) for the last-resort match.
    pub fuzzy_threshold: u8,

    /// Minimum fuzzy similarity (0-100) for review suggestions.
    pub suggestion_threshold: u8,

    /// Maximum number of review suggestions returned.
    pub max_suggestions: usize,

    /// Extra keyword mappings applied on top of the built-in catalog.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_mappings: BTreeMap<String, CategoryLabel>,
}

impl Default for CategorizerConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 80,
            suggestion_threshold: 70,
            max_suggestions: 5,
            custom_mappings: BTreeMap::new(),
        }
    }
}

impl RcptConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RcptError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| RcptError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build a line parser from the parser section.
    pub fn build_parser(&self) -> LineParser {
        LineParser::from_config(&self.parser)
    }

    /// Build a categorizer with the custom mappings applied.
    pub fn build_categorizer(&self) -> Result<Categorizer> {
        Ok(Categorizer::from_config(&self.categorizer)?)
    }
}

//! Spending category labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CategoryError;

/// A spending category from the fixed, closed catalog.
///
/// Variants are declared in lexicographic order of their snake_case names so
/// the derived `Ord` is the order used for every deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLabel {
    /// Cakes, pastries, loaves.
    Bakery,
    /// Drinks of every kind.
    Beverages,
    /// Tinned and jarred goods, broths, sauces.
    CannedGoods,
    /// Milk, cheese, eggs.
    Dairy,
    /// Freezer aisle.
    Frozen,
    /// Fresh fruit.
    Fruits,
    /// Bread, rice, pasta, cereal.
    Grains,
    /// Cleaning and kitchen supplies.
    Household,
    /// Meat, poultry, seafood.
    Meat,
    /// Fallback for anything unrecognized.
    Other,
    /// Oils, spices, condiments, spreads.
    Pantry,
    /// Hygiene and pharmacy items.
    PersonalCare,
    /// Chips, sweets, nuts.
    Snacks,
    /// Fresh vegetables.
    Vegetables,
}

impl CategoryLabel {
    /// Every label, in tie-break order.
    pub const ALL: [CategoryLabel; 14] = [
        CategoryLabel::Bakery,
        CategoryLabel::Beverages,
        CategoryLabel::CannedGoods,
        CategoryLabel::Dairy,
        CategoryLabel::Frozen,
        CategoryLabel::Fruits,
        CategoryLabel::Grains,
        CategoryLabel::Household,
        CategoryLabel::Meat,
        CategoryLabel::Other,
        CategoryLabel::Pantry,
        CategoryLabel::PersonalCare,
        CategoryLabel::Snacks,
        CategoryLabel::Vegetables,
    ];

    /// The snake_case name used in JSON, CSV and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryLabel::Bakery => "bakery",
            CategoryLabel::Beverages => "beverages",
            CategoryLabel::CannedGoods => "canned_goods",
            CategoryLabel::Dairy => "dairy",
            CategoryLabel::Frozen => "frozen",
            CategoryLabel::Fruits => "fruits",
            CategoryLabel::Grains => "grains",
            CategoryLabel::Household => "household",
            CategoryLabel::Meat => "meat",
            CategoryLabel::Other => "other",
            CategoryLabel::Pantry => "pantry",
            CategoryLabel::PersonalCare => "personal_care",
            CategoryLabel::Snacks => "snacks",
            CategoryLabel::Vegetables => "vegetables",
        }
    }

    /// Whether this label owns keywords in a catalog (everything but `other`).
    pub fn is_mappable(&self) -> bool {
        *self != CategoryLabel::Other
    }
}

impl Default for CategoryLabel {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryLabel {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");

        CategoryLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == normalized)
            .ok_or_else(|| CategoryError::UnknownLabel(s.to_string()))
    }
}

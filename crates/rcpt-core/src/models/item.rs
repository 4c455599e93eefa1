//! Receipt and line item models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::category::CategoryLabel;

/// A single purchased item extracted from one receipt line.
///
/// The unit price is derived from the total and the quantity at
/// construction; after that only the category can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedItem {
    name: String,
    quantity: u32,
    unit_price: Decimal,
    total_price: Decimal,
    raw_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<CategoryLabel>,
}

impl ParsedItem {
    /// Create an uncategorized item.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        total_price: Decimal,
        raw_line: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price: unit_price(total_price, quantity),
            total_price,
            raw_line: raw_line.into(),
            category: None,
        }
    }

    /// Cleaned, title-cased item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of one unit, rounded to cents.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Price paid for the whole line.
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// The receipt line the item was read from.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Assigned category, `None` until a categorizer has run.
    pub fn category(&self) -> Option<CategoryLabel> {
        self.category
    }

    pub fn set_category(&mut self, category: CategoryLabel) {
        self.category = Some(category);
    }

    /// Builder-style variant of [`ParsedItem::set_category`].
    pub fn with_category(mut self, category: CategoryLabel) -> Self {
        self.category = Some(category);
        self
    }
}

fn unit_price(total_price: Decimal, quantity: u32) -> Decimal {
    if quantity == 0 {
        return total_price;
    }
    (total_price / Decimal::from(quantity)).round_dp(2)
}

/// Store information read from the receipt header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreInfo {
    /// Store name (first plausible header line).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Address line following the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Phone number as printed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Purchase date as printed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Purchase date, when the printed form could be interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_date: Option<NaiveDate>,
}

impl StoreInfo {
    /// Check if any header field was found.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.phone.is_none() && self.date.is_none()
    }
}

/// A parsed receipt: header plus ordered items.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Receipt {
    /// Store header.
    pub store: StoreInfo,

    /// Items in receipt order.
    pub items: Vec<ParsedItem>,
}

impl Receipt {
    /// Sum of all item totals.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|i| i.total_price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Per-category item counts and totals, ordered by label.
    pub fn category_summary(&self) -> Vec<CategorySummary> {
        CategorySummary::from_items(&self.items)
    }
}

/// Item count and spending for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: CategoryLabel,
    pub count: usize,
    pub total: Decimal,
}

impl CategorySummary {
    /// Group items by category. Uncategorized items count as `other`.
    pub fn from_items(items: &[ParsedItem]) -> Vec<CategorySummary> {
        let mut groups: BTreeMap<CategoryLabel, (usize, Decimal)> = BTreeMap::new();

        for item in items {
            let entry = groups
                .entry(item.category.unwrap_or_default())
                .or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += item.total_price;
        }

        groups
            .into_iter()
            .map(|(category, (count, total))| CategorySummary { category, count, total })
            .collect()
    }
}

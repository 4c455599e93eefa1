//! Marker words hinting at a category when no keyword matched.

use crate::models::category::CategoryLabel;

/// A marker substring and the category it implies.
///
/// A marker without a category (`fresh`) is recognized but implies nothing,
/// so evaluation continues with the next marker.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub word: &'static str,
    pub category: Option<CategoryLabel>,
}

/// Markers in evaluation order.
pub const MARKERS: &[Marker] = &[
    Marker { word: "organic", category: Some(CategoryLabel::Vegetables) },
    Marker { word: "fresh", category: None },
    Marker { word: "frozen", category: Some(CategoryLabel::Frozen) },
    Marker { word: "canned", category: Some(CategoryLabel::CannedGoods) },
    Marker { word: "whole", category: Some(CategoryLabel::Grains) },
    Marker { word: "ground", category: Some(CategoryLabel::Meat) },
];

/// First marker contained in the (normalized) name that implies a category.
pub fn match_marker(name: &str) -> Option<&'static Marker> {
    MARKERS
        .iter()
        .filter(|marker| marker.category.is_some())
        .find(|marker| name.contains(marker.word))
}

//! Matching cascade mapping item names to categories.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::CategoryError;
use crate::models::category::CategoryLabel;
use crate::models::config::CategorizerConfig;
use crate::models::item::{ParsedItem, Receipt};

use super::catalog::{normalize, CategoryCatalog};
use super::markers::match_marker;
use super::similarity::ratio;

/// Cascade stage that decided a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    /// The whole name is a catalog keyword.
    Exact,
    /// A keyword is contained in the name or the name in a keyword.
    Substring,
    /// A marker word such as "frozen" or "canned".
    Marker,
    /// Fuzzy similarity above the threshold.
    Fuzzy,
    /// Nothing matched.
    Default,
}

/// Outcome of categorizing one name, with what matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatch {
    pub category: CategoryLabel,
    pub stage: MatchStage,
    /// Keyword or marker that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Substring length or similarity score, depending on the stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<usize>,
}

impl CategoryMatch {
    fn new(category: CategoryLabel, stage: MatchStage, keyword: &str, score: usize) -> Self {
        Self {
            category,
            stage,
            keyword: Some(keyword.to_string()),
            score: Some(score),
        }
    }

    fn fallback() -> Self {
        Self {
            category: CategoryLabel::Other,
            stage: MatchStage::Default,
            keyword: None,
            score: None,
        }
    }
}

/// A possible category for an item that fell through to `other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub category: CategoryLabel,
    pub keyword: String,
    /// Similarity on a 0-100 scale.
    pub score: u8,
}

/// Categorizer owning a keyword catalog.
///
/// Lookups run against an immutable snapshot of the catalog. Adding a
/// mapping replaces the snapshot under the write lock, so concurrent readers
/// see either the old or the new catalog, never a partial update.
pub struct Categorizer {
    catalog: RwLock<Arc<CategoryCatalog>>,
    fuzzy_threshold: u8,
    suggestion_threshold: u8,
    max_suggestions: usize,
}

impl Categorizer {
    /// Create a categorizer over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(CategoryCatalog::builtin())
    }

    /// Create a categorizer over the given catalog with default thresholds.
    pub fn with_catalog(catalog: CategoryCatalog) -> Self {
        let defaults = CategorizerConfig::default();
        Self {
            catalog: RwLock::new(Arc::new(catalog)),
            fuzzy_threshold: defaults.fuzzy_threshold,
            suggestion_threshold: defaults.suggestion_threshold,
            max_suggestions: defaults.max_suggestions,
        }
    }

    /// Build from configuration, applying its custom mappings to the
    /// built-in catalog.
    pub fn from_config(config: &CategorizerConfig) -> Result<Self, CategoryError> {
        let mut catalog = CategoryCatalog::builtin();
        for (keyword, category) in &config.custom_mappings {
            catalog.add_mapping(keyword, *category)?;
        }

        Ok(Self::with_catalog(catalog)
            .with_fuzzy_threshold(config.fuzzy_threshold)
            .with_suggestion_threshold(config.suggestion_threshold)
            .with_max_suggestions(config.max_suggestions))
    }

    /// Set the minimum similarity for the fuzzy stage.
    pub fn with_fuzzy_threshold(mut self, threshold: u8) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    /// Set the default minimum similarity for suggestions.
    pub fn with_suggestion_threshold(mut self, threshold: u8) -> Self {
        self.suggestion_threshold = threshold;
        self
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Current catalog snapshot.
    pub fn snapshot(&self) -> Arc<CategoryCatalog> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All labels an item can receive, `other` included.
    pub fn categories(&self) -> Vec<CategoryLabel> {
        CategoryLabel::ALL.to_vec()
    }

    /// Categorize an item name. Never fails; unknown names get `other`.
    pub fn categorize(&self, name: &str) -> CategoryLabel {
        self.classify(name).category
    }

    /// Categorize an item name and report which stage decided it.
    pub fn classify(&self, name: &str) -> CategoryMatch {
        let name = normalize(name);
        if name.is_empty() {
            return CategoryMatch::fallback();
        }

        let catalog = self.snapshot();
        let result = Self::cascade(&catalog, &name, self.fuzzy_threshold);
        debug!(
            "Categorized {:?} as {} ({:?})",
            name, result.category, result.stage
        );
        result
    }

    fn cascade(catalog: &CategoryCatalog, name: &str, fuzzy_threshold: u8) -> CategoryMatch {
        if let Some(category) = catalog.lookup(name) {
            return CategoryMatch::new(category, MatchStage::Exact, name, name.len());
        }
        trace!("No exact match for {:?}", name);

        if let Some((category, keyword, score)) = best_substring_match(catalog, name) {
            return CategoryMatch::new(category, MatchStage::Substring, keyword, score);
        }
        trace!("No substring match for {:?}", name);

        if let Some((category, word)) = match_marker(name).and_then(|m| Some((m.category?, m.word))) {
            return CategoryMatch::new(category, MatchStage::Marker, word, word.len());
        }
        trace!("No marker match for {:?}", name);

        if let Some((category, keyword, score)) = best_fuzzy_match(catalog, name) {
            if score >= fuzzy_threshold {
                return CategoryMatch::new(category, MatchStage::Fuzzy, keyword, score as usize);
            }
            trace!("Best fuzzy match for {:?} is {:?} at {}", name, keyword, score);
        }

        CategoryMatch::fallback()
    }

    /// Assign a category to every item.
    pub fn categorize_items(&self, items: &mut [ParsedItem]) {
        for item in items.iter_mut() {
            let category = self.categorize(item.name());
            item.set_category(category);
        }
    }

    /// Assign a category to every item of a receipt.
    pub fn categorize_receipt(&self, receipt: &mut Receipt) {
        self.categorize_items(&mut receipt.items);
    }

    /// Map a name to a category from now on.
    ///
    /// This is the only mutating operation; it is serialized with all
    /// readers and writers.
    pub fn add_custom_mapping(&self, name: &str, category: CategoryLabel) -> Result<(), CategoryError> {
        if !category.is_mappable() {
            return Err(CategoryError::Unmapped(category));
        }
        if normalize(name).is_empty() {
            return Err(CategoryError::EmptyKeyword);
        }

        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        // Readers holding the previous snapshot keep it; the copy is ours
        Arc::make_mut(&mut guard).add_mapping(name, category)?;

        debug!("Mapped {:?} to {}", name, category);
        Ok(())
    }

    /// Review suggestions for a name, using the configured threshold.
    pub fn suggest_categories(&self, name: &str) -> Vec<Suggestion> {
        self.suggest_categories_above(name, self.suggestion_threshold)
    }

    /// Every keyword scoring at least `threshold`, best first, capped at the
    /// configured maximum (5 by default).
    pub fn suggest_categories_above(&self, name: &str, threshold: u8) -> Vec<Suggestion> {
        let name = normalize(name);
        let catalog = self.snapshot();

        let mut suggestions: Vec<Suggestion> = catalog
            .iter()
            .filter_map(|(category, keyword)| {
                let score = ratio(&name, keyword);
                (score >= threshold).then(|| Suggestion {
                    category,
                    keyword: keyword.to_string(),
                    score,
                })
            })
            .collect();

        // Stable: equal scores keep catalog order
        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        suggestions.truncate(self.max_suggestions);
        suggestions
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Longest keyword contained in the name, or longest name contained in a
/// keyword. Earlier (category, keyword) pairs win ties.
fn best_substring_match<'a>(
    catalog: &'a CategoryCatalog,
    name: &str,
) -> Option<(CategoryLabel, &'a str, usize)> {
    let mut best: Option<(CategoryLabel, &'a str, usize)> = None;
    let mut best_score = 0;

    for (category, keyword) in catalog.iter() {
        let score = if name.contains(keyword) {
            keyword.len()
        } else if keyword.contains(name) {
            name.len()
        } else {
            continue;
        };

        if score > best_score {
            best_score = score;
            best = Some((category, keyword, score));
        }
    }

    best
}

/// Highest-similarity keyword. Earlier pairs win ties.
fn best_fuzzy_match<'a>(
    catalog: &'a CategoryCatalog,
    name: &str,
) -> Option<(CategoryLabel, &'a str, u8)> {
    let mut best: Option<(CategoryLabel, &'a str, u8)> = None;

    for (category, keyword) in catalog.iter() {
        let score = ratio(name, keyword);
        if best.is_none_or(|(_, _, best_score)| score > best_score) {
            best = Some((category, keyword, score));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn stage(categorizer: &Categorizer, name: &str) -> (CategoryLabel, MatchStage) {
        let m = categorizer.classify(name);
        (m.category, m.stage)
    }

    #[test]
    fn test_exact_match() {
        let categorizer = Categorizer::new();
        assert_eq!(stage(&categorizer, "Bananas"), (CategoryLabel::Fruits, MatchStage::Exact));
        assert_eq!(stage(&categorizer, "  EGGS "), (CategoryLabel::Dairy, MatchStage::Exact));
    }

    #[test]
    fn test_substring_match() {
        let categorizer = Categorizer::new();
        assert_eq!(stage(&categorizer, "2% Milk"), (CategoryLabel::Dairy, MatchStage::Substring));

        // Longest contained keyword wins: "peanut butter" over "butter"
        assert_eq!(categorizer.categorize("Peanut Butter Cups"), CategoryLabel::Pantry);

        // Name contained in a keyword
        let m = categorizer.classify("Brussels");
        assert_eq!(m.category, CategoryLabel::Vegetables);
        assert_eq!(m.keyword.as_deref(), Some("brussels sprouts"));
        assert_eq!(m.score, Some(8));
    }

    #[test]
    fn test_keywords_shared_between_categories() {
        let categorizer = Categorizer::new();

        assert_eq!(stage(&categorizer, "Bagel"), (CategoryLabel::Grains, MatchStage::Exact));
        assert_eq!(stage(&categorizer, "Muffins"), (CategoryLabel::Grains, MatchStage::Exact));
        assert_eq!(stage(&categorizer, "Bagels"), (CategoryLabel::Bakery, MatchStage::Exact));
        assert_eq!(stage(&categorizer, "Ice Cream"), (CategoryLabel::Frozen, MatchStage::Exact));
        assert_eq!(stage(&categorizer, "Crackers"), (CategoryLabel::Snacks, MatchStage::Exact));

        // "ice cream" scores 9 under dairy and frozen; dairy comes first
        let m = categorizer.classify("Ice Cream Bar");
        assert_eq!(m.category, CategoryLabel::Dairy);
        assert_eq!(m.stage, MatchStage::Substring);
        assert_eq!(m.keyword.as_deref(), Some("ice cream"));
    }

    #[test]
    fn test_substring_tie_resolves_to_earlier_label() {
        // "rice" (grains) and "milk" (dairy) both score 4
        let categorizer = Categorizer::new();
        assert_eq!(categorizer.categorize("Rice Milk"), CategoryLabel::Dairy);

        let catalog = CategoryCatalog::from_entries([
            (CategoryLabel::Snacks, vec!["apple"]),
            (CategoryLabel::Fruits, vec!["mango"]),
        ])
        .unwrap();
        let categorizer = Categorizer::with_catalog(catalog);
        assert_eq!(categorizer.categorize("apple mango"), CategoryLabel::Fruits);
        assert_eq!(categorizer.categorize("mango apple"), CategoryLabel::Fruits);
    }

    #[test]
    fn test_marker_match() {
        let categorizer = Categorizer::new();
        assert_eq!(stage(&categorizer, "Frozen Lasagna"), (CategoryLabel::Frozen, MatchStage::Marker));
        assert_eq!(
            stage(&categorizer, "Canned Jackfruit"),
            (CategoryLabel::CannedGoods, MatchStage::Marker)
        );
        assert_eq!(
            stage(&categorizer, "Organic Kohlrabi"),
            (CategoryLabel::Vegetables, MatchStage::Marker)
        );
        assert_eq!(
            stage(&categorizer, "Fresh Whole Grain Loaf"),
            (CategoryLabel::Grains, MatchStage::Marker)
        );
    }

    #[test]
    fn test_fuzzy_match() {
        let categorizer = Categorizer::new();

        let m = categorizer.classify("Bananna");
        assert_eq!(m.category, CategoryLabel::Fruits);
        assert_eq!(m.stage, MatchStage::Fuzzy);
        assert_eq!(m.keyword.as_deref(), Some("banana"));
        assert_eq!(m.score, Some(92));

        assert_eq!(categorizer.categorize("Brocoli"), CategoryLabel::Vegetables);
    }

    #[test]
    fn test_fuzzy_threshold() {
        let categorizer = Categorizer::new().with_fuzzy_threshold(95);
        assert_eq!(categorizer.categorize("Bananna"), CategoryLabel::Other);
    }

    #[test]
    fn test_unknown_is_other() {
        let categorizer = Categorizer::new();
        assert_eq!(stage(&categorizer, "xyz123nonsense"), (CategoryLabel::Other, MatchStage::Default));
        assert_eq!(categorizer.categorize(""), CategoryLabel::Other);
        assert_eq!(categorizer.categorize("   "), CategoryLabel::Other);
    }

    #[test]
    fn test_categorize_is_total_and_deterministic() {
        let categorizer = Categorizer::new();
        let names = [
            "Bananas", "2% Milk", "xyz123nonsense", "?", "a", "ÄÖÜ", "Frozen", "Rice Milk",
            "Organic Fuji Apples", "Tp 12pk", "\u{1F34C}",
        ];

        for name in names {
            let first = categorizer.categorize(name);
            assert!(categorizer.categories().contains(&first));
            assert_eq!(categorizer.categorize(name), first);
        }
    }

    #[test]
    fn test_custom_mapping() {
        let categorizer = Categorizer::new();
        assert_eq!(categorizer.categorize("Kimchi"), CategoryLabel::Other);

        categorizer.add_custom_mapping("Kimchi", CategoryLabel::Vegetables).unwrap();
        assert_eq!(stage(&categorizer, "kimchi"), (CategoryLabel::Vegetables, MatchStage::Exact));

        categorizer.add_custom_mapping("ice cream", CategoryLabel::Dairy).unwrap();
        assert_eq!(categorizer.categorize("Ice Cream"), CategoryLabel::Dairy);

        assert_eq!(
            categorizer.add_custom_mapping("spam", CategoryLabel::Other),
            Err(CategoryError::Unmapped(CategoryLabel::Other))
        );
        assert_eq!(
            categorizer.add_custom_mapping("", CategoryLabel::Meat),
            Err(CategoryError::EmptyKeyword)
        );
    }

    #[test]
    fn test_snapshot_isolation() {
        let categorizer = Categorizer::new();
        let before = categorizer.snapshot();

        categorizer.add_custom_mapping("kimchi", CategoryLabel::Vegetables).unwrap();

        assert_eq!(before.lookup("kimchi"), None);
        assert_eq!(categorizer.snapshot().lookup("kimchi"), Some(CategoryLabel::Vegetables));
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        let categorizer = Categorizer::new();

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..200 {
                        assert_eq!(categorizer.categorize("Bananas"), CategoryLabel::Fruits);
                        let label = categorizer.categorize("dragonfruit");
                        assert!(label == CategoryLabel::Other || label == CategoryLabel::Fruits);
                    }
                });
            }
            s.spawn(|| {
                for i in 0..50 {
                    categorizer
                        .add_custom_mapping(&format!("exotic {i}"), CategoryLabel::Fruits)
                        .unwrap();
                }
                categorizer
                    .add_custom_mapping("dragonfruit", CategoryLabel::Fruits)
                    .unwrap();
            });
        });

        assert_eq!(categorizer.categorize("dragonfruit"), CategoryLabel::Fruits);
        assert_eq!(categorizer.snapshot().keywords(CategoryLabel::Fruits).len(), 42 + 51);
    }

    #[test]
    fn test_categorizer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Categorizer>();
    }

    #[test]
    fn test_suggestions() {
        let categorizer = Categorizer::new();
        let suggestions = categorizer.suggest_categories("chiken");

        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);
        assert_eq!(
            suggestions[0],
            Suggestion {
                category: CategoryLabel::Meat,
                keyword: "chicken".to_string(),
                score: 92,
            }
        );
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(suggestions.iter().all(|s| s.score >= 70));
    }

    #[test]
    fn test_suggestions_are_capped() {
        let categorizer = Categorizer::new();
        let suggestions = categorizer.suggest_categories_above("apple", 0);

        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].keyword, "apple");
        assert_eq!(suggestions[0].score, 100);
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));

        assert!(categorizer.suggest_categories("xyz123nonsense").is_empty());
    }

    #[test]
    fn test_from_config() {
        let mut config = CategorizerConfig::default();
        config.custom_mappings.insert("kimchi".to_string(), CategoryLabel::Vegetables);
        config.max_suggestions = 2;

        let categorizer = Categorizer::from_config(&config).unwrap();
        assert_eq!(categorizer.categorize("Kimchi"), CategoryLabel::Vegetables);
        assert!(categorizer.suggest_categories_above("apple", 0).len() <= 2);

        config.custom_mappings.insert("mystery".to_string(), CategoryLabel::Other);
        assert!(Categorizer::from_config(&config).is_err());
    }

    #[test]
    fn test_categorize_items() {
        let categorizer = Categorizer::new();
        let mut items = vec![
            ParsedItem::new("Bananas", 2, Decimal::new(150, 2), "Bananas 2x $1.50"),
            ParsedItem::new("Sourdough Bread", 1, Decimal::new(599, 2), "Sourdough Bread 5.99"),
            ParsedItem::new("Widget", 1, Decimal::new(100, 2), "Widget 1.00"),
        ];

        categorizer.categorize_items(&mut items);

        let categories: Vec<Option<CategoryLabel>> = items.iter().map(|i| i.category()).collect();
        assert_eq!(
            categories,
            vec![
                Some(CategoryLabel::Fruits),
                Some(CategoryLabel::Grains),
                Some(CategoryLabel::Other),
            ]
        );
    }
}

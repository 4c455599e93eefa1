//! Category keyword catalog with a reverse index for exact lookups.

use std::collections::{BTreeMap, HashMap};

use crate::error::CategoryError;
use crate::models::category::CategoryLabel;

use super::data::BUILTIN_KEYWORDS;

/// Keyword lists per category plus a keyword → category index.
///
/// Categories iterate in `CategoryLabel` order and keywords in insertion
/// order, so every scan over the catalog is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    keywords: BTreeMap<CategoryLabel, Vec<String>>,
    index: HashMap<String, CategoryLabel>,
}

impl CategoryCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in grocery catalog.
    ///
    /// Keywords listed under several categories stay in every list; the
    /// exact-lookup index takes the category that comes last in the built-in
    /// table (so `ice cream` looks up as frozen, `bagels` as bakery).
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (category, keywords) in BUILTIN_KEYWORDS {
            for keyword in *keywords {
                catalog.insert(*category, normalize(keyword), true);
            }
        }
        catalog
    }

    /// Build a catalog from explicit keyword lists.
    ///
    /// When a keyword is listed under several categories, the index points
    /// at the earliest category in label order.
    pub fn from_entries<I, K, S>(entries: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = (CategoryLabel, K)>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouped: BTreeMap<CategoryLabel, Vec<String>> = BTreeMap::new();
        for (category, keywords) in entries {
            if !category.is_mappable() {
                return Err(CategoryError::Unmapped(category));
            }
            let list = grouped.entry(category).or_default();
            for keyword in keywords {
                let keyword = normalize(keyword.as_ref());
                if keyword.is_empty() {
                    return Err(CategoryError::EmptyKeyword);
                }
                list.push(keyword);
            }
        }

        let mut catalog = Self::new();
        for (category, keywords) in grouped {
            for keyword in keywords {
                catalog.insert(category, keyword, false);
            }
        }
        Ok(catalog)
    }

    /// Map a keyword to a category, overwriting any previous index entry.
    pub fn add_mapping(&mut self, keyword: &str, category: CategoryLabel) -> Result<(), CategoryError> {
        if !category.is_mappable() {
            return Err(CategoryError::Unmapped(category));
        }
        let keyword = normalize(keyword);
        if keyword.is_empty() {
            return Err(CategoryError::EmptyKeyword);
        }

        self.insert(category, keyword, true);
        Ok(())
    }

    /// Exact lookup of a name (normalized first).
    pub fn lookup(&self, name: &str) -> Option<CategoryLabel> {
        self.index.get(&normalize(name)).copied()
    }

    /// Keywords listed under a category.
    pub fn keywords(&self, category: CategoryLabel) -> &[String] {
        self.keywords.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every (category, keyword) pair in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryLabel, &str)> {
        self.keywords
            .iter()
            .flat_map(|(category, keywords)| keywords.iter().map(move |k| (*category, k.as_str())))
    }

    /// Categories that own at least one keyword.
    pub fn categories(&self) -> impl Iterator<Item = CategoryLabel> + '_ {
        self.keywords.keys().copied()
    }

    /// Number of (category, keyword) pairs.
    pub fn len(&self) -> usize {
        self.keywords.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, category: CategoryLabel, keyword: String, overwrite: bool) {
        let list = self.keywords.entry(category).or_default();
        if !list.contains(&keyword) {
            list.push(keyword.clone());
        }

        if overwrite {
            self.index.insert(keyword, category);
        } else {
            self.index.entry(keyword).or_insert(category);
        }
    }
}

/// Lowercase and trim a name or keyword.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

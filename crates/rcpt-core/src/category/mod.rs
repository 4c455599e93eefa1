//! Item categorization against a keyword catalog.

mod catalog;
mod categorizer;
mod data;
pub mod markers;
pub mod similarity;

pub use catalog::{normalize, CategoryCatalog};
pub use categorizer::{CategoryMatch, Categorizer, MatchStage, Suggestion};

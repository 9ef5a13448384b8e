//! Filter View: category selection over a local collection snapshot.

use contracts::domain::common::Categorized;

/// Selector value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Maps a `<select>` value to a filter; `"all"` is the sentinel.
    pub fn from_selector(selector: &str) -> Self {
        if selector == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selector.to_string())
        }
    }

    pub fn as_selector(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Exact, case-sensitive match.
    pub fn matches<T: Categorized>(&self, entity: &T) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entity.category() == Some(category.as_str()),
        }
    }
}

pub fn filter_by_category<T: Categorized + Clone>(entities: &[T], filter: &CategoryFilter) -> Vec<T> {
    match filter {
        CategoryFilter::All => entities.to_vec(),
        CategoryFilter::Only(_) => entities
            .iter()
            .filter(|entity| filter.matches(*entity))
            .cloned()
            .collect(),
    }
}

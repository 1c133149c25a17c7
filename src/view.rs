//! Derived view over the loaded recipes: search filter plus sort order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::HomeError;
use crate::i18n::messages;
use crate::model::Recipe;

/// Sort options offered on the home page, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Newest first (highest id first)
    #[default]
    Latest,
    Popularity,
    Rating,
    Reviews,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Latest,
        SortOrder::Popularity,
        SortOrder::Rating,
        SortOrder::Reviews,
    ];

    /// Value used on the wire and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::Popularity => "popularity",
            SortOrder::Rating => "rating",
            SortOrder::Reviews => "reviews",
        }
    }

    /// Default-language menu label, used as the translation key
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Latest => messages::SORT_LATEST,
            SortOrder::Popularity => messages::SORT_POPULARITY,
            SortOrder::Rating => messages::SORT_RATING,
            SortOrder::Reviews => messages::SORT_REVIEWS,
        }
    }

    /// Parse a sort value, treating anything unknown as [`SortOrder::Latest`].
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Compare two recipes under this order.
    ///
    /// Popularity and Reviews order exactly like Latest and Rating. Ids
    /// without a numeric value sort below every numeric id, whatever its size.
    fn compare(&self, a: &Recipe, b: &Recipe) -> Ordering {
        match self {
            SortOrder::Latest | SortOrder::Popularity => b.numeric_id().cmp(&a.numeric_id()),
            SortOrder::Rating | SortOrder::Reviews => a.numeric_id().cmp(&b.numeric_id()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = HomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| HomeError::InvalidSortOrder(s.to_string()))
    }
}

/// Sort recipes newest first, the default collection order after a load.
pub fn sort_newest_first(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| SortOrder::Latest.compare(a, b));
}

/// Whether a recipe name contains the search term, ignoring case.
pub fn matches_search(recipe: &Recipe, search_term: &str) -> bool {
    search_term.is_empty()
        || recipe
            .recipe_name
            .to_lowercase()
            .contains(&search_term.to_lowercase())
}

/// Compute the visible recipes: filter by name, then sort.
///
/// The sort is stable, so recipes with equal keys keep their collection order.
pub fn derive_view<'a>(
    recipes: &'a [Recipe],
    search_term: &str,
    sort_order: SortOrder,
) -> Vec<&'a Recipe> {
    let mut visible: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| matches_search(recipe, search_term))
        .collect();

    visible.sort_by(|a, b| sort_order.compare(a, b));
    visible
}

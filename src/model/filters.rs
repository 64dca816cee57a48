use crate::model::recipe::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};

/// Structured search criteria. The default value places no constraints:
/// empty `search_term` means no text filter, empty `active_tags` means no
/// tag filter, and each `None` means the corresponding filter is off.
///
/// `active_tags` semantics are conjunctive: a recipe must carry every
/// active tag to pass. `servings` is a minimum, `max_prep_time` a maximum
/// in minutes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub search_term: String,
    pub active_tags: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub max_prep_time: Option<u32>,
    pub servings: Option<u32>,
}

impl SearchFilters {
    /// Filters with no constraints; `search` with these returns the
    /// whole corpus in input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no filter (text or structured) is active.
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.active_tags.is_empty()
            && self.difficulty.is_none()
            && self.max_prep_time.is_none()
            && self.servings.is_none()
    }
}

/// One search hit. `score` is reserved for text-match relevance; for
/// now every hit reports a constant 1.0 (the fuzzy stage's real
/// dissimilarity is not threaded through yet).
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    pub recipe: &'a Recipe,
    pub score: f32,
}

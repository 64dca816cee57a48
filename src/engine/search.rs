use crate::engine::config::EngineConfig;
use crate::engine::filter;
use crate::engine::fuzzy::FuzzyIndex;
use crate::engine::related;
use crate::error::Result;
use crate::ingest::normalize::normalize_tag;
use crate::model::{Recipe, SearchFilters, SearchResult};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, warn};

/// The search facade over one immutable corpus snapshot.
///
/// Owns a read-only copy of the corpus and a fuzzy index built once at
/// construction; every query recomputes its result from that snapshot.
/// To change the corpus, build a new engine and swap it in whole.
pub struct RecipeSearchEngine {
    recipes: Vec<Recipe>,
    index: FuzzyIndex,
    config: EngineConfig,
}

impl RecipeSearchEngine {
    /// Build an engine with the default configuration.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        // Default configuration always validates.
        Self::build(recipes, EngineConfig::default())
    }

    /// Build an engine with caller-supplied configuration.
    pub fn with_config(recipes: Vec<Recipe>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(recipes, config))
    }

    fn build(recipes: Vec<Recipe>, config: EngineConfig) -> Self {
        warn_on_duplicate_ids(&recipes);
        let index = FuzzyIndex::build(&recipes, &config);
        info!("Search engine ready: {} recipes indexed", recipes.len());
        Self {
            recipes,
            index,
            config,
        }
    }

    /// Search the corpus. A non-blank `search_term` runs the fuzzy
    /// text stage first (best match first); the structured filters
    /// then narrow that candidate sequence without reordering it. A
    /// blank term starts from the full corpus in input order.
    ///
    /// An empty result is a normal value, never an error. Every hit
    /// reports the placeholder score 1.0 (the fuzzy stage's true
    /// dissimilarity is computed but not yet surfaced here).
    pub fn search(&self, filters: &SearchFilters) -> Vec<SearchResult<'_>> {
        let candidates: Vec<&Recipe> = if filters.search_term.trim().is_empty() {
            self.recipes.iter().collect()
        } else {
            self.index
                .query(&filters.search_term)
                .into_iter()
                .map(|(i, _)| &self.recipes[i])
                .collect()
        };

        let survivors = filter::apply(candidates, filters);
        debug!(
            "Search {:?}: {} of {} recipes",
            filters.search_term,
            survivors.len(),
            self.recipes.len()
        );

        survivors
            .into_iter()
            .map(|recipe| SearchResult { recipe, score: 1.0 })
            .collect()
    }

    /// Every tag and primary tag in the corpus: deduplicated,
    /// case-sensitive, alphabetical.
    pub fn all_tags(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .recipes
            .iter()
            .flat_map(|r| r.tags.iter().chain(r.primary_tags.iter()))
            .map(String::as_str)
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// All recipes carrying `tag` (in tags or primary_tags), corpus
    /// order. The tag is normalized before comparison.
    pub fn recipes_by_tag(&self, tag: &str) -> Vec<&Recipe> {
        let tag = normalize_tag(tag);
        self.recipes.iter().filter(|r| r.has_tag(&tag)).collect()
    }

    /// Related recipes by tag overlap, using the configured limit
    /// (3 by default).
    pub fn related_recipes(&self, recipe: &Recipe) -> Vec<&Recipe> {
        self.related_recipes_with_limit(recipe, self.config.related_limit)
    }

    /// Related recipes by tag overlap with an explicit limit.
    pub fn related_recipes_with_limit(&self, recipe: &Recipe, limit: usize) -> Vec<&Recipe> {
        related::related_to(&self.recipes, recipe, limit)
    }

    /// The corpus snapshot this engine was built over.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

// Duplicate ids are a data-quality problem, not a runtime fault: the
// engine cannot tell which duplicate is authoritative, so it reports
// and carries on.
fn warn_on_duplicate_ids(recipes: &[Recipe]) {
    let mut seen = HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.id.as_str()) {
            warn!("Duplicate recipe id in corpus: {}", recipe.id);
        }
    }
}

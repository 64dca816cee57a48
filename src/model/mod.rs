// Data model for the recipe corpus and search queries

pub mod filters;
pub mod recipe;
pub mod tags;

// Re-exports
pub use filters::{SearchFilters, SearchResult};
pub use recipe::{
    Difficulty, Ingredient, Instruction, NutritionHighlights, Recipe, TimingRecommendations,
    Variation,
};
pub use tags::{TagCategory, TagEntry};

use serde::{Deserialize, Serialize};

/// A full corpus snapshot as stored on disk: the recipes plus the
/// presentation-side tag grouping metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDatabase {
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub tag_categories: Vec<TagCategory>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

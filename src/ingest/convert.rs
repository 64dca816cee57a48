use crate::error::{Error, Result};
use crate::ingest::normalize::normalize_tags;
use crate::model::recipe::{
    Difficulty, Ingredient, Instruction, NutritionHighlights, Recipe, TimingRecommendations,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

/// A recipe as the grouped corpus files store it: numeric times in
/// minutes, free-text difficulty, bare instruction strings, unnormalized
/// tags. Converted into a `Recipe` before anything else sees it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub total_time: u32,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub primary_tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub wrestling_specific_benefits: Vec<String>,
    #[serde(default)]
    pub nutrition_highlights: RawNutritionHighlights,
    #[serde(default)]
    pub storage: Option<String>,
}

fn default_servings() -> u32 {
    1
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNutritionHighlights {
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub carbohydrates: Option<String>,
    #[serde(default)]
    pub calories: Option<String>,
}

impl RawRecipe {
    /// Convert into the canonical `Recipe` shape: minute counts become
    /// `"N mins"` strings, difficulty is parsed leniently, instructions
    /// get step numbers, and every tag is normalized.
    pub fn into_recipe(self) -> Result<Recipe> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation("recipe id must not be blank".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::Validation(format!(
                "recipe {} has a blank title",
                self.id
            )));
        }
        if self.servings == 0 {
            return Err(Error::Validation(format!(
                "recipe {} has zero servings",
                self.id
            )));
        }

        debug!("Converting raw recipe: {}", self.id);

        let instructions = self
            .instructions
            .into_iter()
            .enumerate()
            .map(|(i, text)| Instruction {
                step: (i + 1) as u32,
                text,
            })
            .collect();

        let today = Utc::now().date_naive();

        Ok(Recipe {
            id: self.id,
            title: self.title,
            description: self.description,
            prep_time: format!("{} mins", self.prep_time),
            cook_time: format!("{} mins", self.cook_time),
            total_time: format!("{} mins", self.total_time),
            servings: self.servings,
            difficulty: Difficulty::parse_lenient(&self.difficulty),
            tags: normalize_tags(&self.tags),
            primary_tags: normalize_tags(&self.primary_tags),
            ingredients: self.ingredients,
            instructions,
            nutrition_highlights: NutritionHighlights {
                protein: self.nutrition_highlights.protein.or_else(|| Some("0g".to_string())),
                carbohydrates: self
                    .nutrition_highlights
                    .carbohydrates
                    .or_else(|| Some("0g".to_string())),
                calories: self.nutrition_highlights.calories.or_else(|| Some("0".to_string())),
                key_nutrients: Some("See nutrition highlights".to_string()),
            },
            nutrition_notes: "Nutritional information calculated based on ingredients."
                .to_string(),
            wrestling_specific_benefits: self.wrestling_specific_benefits,
            parent_peace_of_mind: vec![
                "Nutritionally balanced for young athletes".to_string(),
            ],
            timing_recommendations: TimingRecommendations::default(),
            variations: Vec::new(),
            storage_instructions: self
                .storage
                .or_else(|| Some("Store as directed in recipe notes.".to_string())),
            allergen_info: vec!["Check individual ingredients for allergens".to_string()],
            created_date: Some(today),
            last_updated: Some(today),
            rd_approved: false,
        })
    }
}

/// Convert a whole raw corpus, stopping at the first structurally
/// invalid record.
pub fn convert_all(raw: Vec<RawRecipe>) -> Result<Vec<Recipe>> {
    raw.into_iter().map(RawRecipe::into_recipe).collect()
}

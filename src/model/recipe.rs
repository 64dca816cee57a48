use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recipe record. Immutable once ingested; identity is `id`,
/// which is unique within a corpus and stable across rebuilds.
///
/// `primary_tags` is not required to be a subset of `tags` — a recipe may
/// declare a primary tag absent from its general tag set, and every
/// comparison site tolerates that by checking both collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,

    // Free-form time strings, e.g. "15 mins" or "1 hour". Parsed into
    // minutes only when a numeric comparison is needed.
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub total_time: String,

    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub primary_tags: Vec<String>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,

    #[serde(default)]
    pub nutrition_highlights: NutritionHighlights,
    #[serde(default)]
    pub nutrition_notes: String,

    #[serde(default)]
    pub wrestling_specific_benefits: Vec<String>,
    #[serde(default)]
    pub parent_peace_of_mind: Vec<String>,

    #[serde(default)]
    pub timing_recommendations: TimingRecommendations,
    #[serde(default)]
    pub variations: Vec<Variation>,

    #[serde(default)]
    pub storage_instructions: Option<String>,
    #[serde(default)]
    pub allergen_info: Vec<String>,

    #[serde(default)]
    pub created_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
    #[serde(default)]
    pub rd_approved: bool,
}

fn default_servings() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub item: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instruction {
    pub step: u32,
    #[serde(rename = "instruction")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionHighlights {
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub carbohydrates: Option<String>,
    #[serde(default)]
    pub calories: Option<String>,
    #[serde(default)]
    pub key_nutrients: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingRecommendations {
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub avoid_time: Option<String>,
    #[serde(default)]
    pub season_focus: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variation {
    pub name: String,
    pub modification: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Lenient parse for raw corpus data, where difficulty arrives as
    /// free text like "Easy" or "easy - no cooking required". Anything
    /// that names neither easy nor hard is treated as Medium.
    pub fn parse_lenient(value: &str) -> Self {
        let lower = value.to_lowercase();
        if lower.contains("easy") {
            Difficulty::Easy
        } else if lower.contains("hard") {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Recipe {
    /// The combined tag set used for similarity and tag filtering:
    /// `tags` and `primary_tags` as a single set, duplicates collapsed.
    pub fn combined_tags(&self) -> std::collections::HashSet<&str> {
        self.tags
            .iter()
            .chain(self.primary_tags.iter())
            .map(String::as_str)
            .collect()
    }

    /// Whether the recipe carries `tag` in either tag collection.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag) || self.primary_tags.iter().any(|t| t == tag)
    }
}

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Engine tuning. The defaults are the intended production settings; a
/// caller may deserialize its own values but the engine never reads
/// configuration from the environment or disk itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum dissimilarity for a fuzzy match, 0.0 (exact only) to
    /// 1.0 (match anything). Deliberately permissive by default: 0.4.
    pub threshold: f64,
    pub weights: FieldWeights,
    /// Default number of related recipes returned.
    pub related_limit: usize,
}

/// Relative weight of each searchable field in the aggregate text
/// score. Biases ranking toward title and description matches over
/// incidental ingredient mentions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub tags: f64,
    pub ingredients: f64,
    pub benefits: f64,
    pub nutrition_notes: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            weights: FieldWeights::default(),
            related_limit: 3,
        }
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 0.30,
            description: 0.20,
            tags: 0.20,
            ingredients: 0.15,
            benefits: 0.10,
            nutrition_notes: 0.05,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::Config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        let weights = [
            self.weights.title,
            self.weights.description,
            self.weights.tags,
            self.weights.ingredients,
            self.weights.benefits,
            self.weights.nutrition_notes,
        ];
        if weights.iter().any(|w| *w < 0.0 || !w.is_finite()) {
            return Err(Error::Config(
                "field weights must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

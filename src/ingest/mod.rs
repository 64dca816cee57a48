// Corpus ingestion: JSON loading, raw-record conversion and tag
// normalization. Everything downstream of this module sees canonical
// tags only.

pub mod convert;
pub mod normalize;

// Re-exports
pub use convert::{convert_all, RawRecipe};
pub use normalize::{normalize_tag, normalize_tags};

use crate::error::Result;
use crate::model::{Recipe, RecipeDatabase};

/// Load a full corpus snapshot (recipes plus tag categories) from JSON,
/// normalizing every recipe tag on the way in.
pub fn load_database(json: &str) -> Result<RecipeDatabase> {
    let mut db: RecipeDatabase = serde_json::from_str(json)?;
    for recipe in &mut db.recipes {
        recipe.tags = normalize_tags(&recipe.tags);
        recipe.primary_tags = normalize_tags(&recipe.primary_tags);
    }
    Ok(db)
}

/// Load a bare recipe array in the canonical `Recipe` shape.
pub fn load_recipes(json: &str) -> Result<Vec<Recipe>> {
    let mut recipes: Vec<Recipe> = serde_json::from_str(json)?;
    for recipe in &mut recipes {
        recipe.tags = normalize_tags(&recipe.tags);
        recipe.primary_tags = normalize_tags(&recipe.primary_tags);
    }
    Ok(recipes)
}

/// Load a recipe array in the loose corpus-file shape and convert it.
pub fn load_raw_recipes(json: &str) -> Result<Vec<Recipe>> {
    let raw: Vec<RawRecipe> = serde_json::from_str(json)?;
    convert_all(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_recipes_normalizes_tags() {
        let json = r#"[{"id": "r1", "title": "Bars", "tags": ["Nut-Free"], "primary_tags": ["Pre-Competition Fuel"]}]"#;
        let recipes = load_recipes(json).unwrap();

        assert_eq!(recipes[0].tags, vec!["Nut Free"]);
        assert_eq!(recipes[0].primary_tags, vec!["Tournament Day Snacks"]);
    }

    #[test]
    fn test_load_database_with_categories() {
        let json = r#"{
            "recipes": [{"id": "r1", "title": "Bars", "tags": ["Dairy-Free"]}],
            "tag_categories": [{"name": "Dietary", "tags": ["Dairy Free"], "priority": 1}],
            "version": "1.0"
        }"#;
        let db = load_database(json).unwrap();

        assert_eq!(db.recipes.len(), 1);
        assert_eq!(db.recipes[0].tags, vec!["Dairy Free"]);
        assert_eq!(db.tag_categories[0].name, "Dietary");
        assert_eq!(db.version.as_deref(), Some("1.0"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = load_recipes("not json");
        assert!(matches!(result, Err(crate::error::Error::Parse(_))));
    }
}

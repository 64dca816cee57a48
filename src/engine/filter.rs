use crate::ingest::normalize::normalize_tag;
use crate::model::{Recipe, SearchFilters};
use crate::utils::parse_time_to_minutes;

/// Apply the structured filters to a candidate sequence. A stable
/// filter, not a re-ranker: survivors keep their input order, and the
/// individual predicates combine as a pure intersection.
pub fn apply<'a>(candidates: Vec<&'a Recipe>, filters: &SearchFilters) -> Vec<&'a Recipe> {
    // Filter-supplied tags are normalized here so they always compare
    // against stored tags in canonical form.
    let active_tags: Vec<String> = filters
        .active_tags
        .iter()
        .map(|t| normalize_tag(t))
        .collect();

    candidates
        .into_iter()
        .filter(|recipe| passes_tags(recipe, &active_tags))
        .filter(|recipe| passes_difficulty(recipe, filters))
        .filter(|recipe| passes_prep_time(recipe, filters))
        .filter(|recipe| passes_servings(recipe, filters))
        .collect()
}

// Conjunction: every active tag must be present in tags or
// primary_tags. Empty active set passes everything.
fn passes_tags(recipe: &Recipe, active_tags: &[String]) -> bool {
    active_tags.iter().all(|tag| recipe.has_tag(tag))
}

fn passes_difficulty(recipe: &Recipe, filters: &SearchFilters) -> bool {
    filters
        .difficulty
        .map_or(true, |wanted| recipe.difficulty == wanted)
}

// Unparsable prep times read as 0 minutes and therefore pass any
// max-time filter (permissive default, not a failure signal).
fn passes_prep_time(recipe: &Recipe, filters: &SearchFilters) -> bool {
    filters
        .max_prep_time
        .map_or(true, |max| parse_time_to_minutes(&recipe.prep_time) <= max)
}

fn passes_servings(recipe: &Recipe, filters: &SearchFilters) -> bool {
    filters
        .servings
        .map_or(true, |min| recipe.servings >= min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn recipe(id: &str, tags: &[&str], difficulty: &str, prep: &str, servings: u32) -> Recipe {
        let tags_json = serde_json::to_string(tags).unwrap();
        serde_json::from_str(&format!(
            r#"{{
                "id": "{id}",
                "title": "{id}",
                "tags": {tags_json},
                "difficulty": "{difficulty}",
                "prep_time": "{prep}",
                "servings": {servings}
            }}"#
        ))
        .unwrap()
    }

    fn corpus() -> Vec<Recipe> {
        vec![
            recipe("oats", &["Breakfast", "Quick Meals"], "Easy", "5 mins", 1),
            recipe("stew", &["Dinner"], "Hard", "30 mins", 6),
            recipe("wrap", &["Quick Meals", "Lunch"], "Easy", "10 mins", 2),
            recipe("casserole", &["Dinner"], "Medium", "1 hour", 8),
        ]
    }

    fn ids<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_pass_everything_in_order() {
        let corpus = corpus();
        let out = apply(corpus.iter().collect(), &SearchFilters::new());
        assert_eq!(ids(&out), vec!["oats", "stew", "wrap", "casserole"]);
    }

    #[test]
    fn test_tag_filter_is_conjunctive() {
        let corpus = corpus();
        let filters = SearchFilters {
            active_tags: vec!["Quick Meals".to_string(), "Lunch".to_string()],
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        assert_eq!(ids(&out), vec!["wrap"]);
    }

    #[test]
    fn test_tag_filter_normalizes_aliases() {
        let mut corpus = corpus();
        corpus[0].tags.push("Gluten Free".to_string());
        let filters = SearchFilters {
            active_tags: vec!["Gluten-Free".to_string()],
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        assert_eq!(ids(&out), vec!["oats"]);
    }

    #[test]
    fn test_tag_filter_sees_primary_tags() {
        let mut corpus = corpus();
        corpus[1].primary_tags.push("Meal Prep".to_string());
        let filters = SearchFilters {
            active_tags: vec!["Meal Prep".to_string()],
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        assert_eq!(ids(&out), vec!["stew"]);
    }

    #[test]
    fn test_difficulty_exact_match() {
        let corpus = corpus();
        let filters = SearchFilters {
            difficulty: Some(Difficulty::Easy),
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        assert_eq!(ids(&out), vec!["oats", "wrap"]);
    }

    #[test]
    fn test_max_prep_time_parses_hours() {
        let corpus = corpus();
        let filters = SearchFilters {
            max_prep_time: Some(30),
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        // "1 hour" parses to 60 and is excluded.
        assert_eq!(ids(&out), vec!["oats", "stew", "wrap"]);
    }

    #[test]
    fn test_unparsable_prep_time_passes() {
        let mut corpus = corpus();
        corpus[1].prep_time = "varies".to_string();
        let filters = SearchFilters {
            max_prep_time: Some(10),
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        assert_eq!(ids(&out), vec!["oats", "stew", "wrap"]);
    }

    #[test]
    fn test_servings_is_a_minimum() {
        let corpus = corpus();
        let filters = SearchFilters {
            servings: Some(4),
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        assert_eq!(ids(&out), vec!["stew", "casserole"]);
    }

    #[test]
    fn test_filters_intersect() {
        let corpus = corpus();
        let filters = SearchFilters {
            active_tags: vec!["Dinner".to_string()],
            max_prep_time: Some(45),
            servings: Some(4),
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        assert_eq!(ids(&out), vec!["stew"]);
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let corpus = corpus();
        let filters = SearchFilters {
            active_tags: vec!["No Such Tag".to_string()],
            ..Default::default()
        };
        let out = apply(corpus.iter().collect(), &filters);
        assert!(out.is_empty());
    }
}

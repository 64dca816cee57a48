use recipe_search::ingest::load_recipes;
use recipe_search::model::Difficulty;
use recipe_search::{RecipeSearchEngine, SearchFilters};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn engine() -> RecipeSearchEngine {
    init_tracing();
    let recipes =
        load_recipes(include_str!("fixtures/recipes.json")).expect("fixture corpus should load");
    RecipeSearchEngine::new(recipes)
}

fn result_ids(engine: &RecipeSearchEngine, filters: &SearchFilters) -> Vec<String> {
    engine
        .search(filters)
        .into_iter()
        .map(|r| r.recipe.id.clone())
        .collect()
}

#[test]
fn empty_search_returns_full_corpus_in_order() {
    let engine = engine();
    let ids = result_ids(&engine, &SearchFilters::new());
    assert_eq!(
        ids,
        vec![
            "chicken-stir-fry",
            "overnight-oats",
            "beef-stew",
            "energy-bars",
            "salmon-rice-bowl"
        ]
    );
}

#[test]
fn tag_filter_returns_exactly_the_tagged_recipes() {
    // Corpus of 5, two tagged "Quick Meals": the tag filter alone must
    // return exactly those two, in corpus order.
    let engine = engine();
    let filters = SearchFilters {
        active_tags: vec!["Quick Meals".to_string()],
        ..Default::default()
    };
    assert_eq!(
        result_ids(&engine, &filters),
        vec!["chicken-stir-fry", "energy-bars"]
    );
}

#[test]
fn typo_in_search_term_still_finds_the_recipe() {
    let engine = engine();
    let filters = SearchFilters {
        search_term: "chikn".to_string(),
        ..Default::default()
    };
    let ids = result_ids(&engine, &filters);
    assert_eq!(
        ids.first().map(String::as_str),
        Some("chicken-stir-fry"),
        "permissive fuzzy matching should resolve the typo"
    );
}

#[test]
fn max_prep_time_boundary() {
    let engine = engine();
    let filters = SearchFilters {
        max_prep_time: Some(20),
        ..Default::default()
    };
    let ids = result_ids(&engine, &filters);
    assert!(ids.contains(&"chicken-stir-fry".to_string())); // 15 mins
    assert!(!ids.contains(&"beef-stew".to_string())); // 30 mins
}

#[test]
fn every_filtered_result_is_a_subset_of_the_full_corpus() {
    let engine = engine();
    let full: Vec<String> = result_ids(&engine, &SearchFilters::new());

    let candidates = [
        SearchFilters {
            search_term: "protein".to_string(),
            ..Default::default()
        },
        SearchFilters {
            active_tags: vec!["Dinner".to_string()],
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        },
        SearchFilters {
            max_prep_time: Some(10),
            servings: Some(2),
            ..Default::default()
        },
    ];

    for filters in &candidates {
        for id in result_ids(&engine, filters) {
            assert!(full.contains(&id));
        }
    }
}

#[test]
fn adding_a_tag_never_increases_the_result_count() {
    let engine = engine();

    let mut filters = SearchFilters::new();
    let mut previous = engine.search(&filters).len();

    for tag in ["Dinner", "High Protein", "Post-Practice Recovery"] {
        filters.active_tags.push(tag.to_string());
        let count = engine.search(&filters).len();
        assert!(count <= previous, "tag filter must be monotonic");
        previous = count;
    }
}

#[test]
fn legacy_tag_spelling_matches_canonical_corpus_tags() {
    // The fixture declares "Nut-Free" and "Pre-Competition Fuel";
    // ingestion canonicalizes them, and a filter using either spelling
    // finds the same recipe.
    let engine = engine();
    for spelling in ["Nut Free", "Nut-Free"] {
        let filters = SearchFilters {
            active_tags: vec![spelling.to_string()],
            ..Default::default()
        };
        assert_eq!(result_ids(&engine, &filters), vec!["energy-bars"]);
    }

    let filters = SearchFilters {
        active_tags: vec!["Pre-Competition Fuel".to_string()],
        ..Default::default()
    };
    assert_eq!(result_ids(&engine, &filters), vec!["energy-bars"]);
}

#[test]
fn text_search_and_filters_intersect() {
    let engine = engine();
    let filters = SearchFilters {
        search_term: "dinner".to_string(),
        difficulty: Some(Difficulty::Easy),
        ..Default::default()
    };
    let ids = result_ids(&engine, &filters);
    assert!(ids.contains(&"chicken-stir-fry".to_string()));
    assert!(!ids.contains(&"beef-stew".to_string()), "Hard is filtered out");
}

#[test]
fn zero_results_is_a_normal_value() {
    let engine = engine();
    let filters = SearchFilters {
        active_tags: vec!["No Such Tag".to_string()],
        ..Default::default()
    };
    assert!(engine.search(&filters).is_empty());
}

#[test]
fn all_results_carry_the_placeholder_score() {
    let engine = engine();
    let filters = SearchFilters {
        search_term: "salmon".to_string(),
        ..Default::default()
    };
    let results = engine.search(&filters);
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.score == 1.0));
}

#[test]
fn all_tags_is_sorted_union_of_both_tag_sets() {
    let engine = engine();
    let tags = engine.all_tags();

    let mut sorted = tags.clone();
    sorted.sort();
    assert_eq!(tags, sorted, "tags must come back alphabetical");

    // Canonical forms only, from both tags and primary_tags.
    assert!(tags.contains(&"Nut Free".to_string()));
    assert!(tags.contains(&"Tournament Day Snacks".to_string()));
    assert!(!tags.contains(&"Nut-Free".to_string()));
    assert!(!tags.contains(&"Pre-Competition Fuel".to_string()));
}

#[test]
fn related_recipes_rank_by_tag_overlap() {
    let engine = engine();
    let chicken = &engine.recipes()[0];

    let related = engine.related_recipes(chicken);
    assert!(related.len() <= 3);
    assert!(related.iter().all(|r| r.id != chicken.id));

    // Salmon bowl shares Dinner + High Protein; it must outrank the
    // breakfast recipe that shares nothing.
    let ids: Vec<&str> = related.iter().map(|r| r.id.as_str()).collect();
    let salmon = ids.iter().position(|id| *id == "salmon-rice-bowl");
    let oats = ids.iter().position(|id| *id == "overnight-oats");
    if let (Some(s), Some(o)) = (salmon, oats) {
        assert!(s < o);
    } else {
        assert!(salmon.is_some());
    }
}

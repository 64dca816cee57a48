use crate::model::Recipe;
use tracing::debug;

/// Jaccard similarity of two recipes' combined tag sets (tags and
/// primary_tags as one set each, duplicates collapsed). Always in
/// [0, 1]; two recipes with no tags at all score 0.
pub fn jaccard_similarity(a: &Recipe, b: &Recipe) -> f64 {
    let tags_a = a.combined_tags();
    let tags_b = b.combined_tags();

    let intersection = tags_a.intersection(&tags_b).count();
    let union = tags_a.union(&tags_b).count();

    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Rank the corpus by tag overlap with `recipe` and return up to
/// `limit` recipes, best first, excluding `recipe` itself (by id).
///
/// Ties keep corpus order (stable sort), and zero-overlap recipes are
/// not excluded: when fewer than `limit` recipes share any tag, the
/// remainder is filled at score 0 in corpus order.
pub fn related_to<'a>(corpus: &'a [Recipe], recipe: &Recipe, limit: usize) -> Vec<&'a Recipe> {
    let mut scored: Vec<(&Recipe, f64)> = corpus
        .iter()
        .filter(|r| r.id != recipe.id)
        .map(|r| (r, jaccard_similarity(recipe, r)))
        .collect();

    // Stable descending sort: equal scores keep corpus order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    debug!(
        "Related lookup for {}: {} candidates, limit {}",
        recipe.id,
        scored.len(),
        limit
    );

    scored.into_iter().take(limit).map(|(r, _)| r).collect()
}

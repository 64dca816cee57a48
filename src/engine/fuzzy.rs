use crate::engine::config::{EngineConfig, FieldWeights};
use crate::model::Recipe;
use strsim::normalized_levenshtein;
use tracing::debug;

/// Typo-tolerant multi-field text index over a corpus snapshot.
///
/// Built once per corpus and read-only afterwards. Each recipe's
/// searchable fields are tokenized and lowercased up front; a query
/// compares its tokens against the precomputed field tokens with
/// normalized Levenshtein similarity. Matching is permissive: a token
/// pair counts as a match while its dissimilarity (1 - similarity)
/// stays within the configured threshold.
pub struct FuzzyIndex {
    docs: Vec<DocTokens>,
    threshold: f64,
    weights: FieldWeights,
}

// Tokenized searchable fields for one recipe, in corpus order.
struct DocTokens {
    title: Vec<String>,
    description: Vec<String>,
    tags: Vec<String>,
    ingredients: Vec<String>,
    benefits: Vec<String>,
    nutrition_notes: Vec<String>,
}

/// Lowercased alphanumeric runs; everything else separates tokens, so
/// "Stir-Fry" yields ["stir", "fry"].
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn tokenize_all<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut tokens = Vec::new();
    for part in parts {
        tokens.extend(tokenize(part));
    }
    tokens
}

impl FuzzyIndex {
    /// Build the index from a corpus snapshot. Pure construction, no
    /// I/O; cheap enough to redo whenever the caller swaps corpora.
    pub fn build(recipes: &[Recipe], config: &EngineConfig) -> Self {
        let docs = recipes
            .iter()
            .map(|recipe| DocTokens {
                title: tokenize(&recipe.title),
                description: tokenize(&recipe.description),
                tags: tokenize_all(
                    recipe
                        .tags
                        .iter()
                        .chain(recipe.primary_tags.iter())
                        .map(String::as_str),
                ),
                ingredients: tokenize_all(recipe.ingredients.iter().map(|i| i.item.as_str())),
                benefits: tokenize_all(
                    recipe
                        .wrestling_specific_benefits
                        .iter()
                        .map(String::as_str),
                ),
                nutrition_notes: tokenize(&recipe.nutrition_notes),
            })
            .collect();

        debug!("Built fuzzy index over {} recipes", recipes.len());

        Self {
            docs,
            threshold: config.threshold,
            weights: config.weights.clone(),
        }
    }

    /// Query the index. Returns `(corpus_index, score)` pairs ordered
    /// by ascending weighted dissimilarity (best match first); ties
    /// keep corpus order. A blank or whitespace-only term bypasses
    /// matching and yields the whole corpus in input order at score 0.
    ///
    /// No structured filters are applied here; this stage only narrows
    /// and ranks by text relevance.
    pub fn query(&self, term: &str) -> Vec<(usize, f64)> {
        let query_terms = tokenize(term);
        if query_terms.is_empty() {
            return (0..self.docs.len()).map(|i| (i, 0.0)).collect();
        }

        let mut results: Vec<(usize, f64)> = self
            .docs
            .iter()
            .enumerate()
            .filter_map(|(index, doc)| self.score_doc(doc, &query_terms).map(|s| (index, s)))
            .collect();

        // Stable sort: equal scores keep corpus order.
        results.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!(
            "Fuzzy query {:?} matched {} of {} recipes",
            term,
            results.len(),
            self.docs.len()
        );

        results
    }

    // Weighted aggregate dissimilarity for one document, or None when
    // no field comes within the threshold. A field that does not match
    // contributes its full weight (dissimilarity 1.0), so the score
    // stays in [0, 1] when the weights sum to 1.
    fn score_doc(&self, doc: &DocTokens, query_terms: &[String]) -> Option<f64> {
        let fields = [
            (&doc.title, self.weights.title),
            (&doc.description, self.weights.description),
            (&doc.tags, self.weights.tags),
            (&doc.ingredients, self.weights.ingredients),
            (&doc.benefits, self.weights.benefits),
            (&doc.nutrition_notes, self.weights.nutrition_notes),
        ];

        let mut score = 0.0;
        let mut matched = false;

        for (tokens, weight) in fields {
            match self.field_dissimilarity(tokens, query_terms) {
                Some(d) => {
                    matched = true;
                    score += weight * d;
                }
                None => score += weight,
            }
        }

        matched.then_some(score)
    }

    // Best (lowest) dissimilarity between any query term and any field
    // token, provided it comes within the threshold.
    fn field_dissimilarity(&self, tokens: &[String], query_terms: &[String]) -> Option<f64> {
        let mut best: Option<f64> = None;

        for query_term in query_terms {
            let query_len = query_term.chars().count();

            for token in tokens {
                // Length pruning: Levenshtein distance is at least the
                // length difference, so a pair that differs in length
                // by more than threshold * max_len cannot match.
                let token_len = token.chars().count();
                let len_diff = query_len.abs_diff(token_len);
                let max_len = query_len.max(token_len);
                if max_len == 0 || (len_diff as f64) > self.threshold * (max_len as f64) {
                    continue;
                }

                let dissimilarity = 1.0 - normalized_levenshtein(query_term, token);
                if dissimilarity <= self.threshold && best.map_or(true, |b| dissimilarity < b) {
                    best = Some(dissimilarity);
                    if dissimilarity == 0.0 {
                        return best;
                    }
                }
            }
        }

        best
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

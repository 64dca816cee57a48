// The search and ranking core: fuzzy text index, structured filter
// evaluation, tag-overlap similarity, and the facade tying them
// together. Single-threaded and synchronous; the corpus is immutable
// for the engine's lifetime and every query recomputes from it.

pub mod config;
pub mod filter;
pub mod fuzzy;
pub mod related;
pub mod search;

// Re-exports
pub use config::{EngineConfig, FieldWeights};
pub use fuzzy::FuzzyIndex;
pub use related::{jaccard_similarity, related_to};
pub use search::RecipeSearchEngine;

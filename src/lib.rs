pub mod error;
pub mod model;

// Ingestion: tag normalization and raw-record conversion
pub mod ingest;

// Search, filtering and similarity ranking
pub mod engine;

// Presentation helpers
pub mod utils;

// Re-exports
pub use engine::{EngineConfig, RecipeSearchEngine};
pub use error::{Error, Result};
pub use ingest::normalize_tag;
pub use model::{Difficulty, Recipe, SearchFilters, SearchResult};

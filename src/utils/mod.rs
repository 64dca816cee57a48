// Utility functions
pub mod text;
pub mod time;

pub use text::{format_servings, format_tag, slug_to_tag, tag_to_slug, truncate_text};
pub use time::{format_time, parse_time_to_minutes};

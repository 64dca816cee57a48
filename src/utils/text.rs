/// Format a servings count with pluralization.
pub fn format_servings(servings: u32) -> String {
    if servings == 1 {
        "1 serving".to_string()
    } else {
        format!("{servings} servings")
    }
}

/// Truncate text to `max_length` characters with a trailing ellipsis.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Format a tag for display: hyphens become spaces, each word is
/// capitalized.
pub fn format_tag(tag: &str) -> String {
    capitalize_words(&tag.replace('-', " "))
}

/// Convert a tag to a URL-friendly slug.
pub fn tag_to_slug(tag: &str) -> String {
    tag.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// Convert a slug back to a display tag.
pub fn slug_to_tag(slug: &str) -> String {
    capitalize_words(&slug.replace('-', " "))
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

// Canonical tag spellings. The corpus files use hyphenated and legacy
// spellings while the filter panel uses the canonical forms; every tag
// must pass through here at ingestion and on each filter toggle so the
// two sides always compare in canonical form.
const TAG_ALIASES: &[(&str, &str)] = &[
    // Hyphen inconsistencies
    ("Dairy-Free", "Dairy Free"),
    ("Gluten-Free", "Gluten Free"),
    ("Egg-Free", "Egg Free"),
    ("Fish-Free", "Fish Free"),
    ("Shellfish-Free", "Shellfish Free"),
    ("Nut-Free", "Nut Free"),
    ("Soy-Free", "Soy Free"),
    ("Sesame-Free", "Sesame Free"),
    ("Travel-Friendly", "Travel Friendly"),
    ("Kid-Friendly", "Kid Friendly"),
    ("Plant-Based", "Plant Based"),
    ("Budget-Friendly", "Budget Friendly"),
    // Legacy names
    ("Pre-Competition Fuel", "Tournament Day Snacks"),
    ("Post Practice Recovery", "Post-Practice Recovery"),
];

/// Resolve a tag to its canonical spelling. Tags absent from the alias
/// table are returned unchanged, so this is total over all strings and
/// idempotent (no canonical form appears as an alias key).
pub fn normalize_tag(tag: &str) -> String {
    TAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == tag)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| tag.to_string())
}

/// Normalize a whole tag list, preserving order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter().map(|t| normalize_tag(t)).collect()
}

use serde::{Deserialize, Serialize};

/// One entry in a tag category: either a bare tag name or a name with a
/// forced line break for narrow layouts. The corpus files carry both
/// shapes, so this is resolved once at the data boundary instead of
/// shape-checked at every use site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TagEntry {
    Plain(String),
    LineBreak {
        name: String,
        #[serde(rename = "forceLineBreak")]
        force_line_break: bool,
    },
}

impl TagEntry {
    pub fn name(&self) -> &str {
        match self {
            TagEntry::Plain(name) => name,
            TagEntry::LineBreak { name, .. } => name,
        }
    }

    pub fn force_line_break(&self) -> bool {
        match self {
            TagEntry::Plain(_) => false,
            TagEntry::LineBreak {
                force_line_break, ..
            } => *force_line_break,
        }
    }
}

/// Presentation-side grouping of tags for the filter panel. Supplied by
/// the caller alongside the corpus; the engine itself never consults it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCategory {
    pub name: String,
    pub tags: Vec<TagEntry>,
    pub priority: i32,
    #[serde(default)]
    pub collapsible: bool,
}

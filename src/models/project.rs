//! Project cards.

use serde::{Deserialize, Serialize};

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier
    pub id: u32,
    /// Card title
    pub title: String,
    /// One-paragraph description
    pub description: String,
    /// Technology tags, in display order
    pub tags: Vec<String>,
    /// Deployed version, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Source repository
    pub source_url: String,
}

impl Project {
    /// Whether the project carries `tag` (exact, case-sensitive match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

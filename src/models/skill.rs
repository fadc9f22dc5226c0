//! Skill bars and the nodes of the skills visualization.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// A skill shown as a progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name
    pub name: String,
    /// Self-assessed level in percent (0-100)
    pub level: u8,
    /// Bar fill color
    pub color: RgbColor,
}

/// A node of the 3D skills graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    /// Label drawn under the node
    pub name: String,
    /// Node color
    pub color: RgbColor,
    /// Position in world space
    pub position: [f32; 3],
    /// Relative node size
    #[serde(default = "default_scale")]
    pub scale: f32,
}

const fn default_scale() -> f32 {
    1.0
}

//! Data models for the page content.
//!
//! This module contains the static content structures (profile, skills,
//! projects) and section identifiers. Models are independent of UI and
//! behavior.

pub mod portfolio;
pub mod profile;
pub mod project;
pub mod rgb;
pub mod section;
pub mod skill;

// Re-export all model types
pub use portfolio::Portfolio;
pub use profile::{ContactEntry, Fact, Link, Profile};
pub use project::Project;
pub use rgb::RgbColor;
pub use section::SectionId;
pub use skill::{Skill, SkillNode};

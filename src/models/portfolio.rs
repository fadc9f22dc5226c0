//! The complete, immutable page content.
//!
//! Content lives in an embedded TOML file and is parsed once at start-up.
//! Nothing here changes while the application runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Profile, Project, Skill, SkillNode};

/// Embedded content file
const PORTFOLIO_TOML: &str = include_str!("../data/portfolio.toml");

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Owner details
    pub profile: Profile,
    /// Skill bars, in display order
    pub skills: Vec<Skill>,
    /// "Other Technologies" chips
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Project cards, in display order
    pub projects: Vec<Project>,
    /// Nodes of the skills visualization
    #[serde(default)]
    pub skill_nodes: Vec<SkillNode>,
}

impl Portfolio {
    /// Parses the content embedded in the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(PORTFOLIO_TOML).context("Embedded portfolio content is invalid")
    }

    /// Parses and validates content from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let portfolio: Self = toml::from_str(content).context("Failed to parse portfolio TOML")?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Checks content invariants.
    ///
    /// - skill levels are percentages
    /// - project ids are unique
    /// - every project has at least one tag
    pub fn validate(&self) -> Result<()> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            anyhow::bail!("Skill '{}' has level {} (max 100)", skill.name, skill.level);
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                anyhow::bail!("Duplicate project id {}", project.id);
            }
            if project.tags.is_empty() {
                anyhow::bail!("Project '{}' has no tags", project.title);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::embedded().expect("embedded content should parse");
        assert_eq!(portfolio.profile.name, "Vasco van Gils");
        assert_eq!(portfolio.profile.last_name(), "van Gils");
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.skills.len(), 8);
        assert_eq!(portfolio.technologies.len(), 13);
        assert_eq!(portfolio.skill_nodes.len(), 10);
    }

    #[test]
    fn test_embedded_project_order() {
        let portfolio = Portfolio::embedded().unwrap();
        let titles: Vec<&str> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            ["WPM Typetest", "Random Word Generator API", "Fastodo", "Biblequest"]
        );
    }

    #[test]
    fn test_cv_link_is_placeholder() {
        let portfolio = Portfolio::embedded().unwrap();
        let cv = portfolio
            .profile
            .links
            .iter()
            .find(|l| l.label == "Download CV")
            .expect("CV link present");
        assert!(cv.placeholder);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut portfolio = Portfolio::embedded().unwrap();
        portfolio.projects[1].id = portfolio.projects[0].id;
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_level_over_100() {
        let mut portfolio = Portfolio::embedded().unwrap();
        portfolio.skills[0].level = 101;
        assert!(portfolio.validate().is_err());
    }
}

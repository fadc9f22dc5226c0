//! Tag filtering for the project list.

use std::collections::BTreeSet;

use crate::models::Project;

/// Projects carrying `tag`, in their original order. `None` keeps every project.
///
/// Matching is exact and case-sensitive. An unknown tag yields an empty list.
#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], tag: Option<&str>) -> Vec<&'a Project> {
    match tag {
        None => projects.iter().collect(),
        Some(tag) => projects.iter().filter(|p| p.has_tag(tag)).collect(),
    }
}

/// Every tag used by at least one project, sorted and de-duplicated.
#[must_use]
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Active filter chip: `All` followed by every tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    tags: Vec<String>,
    active: Option<usize>,
}

impl ProjectFilter {
    /// Filter over the tags of `projects`, starting at `All`.
    #[must_use]
    pub fn new(projects: &[Project]) -> Self {
        Self {
            tags: all_tags(projects),
            active: None,
        }
    }

    /// Available tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Selected tag, `None` for `All`.
    #[must_use]
    pub fn active_tag(&self) -> Option<&str> {
        self.active.and_then(|i| self.tags.get(i)).map(String::as_str)
    }

    /// Selects `tag`. Returns `false` (and keeps the selection) for an unknown tag.
    pub fn select(&mut self, tag: Option<&str>) -> bool {
        match tag {
            None => {
                self.active = None;
                true
            }
            Some(tag) => match self.tags.iter().position(|t| t == tag) {
                Some(index) => {
                    self.active = Some(index);
                    true
                }
                None => false,
            },
        }
    }

    /// Advances to the next chip, wrapping from the last tag back to `All`.
    pub fn next(&mut self) {
        self.active = match self.active {
            None if self.tags.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.tags.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    /// Moves to the previous chip, wrapping from `All` to the last tag.
    pub fn previous(&mut self) {
        self.active = match self.active {
            None => self.tags.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Applies the selection to `projects`.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, self.active_tag())
    }
}

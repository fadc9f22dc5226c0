//! Page section identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing hero with name and call-to-actions
    Home,
    /// Biography and quick facts
    About,
    /// Skill bars, technology chips, approach
    Skills,
    /// Filterable project cards
    Projects,
    /// Contact details and social links
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Anchor id of the section (`home`, `about`, ...).
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Capitalized navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Section heading as shown on the page.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::About => "About Me",
            Self::Skills => "My Skills",
            Self::Projects => "My Projects",
            Self::Contact => "Get In Touch",
        }
    }

    /// Looks a section up by anchor id. Unknown anchors yield `None`.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(anchor.trim()))
    }

    /// Zero-based position in page order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::from_anchor(s).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown section '{s}' (expected one of: home, about, skills, projects, contact)"
            )
        })
    }
}

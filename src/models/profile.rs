//! Personal details shown in the hero, about and contact sections.

use serde::{Deserialize, Serialize};

/// A label/value pair such as "Location: Netherlands".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Short label
    pub label: String,
    /// Value text
    pub value: String,
}

/// A contact entry, optionally linked (`mailto:`, `tel:`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    /// Short label
    pub label: String,
    /// Displayed value
    pub value: String,
    /// Link target, if the entry is actionable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// An outbound link (profiles, CV).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link text
    pub label: String,
    /// Target URL
    pub href: String,
    /// Inert link that has no real target yet
    #[serde(default)]
    pub placeholder: bool,
}

/// The portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// First name, highlighted in the navigation bar
    pub first_name: String,
    /// Line above the name in the hero
    pub greeting: String,
    /// Job title
    pub role: String,
    /// Hero tagline
    pub tagline: String,
    /// Heading of the about text column
    pub about_heading: String,
    /// About paragraphs
    pub about: Vec<String>,
    /// Quick facts under the about text
    #[serde(default)]
    pub facts: Vec<Fact>,
    /// "My Approach" bullet points
    #[serde(default)]
    pub approach: Vec<String>,
    /// Intro text of the contact section
    pub contact_blurb: String,
    /// Contact details
    #[serde(default)]
    pub contacts: Vec<ContactEntry>,
    /// Social and document links
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Profile {
    /// Part of the name after the first name ("van Gils").
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.name
            .strip_prefix(self.first_name.as_str())
            .unwrap_or(&self.name)
            .trim_start()
    }
}

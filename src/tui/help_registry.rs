//! Help registry for centralized keybinding definitions.
//!
//! This module loads help definitions from an embedded TOML file and provides
//! methods to query bindings by context for the status bar and help overlay.

use serde::Deserialize;
use std::collections::HashMap;

/// Embedded help definitions TOML file
const HELP_TOML: &str = include_str!("../data/help.toml");

/// A single keybinding definition
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    /// Action id this binding triggers (see `shortcuts::Action::id`)
    #[serde(default)]
    pub id: Option<String>,
    /// Primary key(s) for this action
    pub keys: Vec<String>,
    /// Alternative keys (optional)
    #[serde(default)]
    pub alt_keys: Vec<String>,
    /// Full description of the action
    pub action: String,
    /// Short hint for status bar (optional)
    pub hint: Option<String>,
    /// Priority for display order (lower = more important, shown first)
    #[serde(default = "default_priority")]
    pub priority: u32,
}

const fn default_priority() -> u32 {
    50
}

/// A context with its bindings
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    /// Human-readable name
    pub name: String,
    /// Description of when this context is active
    pub description: String,
    /// Keybindings for this context
    pub bindings: Vec<Binding>,
}

/// Metadata about the help file
#[derive(Debug, Clone, Deserialize)]
pub struct HelpMeta {
    /// Version of the help file format
    pub version: String,
    /// Name of the application
    pub app_name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct HelpFile {
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

/// Help registry providing access to keybinding definitions
#[derive(Debug, Clone)]
pub struct HelpRegistry {
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

impl HelpRegistry {
    /// Load the help registry from the embedded TOML file
    pub fn load() -> Result<Self, toml::de::Error> {
        let help_file: HelpFile = toml::from_str(HELP_TOML)?;
        Ok(Self {
            meta: help_file.meta,
            contexts: help_file.contexts,
        })
    }

    /// Get the app name from metadata
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.meta.app_name
    }

    /// Get help file version from metadata.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.meta.version
    }

    /// Get a context by name
    #[must_use]
    pub fn get_context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Get all bindings for a context, sorted by priority
    #[must_use]
    pub fn get_bindings(&self, context_name: &str) -> Vec<&Binding> {
        self.contexts.get(context_name).map_or_else(Vec::new, |context| {
            let mut bindings: Vec<&Binding> = context.bindings.iter().collect();
            bindings.sort_by_key(|b| b.priority);
            bindings
        })
    }

    /// Bindings that carry a status bar hint, sorted by priority
    #[must_use]
    pub fn get_status_bar_hints(&self, context_name: &str) -> Vec<&Binding> {
        self.get_bindings(context_name)
            .into_iter()
            .filter(|b| b.hint.is_some())
            .collect()
    }

    /// Contexts in the order the help overlay lists them.
    ///
    /// Contexts missing from the file are skipped.
    #[must_use]
    pub fn ordered_contexts(&self) -> Vec<(&'static str, &Context)> {
        contexts::DISPLAY_ORDER
            .iter()
            .filter_map(|key| self.contexts.get(*key).map(|ctx| (*key, ctx)))
            .collect()
    }

    /// Whether any binding in any context carries `id`.
    #[must_use]
    pub fn documents(&self, id: &str) -> bool {
        self.contexts
            .values()
            .flat_map(|ctx| &ctx.bindings)
            .any(|b| b.id.as_deref() == Some(id))
    }

    /// Format a binding for display in help overlay
    /// Returns (`keys_string`, `action_string`)
    #[must_use]
    pub fn format_binding_for_help(binding: &Binding) -> (String, String) {
        let keys = if binding.alt_keys.is_empty() {
            binding.keys.join("/")
        } else {
            format!(
                "{} ({})",
                binding.keys.join("/"),
                binding.alt_keys.join("/")
            )
        };
        (keys, binding.action.clone())
    }

    /// Format bindings for status bar display as (`key`, `hint`) pairs.
    #[must_use]
    pub fn format_status_bar_hints(
        &self,
        context_name: &str,
        max_hints: usize,
    ) -> Vec<(String, String)> {
        self.get_status_bar_hints(context_name)
            .into_iter()
            .take(max_hints)
            .map(|b| {
                let key = b.keys.first().map_or("", String::as_str);
                let hint = b.hint.as_deref().unwrap_or(&b.action);
                (key.to_string(), hint.to_string())
            })
            .collect()
    }
}

/// Known context names
pub mod contexts {
    /// Scrolling the page
    pub const PAGE: &str = "page";
    /// Floating navigation menu
    pub const MENU: &str = "menu";
    /// Help overlay
    pub const HELP: &str = "help";
    /// Skills visualization overlay
    pub const SKILLS_GRAPH: &str = "skills_graph";
    /// Tips (informational)
    pub const TIPS: &str = "tips";

    /// Order of sections in the help overlay
    pub const DISPLAY_ORDER: [&str; 5] = [PAGE, MENU, SKILLS_GRAPH, HELP, TIPS];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::ShortcutRegistry;

    #[test]
    fn test_load_help_registry() {
        let registry = HelpRegistry::load().expect("Failed to load help registry");
        assert_eq!(registry.app_name(), "Folio");
        assert_eq!(registry.version(), "1");
    }

    #[test]
    fn test_get_page_context() {
        let registry = HelpRegistry::load().unwrap();
        let context = registry.get_context(contexts::PAGE);
        assert!(context.is_some());
        assert_eq!(context.unwrap().name, "Page");
    }

    #[test]
    fn test_get_bindings_sorted_by_priority() {
        let registry = HelpRegistry::load().unwrap();
        let bindings = registry.get_bindings(contexts::PAGE);
        assert!(!bindings.is_empty());

        for window in bindings.windows(2) {
            assert!(window[0].priority <= window[1].priority);
        }
    }

    #[test]
    fn test_status_bar_hints() {
        let registry = HelpRegistry::load().unwrap();
        let hints = registry.format_status_bar_hints(contexts::PAGE, 3);
        assert_eq!(hints.len(), 3);
        assert_eq!(hints[0], ("j".to_string(), "Scroll".to_string()));
    }

    #[test]
    fn test_every_context_is_displayed() {
        let registry = HelpRegistry::load().unwrap();
        assert_eq!(registry.ordered_contexts().len(), contexts::DISPLAY_ORDER.len());
    }

    #[test]
    fn test_every_shortcut_is_documented() {
        let registry = HelpRegistry::load().unwrap();
        for action in ShortcutRegistry::new().actions() {
            assert!(
                registry.documents(action.id()),
                "no help entry for '{}'",
                action.id()
            );
        }
    }

    #[test]
    fn test_unknown_context_has_no_bindings() {
        let registry = HelpRegistry::load().unwrap();
        assert!(registry.get_bindings("nope").is_empty());
    }
}

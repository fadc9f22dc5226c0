//! Theme preference: the single light/dark flag shared by every view.
//!
//! [`ThemeController`] is the shared context object. Views read
//! [`ThemeController::mode`] and may subscribe to changes. Persistence goes
//! through a [`ThemeStore`] and is best-effort: a failing store never blocks
//! the in-memory change.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{Config, ThemeMode};

use super::observer::{SubscriptionId, Subscribers};

/// Storage backend for the theme flag.
pub trait ThemeStore {
    /// Reads the persisted mode. `Ok(None)` means nothing was stored yet.
    fn load(&self) -> Result<Option<ThemeMode>>;

    /// Persists `mode`.
    fn save(&mut self, mode: ThemeMode) -> Result<()>;
}

/// Stores the flag as `ui.theme` in a config file, preserving other settings.
#[derive(Debug, Clone)]
pub struct ConfigThemeStore {
    path: PathBuf,
}

impl ConfigThemeStore {
    /// Store backed by the config file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for ConfigThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>> {
        Ok(Config::load_from(&self.path)?.ui.theme)
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        // Unreadable files are left alone so their other settings survive
        let mut config = Config::load_from(&self.path)
            .context("Existing config is unreadable, not overwriting it")?;
        config.ui.theme = Some(mode);
        config.save_to(&self.path)
    }
}

/// In-memory store, used when no config location is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryThemeStore {
    value: Option<ThemeMode>,
}

impl MemoryThemeStore {
    /// Store pre-loaded with `value`.
    #[must_use]
    pub const fn with_value(value: Option<ThemeMode>) -> Self {
        Self { value }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>> {
        Ok(self.value)
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        self.value = Some(mode);
        Ok(())
    }
}

/// Current theme plus its subscribers.
pub struct ThemeController {
    mode: ThemeMode,
    store: Box<dyn ThemeStore>,
    subscribers: Subscribers<ThemeMode>,
    persist_error: Option<String>,
}

impl ThemeController {
    /// Initializes from the store, falling back to `system_default`.
    ///
    /// A store that fails to load is treated like an empty one.
    pub fn initialize(store: Box<dyn ThemeStore>, system_default: impl FnOnce() -> ThemeMode) -> Self {
        let mode = match store.load() {
            Ok(Some(mode)) => mode,
            Ok(None) => system_default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {e:#}");
                system_default()
            }
        };
        tracing::debug!(%mode, "theme initialized");
        Self::with_mode(mode, store)
    }

    /// Initializes from the config file at `config_path`.
    ///
    /// Without a config location the flag lives in memory for the session.
    pub fn open(config_path: Option<&Path>, system_default: impl FnOnce() -> ThemeMode) -> Self {
        let store: Box<dyn ThemeStore> = match config_path {
            Some(path) => Box::new(ConfigThemeStore::new(path)),
            None => {
                tracing::warn!("No config location, theme changes last for this session only");
                Box::new(MemoryThemeStore::default())
            }
        };
        Self::initialize(store, system_default)
    }

    /// Controller starting at `mode` without consulting the store.
    #[must_use]
    pub fn with_mode(mode: ThemeMode, store: Box<dyn ThemeStore>) -> Self {
        Self {
            mode,
            store,
            subscribers: Subscribers::new(),
            persist_error: None,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips light and dark, persists, and notifies subscribers before returning.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled())
    }

    /// Switches to `mode` and persists it.
    ///
    /// Subscribers are only notified when the mode actually changes.
    pub fn set(&mut self, mode: ThemeMode) -> ThemeMode {
        let changed = mode != self.mode;
        self.mode = mode;

        match self.store.save(mode) {
            Ok(()) => self.persist_error = None,
            Err(e) => {
                tracing::warn!("Theme preference not saved, keeping it for this session: {e:#}");
                self.persist_error = Some(format!("{e:#}"));
            }
        }

        if changed {
            tracing::info!(%mode, "theme changed");
            self.subscribers.notify(&mode);
        }
        mode
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeMode) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Removes a change listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Error from the most recent save, if it failed.
    #[must_use]
    pub fn persist_error(&self) -> Option<&str> {
        self.persist_error.as_deref()
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode)
            .field("subscribers", &self.subscribers)
            .field("persist_error", &self.persist_error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn load(&self) -> Result<Option<ThemeMode>> {
            anyhow::bail!("storage unavailable")
        }

        fn save(&mut self, _mode: ThemeMode) -> Result<()> {
            anyhow::bail!("storage unavailable")
        }
    }

    #[test]
    fn test_initialize_prefers_persisted_value() {
        let store = MemoryThemeStore::with_value(Some(ThemeMode::Light));
        let controller = ThemeController::initialize(Box::new(store), || ThemeMode::Dark);
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_initialize_falls_back_to_system_default() {
        let controller =
            ThemeController::initialize(Box::new(MemoryThemeStore::default()), || ThemeMode::Light);
        assert_eq!(controller.mode(), ThemeMode::Light);

        let controller = ThemeController::initialize(Box::new(FailingStore), || ThemeMode::Dark);
        assert_eq!(controller.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [ThemeMode::Dark, ThemeMode::Light] {
            let mut controller =
                ThemeController::with_mode(start, Box::new(MemoryThemeStore::default()));
            controller.toggle();
            assert_ne!(controller.mode(), start);
            controller.toggle();
            assert_eq!(controller.mode(), start);
        }
    }

    #[test]
    fn test_toggle_notifies_before_returning() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut controller =
            ThemeController::with_mode(ThemeMode::Dark, Box::new(MemoryThemeStore::default()));

        let log = Rc::clone(&seen);
        controller.subscribe(move |mode| log.borrow_mut().push(*mode));
        let returned = controller.toggle();

        assert_eq!(returned, ThemeMode::Light);
        assert_eq!(*seen.borrow(), vec![ThemeMode::Light]);
    }

    #[test]
    fn test_set_same_mode_does_not_notify() {
        let calls = Rc::new(RefCell::new(0));
        let mut controller =
            ThemeController::with_mode(ThemeMode::Dark, Box::new(MemoryThemeStore::default()));
        let counter = Rc::clone(&calls);
        controller.subscribe(move |_| *counter.borrow_mut() += 1);

        controller.set(ThemeMode::Dark);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_persistence_failure_keeps_in_memory_toggle() {
        let seen = Rc::new(RefCell::new(None));
        let mut controller = ThemeController::with_mode(ThemeMode::Dark, Box::new(FailingStore));
        let log = Rc::clone(&seen);
        controller.subscribe(move |mode| *log.borrow_mut() = Some(*mode));

        assert_eq!(controller.toggle(), ThemeMode::Light);
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(*seen.borrow(), Some(ThemeMode::Light));
        assert!(controller.persist_error().is_some());
    }

    #[test]
    fn test_config_store_round_trip_preserves_other_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.reduced_motion = true;
        config.save_to(&path).unwrap();

        let mut store = ConfigThemeStore::new(&path);
        assert_eq!(store.load().unwrap(), None);
        store.save(ThemeMode::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(ThemeMode::Light));

        let reloaded = Config::load_from(&path).unwrap();
        assert!(reloaded.ui.reduced_motion);
    }

    #[test]
    fn test_config_store_leaves_corrupt_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let corrupt = "[ui\nreduced_motion = true\n";
        std::fs::write(&path, corrupt).unwrap();

        let mut controller = ThemeController::with_mode(
            ThemeMode::Dark,
            Box::new(ConfigThemeStore::new(&path)),
        );
        assert_eq!(controller.toggle(), ThemeMode::Light);
        assert!(controller.persist_error().is_some());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), corrupt);
    }

    #[test]
    fn test_open_without_config_location_stays_in_memory() {
        let mut controller = ThemeController::open(None, || ThemeMode::Light);
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert!(controller.persist_error().is_none());
    }

    #[test]
    fn test_open_with_config_location_reads_saved_flag() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        ConfigThemeStore::new(&path).save(ThemeMode::Light).unwrap();

        let controller = ThemeController::open(Some(path.as_path()), || ThemeMode::Dark);
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_persists_through_config_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut controller =
            ThemeController::initialize(Box::new(ConfigThemeStore::new(&path)), || ThemeMode::Dark);
        controller.toggle();

        let reopened =
            ThemeController::initialize(Box::new(ConfigThemeStore::new(&path)), || ThemeMode::Dark);
        assert_eq!(reopened.mode(), ThemeMode::Light);
    }
}

//! Theme provider: the single source of truth for the active theme and mode
//!
//! The provider owns three pieces of state: the current theme, the theme
//! mode and the ordered list of available themes. Every observable mutation
//! bumps [`ThemeProvider::revision`] and notifies subscribers, so the
//! propagation layer can either listen or compare revisions at render time.
//!
//! The provider is confined to the UI thread. Mutations take `&mut self`
//! and listeners are not `Send`; hosts that need to feed it from other
//! threads marshal onto the UI thread first.

use crate::registry::{self, built_in_themes, find_theme, group_by_category};
use crate::theme::{ColorScheme, ThemeCategory, ThemeMode, ThemeRef};
use crate::themes::DefaultTheme;
use crate::tokens::ColorPalette;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use swatch_core::{ListenerId, Subscribers};

/// Observable state transitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeChange {
    /// The current theme was replaced
    ThemeChanged { previous: String, current: String },
    /// The theme mode changed
    ModeChanged {
        previous: ThemeMode,
        current: ThemeMode,
    },
    /// A theme was added, or replaced an entry with the same id
    ThemeRegistered { id: String, replaced: bool },
}

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Builder for [`ThemeProvider`]
#[derive(Debug, Default)]
pub struct ThemeProviderBuilder {
    initial_theme: Option<ThemeRef>,
    initial_mode: ThemeMode,
    additional_themes: Vec<ThemeRef>,
}

impl ThemeProviderBuilder {
    /// Theme to start with. Used as-is, even if it is not registered.
    pub fn initial_theme(mut self, theme: ThemeRef) -> Self {
        self.initial_theme = Some(theme);
        self
    }

    pub fn initial_mode(mut self, mode: ThemeMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Themes merged after the built-ins. An id that matches a built-in
    /// replaces that built-in at its catalog position.
    pub fn additional_themes(mut self, themes: impl IntoIterator<Item = ThemeRef>) -> Self {
        self.additional_themes.extend(themes);
        self
    }

    pub fn build(self) -> ThemeProvider {
        let mut available_themes = built_in_themes();
        for theme in self.additional_themes {
            registry::upsert(&mut available_themes, theme);
        }

        let current_theme = match self.initial_theme {
            Some(theme) => theme,
            None => find_theme(&available_themes, DefaultTheme::ID)
                .or_else(|| available_themes.first().cloned())
                .unwrap_or_else(|| Arc::new(DefaultTheme) as ThemeRef),
        };

        tracing::debug!(
            theme = current_theme.id(),
            mode = ?self.initial_mode,
            available = available_themes.len(),
            "ThemeProvider created"
        );

        ThemeProvider {
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            current_theme,
            theme_mode: self.initial_mode,
            available_themes,
            revision: 0,
            listeners: Subscribers::new(),
        }
    }
}

/// Mutable coordinator for the active theme, mode and theme catalog
#[derive(Debug)]
pub struct ThemeProvider {
    instance: u64,
    current_theme: ThemeRef,
    theme_mode: ThemeMode,
    available_themes: Vec<ThemeRef>,
    revision: u64,
    listeners: Subscribers<ThemeChange>,
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeProvider {
    /// Built-in themes, the `"default"` theme, `System` mode
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ThemeProviderBuilder {
        ThemeProviderBuilder::default()
    }

    // ========== Reads ==========

    pub fn current_theme(&self) -> &ThemeRef {
        &self.current_theme
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn available_themes(&self) -> &[ThemeRef] {
        &self.available_themes
    }

    /// Look up an available theme by id
    pub fn theme_with_id(&self, id: &str) -> Option<ThemeRef> {
        find_theme(&self.available_themes, id)
    }

    /// Available themes grouped by category, order preserved
    pub fn themes_by_category(&self) -> FxHashMap<ThemeCategory, Vec<ThemeRef>> {
        group_by_category(&self.available_themes)
    }

    /// Counter bumped on every observable mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Process-unique id of this provider; revisions are only comparable
    /// between reads of the same instance
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Palette for the current theme and mode.
    ///
    /// `System` is treated as `Light` here; the platform appearance is only
    /// consulted by the propagation layer (see [`crate::environment`]).
    pub fn color_palette(&self) -> ColorPalette {
        self.current_theme
            .color_palette(self.theme_mode.resolve(ColorScheme::Light))
    }

    // ========== Theme selection ==========

    /// Make the available theme with `id` current.
    ///
    /// Unknown ids are logged and ignored; returns whether `id` was found.
    /// When the current theme already has `id` nothing changes, even if the
    /// current handle was applied directly rather than taken from the catalog.
    pub fn switch_to_theme(&mut self, id: &str) -> bool {
        let Some(theme) = self.theme_with_id(id) else {
            tracing::warn!(
                id,
                current = self.current_theme.id(),
                "unknown theme id, keeping current theme"
            );
            return false;
        };

        // Themes are identified by id, not by handle
        if theme.id() == self.current_theme.id() {
            return true;
        }
        self.set_current(theme);
        true
    }

    /// Make `theme` current without registering it.
    ///
    /// The theme does not have to be in [`available_themes`](Self::available_themes);
    /// callers such as preview screens apply ad hoc themes this way.
    pub fn apply_theme(&mut self, theme: ThemeRef) {
        self.set_current(theme);
    }

    fn set_current(&mut self, theme: ThemeRef) {
        let previous = std::mem::replace(&mut self.current_theme, theme);
        tracing::debug!(
            "ThemeProvider: switching theme from {} to {}",
            previous.id(),
            self.current_theme.id()
        );
        self.changed(ThemeChange::ThemeChanged {
            previous: previous.id().to_string(),
            current: self.current_theme.id().to_string(),
        });
    }

    // ========== Mode ==========

    /// Advance `System -> Light -> Dark -> System`
    pub fn toggle_mode(&mut self) {
        self.set_theme_mode(self.theme_mode.toggle());
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        if self.theme_mode == mode {
            return;
        }
        let previous = std::mem::replace(&mut self.theme_mode, mode);
        tracing::debug!("ThemeProvider: mode {:?} -> {:?}", previous, mode);
        self.changed(ThemeChange::ModeChanged {
            previous,
            current: mode,
        });
    }

    // ========== Registration ==========

    /// Insert `theme`, replacing any available theme with the same id in place.
    ///
    /// When the replaced id is the current theme, the current handle is
    /// swapped too so it never points at a stale copy.
    pub fn register_theme(&mut self, theme: ThemeRef) {
        let id = theme.id().to_string();
        let is_current = self.current_theme.id() == id;

        let replaced = registry::upsert(&mut self.available_themes, Arc::clone(&theme));
        if is_current {
            self.current_theme = theme;
        }

        tracing::debug!(id = %id, replaced, is_current, "ThemeProvider: theme registered");
        self.changed(ThemeChange::ThemeRegistered { id, replaced });
    }

    pub fn register_themes(&mut self, themes: impl IntoIterator<Item = ThemeRef>) {
        for theme in themes {
            self.register_theme(theme);
        }
    }

    // ========== Notification ==========

    /// Call `listener` after every observable mutation
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn changed(&mut self, change: ThemeChange) {
        self.revision += 1;
        self.listeners.notify(&change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{HighContrastTheme, OceanTheme};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_theme_overrides_default() {
        let provider = ThemeProvider::builder()
            .initial_theme(Arc::new(OceanTheme))
            .initial_mode(ThemeMode::Dark)
            .build();
        assert_eq!(provider.current_theme().id(), "ocean");
        assert_eq!(provider.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_revision_counts_mutations() {
        let mut provider = ThemeProvider::new();
        assert_eq!(provider.revision(), 0);

        provider.toggle_mode();
        assert_eq!(provider.revision(), 1);

        // no-op mutations leave the revision alone
        provider.set_theme_mode(ThemeMode::Light);
        assert!(!provider.switch_to_theme("missing"));
        assert!(provider.switch_to_theme("default"));
        assert_eq!(provider.revision(), 1);

        provider.register_theme(Arc::new(HighContrastTheme));
        assert_eq!(provider.revision(), 2);
    }

    #[test]
    fn test_listeners_see_changes_in_order() {
        let mut provider = ThemeProvider::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = log.clone();
        let id = provider.subscribe(move |change| log_clone.borrow_mut().push(change.clone()));

        provider.switch_to_theme("ocean");
        provider.toggle_mode();

        assert_eq!(
            *log.borrow(),
            vec![
                ThemeChange::ThemeChanged {
                    previous: "default".into(),
                    current: "ocean".into(),
                },
                ThemeChange::ModeChanged {
                    previous: ThemeMode::System,
                    current: ThemeMode::Light,
                },
            ]
        );

        assert!(provider.unsubscribe(id));
        provider.toggle_mode();
        assert_eq!(log.borrow().len(), 2);
    }
}

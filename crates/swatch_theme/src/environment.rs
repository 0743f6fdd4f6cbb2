//! Theme resolution and propagation
//!
//! Resolution runs in two steps:
//!
//! 1. the provider's [`ThemeMode`] is resolved to a [`ColorScheme`] using the
//!    platform appearance (`System` follows it, `Light`/`Dark` ignore it)
//! 2. the current theme produces its palette for that scheme
//!
//! The provider's own mode stays `System`; only the resolved value tracks the
//! platform. A [`ThemeRoot`] caches the result keyed on the provider revision
//! and the appearance, pushes the scheme to the platform chrome, and installs
//! the resolved values for descendants via [`with_environment`].
//!
//! # Reading values while rendering
//!
//! ```rust
//! use swatch_theme::environment::{self, ThemeRoot};
//! use swatch_theme::{ColorScheme, ThemeMode, ThemeProvider};
//!
//! let mut provider = ThemeProvider::new();
//! provider.set_theme_mode(ThemeMode::System);
//!
//! let mut root = ThemeRoot::new(ColorScheme::Dark, ());
//! let background = root.render(&provider, || environment::palette().background);
//!
//! assert_eq!(background, provider.current_theme().color_palette(ColorScheme::Dark).background);
//! ```

use crate::platform::AppearanceSource;
use crate::provider::ThemeProvider;
use crate::theme::{ColorScheme, Theme, ThemeMode};
use crate::themes::DefaultTheme;
use crate::tokens::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a component needs to render under the active theme
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub theme_id: String,
    /// Mode as selected on the provider (may be `System`)
    pub mode: ThemeMode,
    /// Concrete scheme after resolving `System`
    pub scheme: ColorScheme,
    pub palette: ColorPalette,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub typography: TypographyTokens,
    pub motion: MotionTokens,
    pub opacities: OpacityTokens,
}

impl ResolvedTheme {
    /// Values used when no theme root is installed
    pub fn fallback() -> Self {
        let theme = DefaultTheme;
        Self {
            theme_id: DefaultTheme::ID.to_string(),
            mode: ThemeMode::Light,
            scheme: ColorScheme::Light,
            palette: DefaultTheme::light(),
            spacing: theme.spacing(),
            radii: theme.radii(),
            typography: theme.typography(),
            motion: theme.motion(),
            opacities: theme.opacities(),
        }
    }

    pub fn color(&self, role: ColorRole) -> swatch_core::Color {
        self.palette.get(role)
    }
}

/// Resolve the provider state against the platform appearance
pub fn resolve(provider: &ThemeProvider, appearance: ColorScheme) -> ResolvedTheme {
    let mode = provider.theme_mode();
    let scheme = mode.resolve(appearance);

    let theme = provider.current_theme();
    tracing::trace!(
        theme = theme.id(),
        ?mode,
        ?appearance,
        ?scheme,
        "resolving theme"
    );

    ResolvedTheme {
        theme_id: theme.id().to_string(),
        mode,
        scheme,
        palette: theme.color_palette(scheme),
        spacing: theme.spacing(),
        radii: theme.radii(),
        typography: theme.typography(),
        motion: theme.motion(),
        opacities: theme.opacities(),
    }
}

/// Receiver for the resolved scheme on the platform side (window chrome,
/// keyboard appearance, scroll indicators)
pub trait PlatformChrome {
    fn set_color_scheme(&mut self, scheme: ColorScheme);
}

/// No platform chrome to update
impl PlatformChrome for () {
    fn set_color_scheme(&mut self, _scheme: ColorScheme) {}
}

/// Root of a themed tree: resolves, caches and installs the environment
pub struct ThemeRoot<A: AppearanceSource, C: PlatformChrome> {
    appearance: A,
    chrome: C,
    cache: Option<CachedResolution>,
    chrome_scheme: Option<ColorScheme>,
}

struct CachedResolution {
    provider: u64,
    revision: u64,
    appearance: ColorScheme,
    resolved: Rc<ResolvedTheme>,
}

impl<A: AppearanceSource, C: PlatformChrome> ThemeRoot<A, C> {
    pub fn new(appearance: A, chrome: C) -> Self {
        Self {
            appearance,
            chrome,
            cache: None,
            chrome_scheme: None,
        }
    }

    pub fn appearance(&self) -> &A {
        &self.appearance
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    /// Re-resolve if the provider (instance or revision) or the appearance
    /// changed since the last call, and keep the platform chrome on the
    /// resolved scheme.
    pub fn refresh(&mut self, provider: &ThemeProvider) -> Rc<ResolvedTheme> {
        let appearance = self.appearance.color_scheme();
        let instance = provider.instance();
        let revision = provider.revision();

        let resolved = match &self.cache {
            Some(cached)
                if cached.provider == instance
                    && cached.revision == revision
                    && cached.appearance == appearance =>
            {
                Rc::clone(&cached.resolved)
            }
            _ => {
                let resolved = Rc::new(resolve(provider, appearance));
                tracing::debug!(
                    theme = %resolved.theme_id,
                    scheme = ?resolved.scheme,
                    revision,
                    "ThemeRoot: resolved theme"
                );
                self.cache = Some(CachedResolution {
                    provider: instance,
                    revision,
                    appearance,
                    resolved: Rc::clone(&resolved),
                });
                resolved
            }
        };

        if self.chrome_scheme != Some(resolved.scheme) {
            self.chrome.set_color_scheme(resolved.scheme);
            self.chrome_scheme = Some(resolved.scheme);
        }

        resolved
    }

    /// Refresh, then run `f` with the resolved values installed
    pub fn render<R>(&mut self, provider: &ThemeProvider, f: impl FnOnce() -> R) -> R {
        let resolved = self.refresh(provider);
        with_environment(resolved, f)
    }
}

impl<A, C> std::fmt::Debug for ThemeRoot<A, C>
where
    A: AppearanceSource + std::fmt::Debug,
    C: PlatformChrome,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRoot")
            .field("appearance", &self.appearance)
            .field("chrome_scheme", &self.chrome_scheme)
            .field(
                "cached_revision",
                &self.cache.as_ref().map(|cached| cached.revision),
            )
            .finish()
    }
}

// ========== Scoped environment ==========

thread_local! {
    static ENVIRONMENT: RefCell<Vec<Rc<ResolvedTheme>>> = const { RefCell::new(Vec::new()) };
    static FALLBACK: Rc<ResolvedTheme> = Rc::new(ResolvedTheme::fallback());
}

/// Pops the scope even if the closure unwinds
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ENVIRONMENT.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Install `resolved` for the dynamic extent of `f`.
///
/// Scopes nest: an inner scope overrides an outer one for its subtree, and
/// the outer values are visible again once `f` returns.
pub fn with_environment<R>(resolved: Rc<ResolvedTheme>, f: impl FnOnce() -> R) -> R {
    ENVIRONMENT.with(|stack| stack.borrow_mut().push(resolved));
    let _guard = ScopeGuard;
    f()
}

/// The innermost installed environment, if any
pub fn try_current() -> Option<Rc<ResolvedTheme>> {
    ENVIRONMENT.with(|stack| stack.borrow().last().cloned())
}

/// The innermost installed environment, or the default theme in light mode
pub fn current() -> Rc<ResolvedTheme> {
    try_current().unwrap_or_else(|| FALLBACK.with(Rc::clone))
}

pub fn palette() -> ColorPalette {
    current().palette.clone()
}

pub fn color(role: ColorRole) -> swatch_core::Color {
    current().color(role)
}

pub fn scheme() -> ColorScheme {
    current().scheme
}

pub fn spacing() -> SpacingTokens {
    current().spacing.clone()
}

pub fn radii() -> RadiusTokens {
    current().radii.clone()
}

pub fn typography() -> TypographyTokens {
    current().typography.clone()
}

pub fn motion() -> MotionTokens {
    current().motion.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{HighContrastTheme, OceanTheme};
    use std::sync::Arc;

    #[test]
    fn test_fallback_without_scope() {
        assert!(try_current().is_none());
        assert_eq!(palette(), DefaultTheme::light());
        assert_eq!(scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_nested_scopes_restore() {
        let provider = ThemeProvider::new();
        let outer = Rc::new(resolve(&provider, ColorScheme::Light));

        let mut inner_provider = ThemeProvider::new();
        inner_provider.apply_theme(Arc::new(OceanTheme));
        let inner = Rc::new(resolve(&inner_provider, ColorScheme::Dark));

        with_environment(outer, || {
            assert_eq!(current().theme_id, "default");
            with_environment(inner, || {
                assert_eq!(current().theme_id, "ocean");
                assert_eq!(palette(), OceanTheme.color_palette(ColorScheme::Dark));
            });
            assert_eq!(current().theme_id, "default");
        });
        assert!(try_current().is_none());
    }

    #[test]
    fn test_scope_popped_on_panic() {
        let resolved = Rc::new(ResolvedTheme::fallback());
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            with_environment(resolved, || panic!("render failed"));
        }));
        assert!(result.is_err());
        assert!(try_current().is_none());
    }

    #[test]
    fn test_resolve_carries_theme_tokens() {
        let mut provider = ThemeProvider::new();
        provider.switch_to_theme(HighContrastTheme::ID);
        let resolved = resolve(&provider, ColorScheme::Light);
        assert!(resolved.motion.reduce_motion);
        assert_eq!(resolved.radii, RadiusTokens::sharp());
    }

    #[test]
    fn test_root_caches_until_revision_changes() {
        let mut provider = ThemeProvider::new();
        let mut root = ThemeRoot::new(ColorScheme::Light, ());

        let first = root.refresh(&provider);
        let second = root.refresh(&provider);
        assert!(Rc::ptr_eq(&first, &second));

        provider.toggle_mode();
        let third = root.refresh(&provider);
        assert!(!Rc::ptr_eq(&second, &third));
    }
}

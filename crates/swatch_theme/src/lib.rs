//! Swatch Theme System
//!
//! Named themes, a provider that tracks the active theme and light/dark
//! mode, and a propagation layer that resolves both into concrete values
//! for a tree of components.
//!
//! # Overview
//!
//! - **Tokens**: color palettes, spacing, radii, typography, motion, opacity
//! - **Themes**: six built-ins grouped by [`ThemeCategory`], plus
//!   [`CustomTheme`] for themes built in code or loaded from TOML
//! - **Provider**: [`ThemeProvider`] switches, applies and registers themes
//!   and cycles [`ThemeMode`] (`System -> Light -> Dark`)
//! - **Propagation**: [`ThemeRoot`] resolves `System` against the platform
//!   appearance and installs the result for descendants
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_theme::environment::{self, ThemeRoot};
//! use swatch_theme::{ColorScheme, ManualAppearance, ThemeMode, ThemeProvider};
//!
//! let mut provider = ThemeProvider::new();
//! provider.switch_to_theme("ocean");
//!
//! // The host updates this from its appearance-changed signal
//! let appearance = ManualAppearance::new(ColorScheme::Light);
//! let mut root = ThemeRoot::new(appearance.clone(), ());
//!
//! appearance.set(ColorScheme::Dark);
//! let scheme = root.render(&provider, environment::scheme);
//! assert_eq!(scheme, ColorScheme::Dark);
//!
//! provider.set_theme_mode(ThemeMode::Light);
//! let scheme = root.render(&provider, environment::scheme);
//! assert_eq!(scheme, ColorScheme::Light);
//! ```
//!
//! # Logging
//!
//! State transitions are reported through `tracing` (`debug` for switches
//! and registrations, `warn` for unknown theme ids, `trace` for
//! resolution). The library installs no subscriber.

pub mod custom;
pub mod environment;
pub mod error;
pub mod platform;
pub mod provider;
pub mod registry;
pub mod theme;
pub mod themes;
pub mod tokens;

#[cfg(feature = "watcher")]
pub mod watcher;

// Re-export commonly used types
pub use custom::{load_themes_from_path, load_themes_from_str, CustomTheme, ThemeFile};
pub use environment::{PlatformChrome, ResolvedTheme, ThemeRoot};
pub use error::ThemeError;
pub use platform::{
    detect_system_color_scheme, AppearanceSource, ManualAppearance, Platform, SystemAppearance,
};
pub use provider::{ThemeChange, ThemeProvider, ThemeProviderBuilder};
pub use registry::{built_in_themes, themes_by_category};
pub use theme::{ColorScheme, PreviewColors, Theme, ThemeCategory, ThemeMode, ThemeRef};
pub use themes::{
    DefaultTheme, ForestTheme, HighContrastTheme, LavenderTheme, OceanTheme, SunsetTheme,
};
pub use tokens::*;

pub use swatch_core::Color;

#[cfg(feature = "watcher")]
pub use watcher::{SystemSchemeWatcher, WatcherConfig};

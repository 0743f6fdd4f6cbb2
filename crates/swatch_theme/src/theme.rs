//! Theme abstraction
//!
//! A [`Theme`] is a named bundle that produces a [`ColorPalette`] for each
//! concrete [`ColorScheme`], plus display metadata and the non-color token
//! tables. The user-facing [`ThemeMode`] adds `System`, which is resolved to
//! a scheme before any theme is consulted, so themes never see it.

use crate::tokens::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use swatch_core::Color;

/// Concrete rendering appearance
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// Appearance selector chosen by the user or the host application
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    /// Follow the platform appearance
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Every mode, in toggle order
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Next mode in the `System -> Light -> Dark -> System` ring
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    /// Concrete scheme for this mode given the platform appearance
    pub fn resolve(self, appearance: ColorScheme) -> ColorScheme {
        match self {
            ThemeMode::System => appearance,
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// Symbol name for pickers
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::System => "circle.lefthalf.filled",
            ThemeMode::Light => "sun.max.fill",
            ThemeMode::Dark => "moon.fill",
        }
    }
}

impl From<ColorScheme> for ThemeMode {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemeMode::Light,
            ColorScheme::Dark => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grouping used by theme pickers. Has no effect on resolution.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeCategory {
    Standard,
    BrandPersonality,
    Accessibility,
    #[default]
    Custom,
}

impl ThemeCategory {
    pub const ALL: [ThemeCategory; 4] = [
        ThemeCategory::Standard,
        ThemeCategory::BrandPersonality,
        ThemeCategory::Accessibility,
        ThemeCategory::Custom,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeCategory::Standard => "Standard",
            ThemeCategory::BrandPersonality => "Brand Personality",
            ThemeCategory::Accessibility => "Accessibility",
            ThemeCategory::Custom => "Custom",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ThemeCategory::Standard => "The baseline look shipped with the library",
            ThemeCategory::BrandPersonality => "Palettes with a distinct mood for branded apps",
            ThemeCategory::Accessibility => "Themes tuned for legibility and reduced motion",
            ThemeCategory::Custom => "Themes registered by the host application",
        }
    }

    /// Symbol name for pickers
    pub fn icon(self) -> &'static str {
        match self {
            ThemeCategory::Standard => "paintbrush",
            ThemeCategory::BrandPersonality => "sparkles",
            ThemeCategory::Accessibility => "accessibility",
            ThemeCategory::Custom => "slider.horizontal.3",
        }
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Swatches shown in theme pickers
pub type PreviewColors = SmallVec<[Color; 5]>;

/// A named source of palettes and tokens
///
/// Implementations must be pure: the same scheme always yields the same
/// palette. Identity is the [`Theme::id`]; see `PartialEq for dyn Theme`.
pub trait Theme: fmt::Debug + Send + Sync {
    /// Stable unique identifier (e.g. `"ocean"`)
    fn id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn category(&self) -> ThemeCategory;

    /// Three to five representative colors
    fn preview_colors(&self) -> PreviewColors;

    /// Palette for a concrete scheme
    fn color_palette(&self, scheme: ColorScheme) -> ColorPalette;

    fn spacing(&self) -> SpacingTokens {
        SpacingTokens::default()
    }

    fn radii(&self) -> RadiusTokens {
        RadiusTokens::default()
    }

    fn typography(&self) -> TypographyTokens {
        TypographyTokens::default()
    }

    fn motion(&self) -> MotionTokens {
        MotionTokens::default()
    }

    fn opacities(&self) -> OpacityTokens {
        OpacityTokens::default()
    }
}

/// Shared handle to a theme
pub type ThemeRef = Arc<dyn Theme>;

impl PartialEq for dyn Theme {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for dyn Theme {}

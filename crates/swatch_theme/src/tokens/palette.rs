//! Color palette tokens
//!
//! A [`ColorPalette`] assigns a concrete color to every [`ColorRole`].
//! Palettes are built from a [`PaletteSeed`] carrying the base roles; every
//! role the seed does not set is derived:
//!
//! - `*_container` roles use their base color at [`OpacityTokens::CONTAINER`]
//! - `on_*_container` roles use their base color at full opacity
//! - `on_*` roles for accent and status colors are white, except
//!   `on_warning`, which is black

use super::OpacityTokens;
use std::collections::HashMap;
use swatch_core::Color;

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorRole {
    // Accent colors
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,

    // Surfaces
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,

    // Status colors
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Warning,
    OnWarning,
    Success,
    OnSuccess,
    Info,
    OnInfo,

    // Lines
    Outline,
}

impl ColorRole {
    /// Every role, in declaration order
    pub const ALL: [ColorRole; 27] = [
        ColorRole::Primary,
        ColorRole::OnPrimary,
        ColorRole::PrimaryContainer,
        ColorRole::OnPrimaryContainer,
        ColorRole::Secondary,
        ColorRole::OnSecondary,
        ColorRole::SecondaryContainer,
        ColorRole::OnSecondaryContainer,
        ColorRole::Tertiary,
        ColorRole::OnTertiary,
        ColorRole::Background,
        ColorRole::OnBackground,
        ColorRole::Surface,
        ColorRole::OnSurface,
        ColorRole::SurfaceVariant,
        ColorRole::OnSurfaceVariant,
        ColorRole::Error,
        ColorRole::OnError,
        ColorRole::ErrorContainer,
        ColorRole::OnErrorContainer,
        ColorRole::Warning,
        ColorRole::OnWarning,
        ColorRole::Success,
        ColorRole::OnSuccess,
        ColorRole::Info,
        ColorRole::OnInfo,
        ColorRole::Outline,
    ];

    /// Kebab-case name, used for CSS variables and theme files
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::OnPrimary => "on-primary",
            ColorRole::PrimaryContainer => "primary-container",
            ColorRole::OnPrimaryContainer => "on-primary-container",
            ColorRole::Secondary => "secondary",
            ColorRole::OnSecondary => "on-secondary",
            ColorRole::SecondaryContainer => "secondary-container",
            ColorRole::OnSecondaryContainer => "on-secondary-container",
            ColorRole::Tertiary => "tertiary",
            ColorRole::OnTertiary => "on-tertiary",
            ColorRole::Background => "background",
            ColorRole::OnBackground => "on-background",
            ColorRole::Surface => "surface",
            ColorRole::OnSurface => "on-surface",
            ColorRole::SurfaceVariant => "surface-variant",
            ColorRole::OnSurfaceVariant => "on-surface-variant",
            ColorRole::Error => "error",
            ColorRole::OnError => "on-error",
            ColorRole::ErrorContainer => "error-container",
            ColorRole::OnErrorContainer => "on-error-container",
            ColorRole::Warning => "warning",
            ColorRole::OnWarning => "on-warning",
            ColorRole::Success => "success",
            ColorRole::OnSuccess => "on-success",
            ColorRole::Info => "info",
            ColorRole::OnInfo => "on-info",
            ColorRole::Outline => "outline",
        }
    }

    /// Inverse of [`ColorRole::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// Complete set of semantic colors
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPalette {
    // Accent colors
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub secondary_container: Color,
    pub on_secondary_container: Color,
    pub tertiary: Color,
    pub on_tertiary: Color,

    // Surfaces
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,

    // Status colors
    pub error: Color,
    pub on_error: Color,
    pub error_container: Color,
    pub on_error_container: Color,
    pub warning: Color,
    pub on_warning: Color,
    pub success: Color,
    pub on_success: Color,
    pub info: Color,
    pub on_info: Color,

    // Lines
    pub outline: Color,
}

impl ColorPalette {
    /// Start building a palette from its base colors
    pub fn builder(seed: PaletteSeed) -> PaletteBuilder {
        PaletteBuilder::new(seed)
    }

    /// Build a palette with every derived role at its default
    pub fn from_seed(seed: PaletteSeed) -> Self {
        PaletteBuilder::new(seed).build()
    }

    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::OnPrimary => self.on_primary,
            ColorRole::PrimaryContainer => self.primary_container,
            ColorRole::OnPrimaryContainer => self.on_primary_container,
            ColorRole::Secondary => self.secondary,
            ColorRole::OnSecondary => self.on_secondary,
            ColorRole::SecondaryContainer => self.secondary_container,
            ColorRole::OnSecondaryContainer => self.on_secondary_container,
            ColorRole::Tertiary => self.tertiary,
            ColorRole::OnTertiary => self.on_tertiary,
            ColorRole::Background => self.background,
            ColorRole::OnBackground => self.on_background,
            ColorRole::Surface => self.surface,
            ColorRole::OnSurface => self.on_surface,
            ColorRole::SurfaceVariant => self.surface_variant,
            ColorRole::OnSurfaceVariant => self.on_surface_variant,
            ColorRole::Error => self.error,
            ColorRole::OnError => self.on_error,
            ColorRole::ErrorContainer => self.error_container,
            ColorRole::OnErrorContainer => self.on_error_container,
            ColorRole::Warning => self.warning,
            ColorRole::OnWarning => self.on_warning,
            ColorRole::Success => self.success,
            ColorRole::OnSuccess => self.on_success,
            ColorRole::Info => self.info,
            ColorRole::OnInfo => self.on_info,
            ColorRole::Outline => self.outline,
        }
    }

    fn slot_mut(&mut self, role: ColorRole) -> &mut Color {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::OnPrimary => &mut self.on_primary,
            ColorRole::PrimaryContainer => &mut self.primary_container,
            ColorRole::OnPrimaryContainer => &mut self.on_primary_container,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::OnSecondary => &mut self.on_secondary,
            ColorRole::SecondaryContainer => &mut self.secondary_container,
            ColorRole::OnSecondaryContainer => &mut self.on_secondary_container,
            ColorRole::Tertiary => &mut self.tertiary,
            ColorRole::OnTertiary => &mut self.on_tertiary,
            ColorRole::Background => &mut self.background,
            ColorRole::OnBackground => &mut self.on_background,
            ColorRole::Surface => &mut self.surface,
            ColorRole::OnSurface => &mut self.on_surface,
            ColorRole::SurfaceVariant => &mut self.surface_variant,
            ColorRole::OnSurfaceVariant => &mut self.on_surface_variant,
            ColorRole::Error => &mut self.error,
            ColorRole::OnError => &mut self.on_error,
            ColorRole::ErrorContainer => &mut self.error_container,
            ColorRole::OnErrorContainer => &mut self.on_error_container,
            ColorRole::Warning => &mut self.warning,
            ColorRole::OnWarning => &mut self.on_warning,
            ColorRole::Success => &mut self.success,
            ColorRole::OnSuccess => &mut self.on_success,
            ColorRole::Info => &mut self.info,
            ColorRole::OnInfo => &mut self.on_info,
            ColorRole::Outline => &mut self.outline,
        }
    }

    /// Linear interpolation between two palettes
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mut out = from.clone();
        for role in ColorRole::ALL {
            *out.slot_mut(role) = Color::lerp(&from.get(role), &to.get(role), t);
        }
        out
    }

    /// CSS custom properties for every role, keyed without the `--` prefix
    ///
    /// ```ignore
    /// let vars = OceanTheme.color_palette(ColorScheme::Dark).to_css_variables();
    /// // vars["primary-container"] == "#00a0c81f"
    /// ```
    pub fn to_css_variables(&self) -> HashMap<String, String> {
        ColorRole::ALL
            .iter()
            .map(|role| (role.name().to_string(), self.get(*role).to_hex_string()))
            .collect()
    }
}

/// Base colors a palette is derived from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteSeed {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub on_surface_variant: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
    pub outline: Color,
}

/// Applies overrides on top of the derived defaults
#[derive(Clone, Debug)]
pub struct PaletteBuilder {
    palette: ColorPalette,
}

impl PaletteBuilder {
    pub fn new(seed: PaletteSeed) -> Self {
        let container = |c: Color| c.with_alpha(OpacityTokens::CONTAINER);

        Self {
            palette: ColorPalette {
                primary: seed.primary,
                on_primary: Color::WHITE,
                primary_container: container(seed.primary),
                on_primary_container: seed.primary,
                secondary: seed.secondary,
                on_secondary: Color::WHITE,
                secondary_container: container(seed.secondary),
                on_secondary_container: seed.secondary,
                tertiary: seed.tertiary,
                on_tertiary: Color::WHITE,
                background: seed.background,
                on_background: seed.on_background,
                surface: seed.surface,
                on_surface: seed.on_surface,
                surface_variant: seed.surface_variant,
                on_surface_variant: seed.on_surface_variant,
                error: seed.error,
                on_error: Color::WHITE,
                error_container: container(seed.error),
                on_error_container: seed.error,
                warning: seed.warning,
                on_warning: Color::BLACK,
                success: seed.success,
                on_success: Color::WHITE,
                info: seed.info,
                on_info: Color::WHITE,
                outline: seed.outline,
            },
        }
    }

    /// Override a single role
    pub fn set(mut self, role: ColorRole, color: Color) -> Self {
        *self.palette.slot_mut(role) = color;
        self
    }

    pub fn on_primary(self, color: Color) -> Self {
        self.set(ColorRole::OnPrimary, color)
    }

    pub fn primary_container(self, color: Color) -> Self {
        self.set(ColorRole::PrimaryContainer, color)
    }

    pub fn on_primary_container(self, color: Color) -> Self {
        self.set(ColorRole::OnPrimaryContainer, color)
    }

    pub fn on_secondary(self, color: Color) -> Self {
        self.set(ColorRole::OnSecondary, color)
    }

    pub fn on_tertiary(self, color: Color) -> Self {
        self.set(ColorRole::OnTertiary, color)
    }

    pub fn on_error(self, color: Color) -> Self {
        self.set(ColorRole::OnError, color)
    }

    pub fn on_warning(self, color: Color) -> Self {
        self.set(ColorRole::OnWarning, color)
    }

    pub fn on_success(self, color: Color) -> Self {
        self.set(ColorRole::OnSuccess, color)
    }

    pub fn build(self) -> ColorPalette {
        self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> PaletteSeed {
        PaletteSeed {
            primary: Color::from_hex(0x007AFF),
            secondary: Color::from_hex(0x5856D6),
            tertiary: Color::from_hex(0xAF52DE),
            background: Color::WHITE,
            on_background: Color::BLACK,
            surface: Color::from_hex(0xF2F2F7),
            on_surface: Color::BLACK,
            surface_variant: Color::from_hex(0xE5E5EA),
            on_surface_variant: Color::from_hex(0x3C3C43),
            error: Color::from_hex(0xFF3B30),
            warning: Color::from_hex(0xFF9500),
            success: Color::from_hex(0x34C759),
            info: Color::from_hex(0x5AC8FA),
            outline: Color::from_hex(0xC6C6C8),
        }
    }

    #[test]
    fn test_derived_defaults() {
        let p = ColorPalette::from_seed(seed());

        assert_eq!(p.primary_container, Color::from_hex(0x007AFF).with_alpha(0.12));
        assert_eq!(p.on_primary_container, Color::from_hex(0x007AFF));
        assert_eq!(p.secondary_container, Color::from_hex(0x5856D6).with_alpha(0.12));
        assert_eq!(p.on_secondary_container, Color::from_hex(0x5856D6));
        assert_eq!(p.error_container, Color::from_hex(0xFF3B30).with_alpha(0.12));
        assert_eq!(p.on_error_container, Color::from_hex(0xFF3B30));

        assert_eq!(p.on_primary, Color::WHITE);
        assert_eq!(p.on_secondary, Color::WHITE);
        assert_eq!(p.on_tertiary, Color::WHITE);
        assert_eq!(p.on_error, Color::WHITE);
        assert_eq!(p.on_success, Color::WHITE);
        assert_eq!(p.on_info, Color::WHITE);
        assert_eq!(p.on_warning, Color::BLACK);
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let p = ColorPalette::builder(seed())
            .on_primary(Color::BLACK)
            .primary_container(Color::from_hex(0xD6E4FF))
            .set(ColorRole::OnInfo, Color::BLACK)
            .build();

        assert_eq!(p.on_primary, Color::BLACK);
        assert_eq!(p.primary_container, Color::from_hex(0xD6E4FF));
        assert_eq!(p.on_info, Color::BLACK);
        // untouched roles keep their derivation
        assert_eq!(p.on_primary_container, Color::from_hex(0x007AFF));
    }

    #[test]
    fn test_get_matches_fields() {
        let p = ColorPalette::from_seed(seed());
        assert_eq!(p.get(ColorRole::Primary), p.primary);
        assert_eq!(p.get(ColorRole::OnSurfaceVariant), p.on_surface_variant);
        assert_eq!(p.get(ColorRole::Outline), p.outline);
    }

    #[test]
    fn test_css_variables_cover_every_role() {
        let vars = ColorPalette::from_seed(seed()).to_css_variables();
        assert_eq!(vars.len(), ColorRole::ALL.len());
        assert_eq!(vars["primary"], "#007aff");
        assert_eq!(vars["on-warning"], "#000000");
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_name(role.name()), Some(role));
        }
        assert_eq!(ColorRole::from_name("accent"), None);
    }

    #[test]
    fn test_lerp_halfway() {
        let light = ColorPalette::from_seed(seed());
        let mut dark_seed = seed();
        dark_seed.background = Color::BLACK;
        let dark = ColorPalette::from_seed(dark_seed);

        let mid = ColorPalette::lerp(&light, &dark, 0.5);
        assert_eq!(mid.background.r, 0.5);
        assert_eq!(mid.primary, light.primary);
    }
}

//! Themes defined at runtime
//!
//! [`CustomTheme`] owns its palettes and tokens, so it can be assembled in
//! code or loaded from a theme file:
//!
//! ```toml
//! [[theme]]
//! id = "corporate"
//! name = "Corporate"
//! category = "brand-personality"
//! spacing-scale = 1.25
//! corners = "sharp"
//!
//! [theme.light]
//! primary = "#0B5FFF"
//! secondary = "#5A6B8C"
//! # ... the remaining base roles
//! on-warning = "#FFFFFF" # any other role overrides the derived value
//!
//! [theme.dark]
//! primary = "#6A9CFF"
//! # ...
//! ```
//!
//! Palette tables must name every base role ([`PaletteSeed`]); the other
//! roles are optional and fall back to the derivation rules in
//! [`crate::tokens`].

use crate::error::{Result, ThemeError};
use crate::theme::{ColorScheme, PreviewColors, Theme, ThemeCategory, ThemeRef};
use crate::tokens::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use smallvec::smallvec;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use swatch_core::Color;

/// Allowed number of preview swatches
const PREVIEW_COUNT: std::ops::RangeInclusive<usize> = 3..=5;

/// A theme whose data lives in the value itself
#[derive(Clone, Debug, PartialEq)]
pub struct CustomTheme {
    id: String,
    name: String,
    description: String,
    category: ThemeCategory,
    preview: PreviewColors,
    light: ColorPalette,
    dark: ColorPalette,
    spacing: SpacingTokens,
    radii: RadiusTokens,
    typography: TypographyTokens,
    motion: MotionTokens,
}

impl CustomTheme {
    /// A custom-category theme with default tokens. The preview shows the
    /// light accents.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        light: ColorPalette,
        dark: ColorPalette,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: ThemeCategory::Custom,
            preview: smallvec![light.primary, light.secondary, light.tertiary],
            light,
            dark,
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            typography: TypographyTokens::default(),
            motion: MotionTokens::default(),
        }
    }

    /// Snapshot of `base` under a new id and name
    pub fn from_theme(base: &dyn Theme, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: base.description().to_string(),
            category: ThemeCategory::Custom,
            preview: base.preview_colors(),
            light: base.color_palette(ColorScheme::Light),
            dark: base.color_palette(ColorScheme::Dark),
            spacing: base.spacing(),
            radii: base.radii(),
            typography: base.typography(),
            motion: base.motion(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: ThemeCategory) -> Self {
        self.category = category;
        self
    }

    /// Replace the preview swatches. Rejects fewer than 3 or more than 5.
    pub fn with_preview_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Result<Self> {
        let preview: PreviewColors = colors.into_iter().collect();
        if !PREVIEW_COUNT.contains(&preview.len()) {
            return Err(ThemeError::PreviewCount {
                theme: self.id,
                count: preview.len(),
            });
        }
        self.preview = preview;
        Ok(self)
    }

    pub fn with_palette(mut self, scheme: ColorScheme, palette: ColorPalette) -> Self {
        match scheme {
            ColorScheme::Light => self.light = palette,
            ColorScheme::Dark => self.dark = palette,
        }
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingTokens) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_radii(mut self, radii: RadiusTokens) -> Self {
        self.radii = radii;
        self
    }

    pub fn with_typography(mut self, typography: TypographyTokens) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_motion(mut self, motion: MotionTokens) -> Self {
        self.motion = motion;
        self
    }

    pub fn into_ref(self) -> ThemeRef {
        Arc::new(self)
    }
}

impl Theme for CustomTheme {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> ThemeCategory {
        self.category
    }

    fn preview_colors(&self) -> PreviewColors {
        self.preview.clone()
    }

    fn color_palette(&self, scheme: ColorScheme) -> ColorPalette {
        match scheme {
            ColorScheme::Light => self.light.clone(),
            ColorScheme::Dark => self.dark.clone(),
        }
    }

    fn spacing(&self) -> SpacingTokens {
        self.spacing.clone()
    }

    fn radii(&self) -> RadiusTokens {
        self.radii.clone()
    }

    fn typography(&self) -> TypographyTokens {
        self.typography.clone()
    }

    fn motion(&self) -> MotionTokens {
        self.motion.clone()
    }
}

// ========== Theme files ==========

/// Top-level theme file
#[derive(Debug, Default, Deserialize)]
pub struct ThemeFile {
    #[serde(default, rename = "theme")]
    pub themes: Vec<ThemeDefinition>,
}

/// One `[[theme]]` table
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeDefinition {
    pub id: String,
    /// Defaults to the id
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: ThemeCategory,
    /// Hex colors; defaults to the light accents
    #[serde(default)]
    pub preview: Vec<String>,
    /// Role name to hex color
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
    #[serde(default = "default_spacing_scale")]
    pub spacing_scale: f32,
    #[serde(default)]
    pub corners: CornerStyle,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub reduce_motion: bool,
}

fn default_spacing_scale() -> f32 {
    1.0
}

/// Radius scale selection in theme files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerStyle {
    #[default]
    Rounded,
    Sharp,
}

impl CornerStyle {
    pub fn radii(self) -> RadiusTokens {
        match self {
            CornerStyle::Rounded => RadiusTokens::default(),
            CornerStyle::Sharp => RadiusTokens::sharp(),
        }
    }
}

impl ThemeFile {
    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Build every theme, rejecting ids that repeat within the file
    pub fn into_themes(self) -> Result<Vec<ThemeRef>> {
        let mut seen = FxHashSet::default();
        let mut themes = Vec::with_capacity(self.themes.len());

        for definition in self.themes {
            let theme = definition.into_theme()?;
            if !seen.insert(theme.id.clone()) {
                return Err(ThemeError::DuplicateId(theme.id));
            }
            themes.push(theme.into_ref());
        }

        Ok(themes)
    }
}

impl ThemeDefinition {
    pub fn into_theme(self) -> Result<CustomTheme> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(ThemeError::EmptyId);
        }

        if !(self.spacing_scale.is_finite() && self.spacing_scale > 0.0) {
            return Err(ThemeError::InvalidSpacingScale {
                theme: id,
                value: self.spacing_scale,
            });
        }

        let light = parse_palette(&id, ColorScheme::Light, &self.light)?;
        let dark = parse_palette(&id, ColorScheme::Dark, &self.dark)?;
        let name = self.name.unwrap_or_else(|| id.clone());

        let mut theme = CustomTheme::new(id.clone(), name, light, dark)
            .with_description(self.description)
            .with_category(self.category)
            .with_spacing(SpacingTokens::default().scaled(self.spacing_scale))
            .with_radii(self.corners.radii());

        if !self.preview.is_empty() {
            let colors = self
                .preview
                .iter()
                .map(|hex| parse_color(&id, "preview", hex))
                .collect::<Result<Vec<_>>>()?;
            theme = theme.with_preview_colors(colors)?;
        }

        if let Some(font_family) = self.font_family {
            theme = theme.with_typography(TypographyTokens {
                font_family,
                ..TypographyTokens::default()
            });
        }

        if self.reduce_motion {
            theme = theme.with_motion(MotionTokens::reduced());
        }

        Ok(theme)
    }
}

fn parse_color(theme: &str, role: &str, value: &str) -> Result<Color> {
    value.parse().map_err(|source| ThemeError::InvalidColor {
        theme: theme.to_string(),
        role: role.to_string(),
        source,
    })
}

fn parse_palette(
    theme: &str,
    scheme: ColorScheme,
    table: &BTreeMap<String, String>,
) -> Result<ColorPalette> {
    let mut colors = FxHashMap::default();
    for (key, value) in table {
        let role = ColorRole::from_name(key).ok_or_else(|| ThemeError::UnknownRole {
            theme: theme.to_string(),
            role: key.clone(),
        })?;
        colors.insert(role, parse_color(theme, key, value)?);
    }

    let base = |role: ColorRole| -> Result<Color> {
        colors
            .get(&role)
            .copied()
            .ok_or_else(|| ThemeError::MissingRole {
                theme: theme.to_string(),
                scheme: match scheme {
                    ColorScheme::Light => "light",
                    ColorScheme::Dark => "dark",
                },
                role: role.name(),
            })
    };

    let seed = PaletteSeed {
        primary: base(ColorRole::Primary)?,
        secondary: base(ColorRole::Secondary)?,
        tertiary: base(ColorRole::Tertiary)?,
        background: base(ColorRole::Background)?,
        on_background: base(ColorRole::OnBackground)?,
        surface: base(ColorRole::Surface)?,
        on_surface: base(ColorRole::OnSurface)?,
        surface_variant: base(ColorRole::SurfaceVariant)?,
        on_surface_variant: base(ColorRole::OnSurfaceVariant)?,
        error: base(ColorRole::Error)?,
        warning: base(ColorRole::Warning)?,
        success: base(ColorRole::Success)?,
        info: base(ColorRole::Info)?,
        outline: base(ColorRole::Outline)?,
    };

    let builder = colors
        .iter()
        .fold(ColorPalette::builder(seed), |builder, (role, color)| {
            builder.set(*role, *color)
        });
    Ok(builder.build())
}

/// Parse every theme in a TOML document
pub fn load_themes_from_str(source: &str) -> Result<Vec<ThemeRef>> {
    ThemeFile::parse(source)?.into_themes()
}

/// Read and parse a TOML theme file
pub fn load_themes_from_path(path: impl AsRef<Path>) -> Result<Vec<ThemeRef>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let themes = load_themes_from_str(&source)?;
    tracing::debug!(path = %path.display(), count = themes.len(), "loaded theme file");
    Ok(themes)
}

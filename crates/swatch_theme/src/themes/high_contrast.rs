//! High-contrast accessibility theme
//!
//! Pure black/white surfaces, solid containers instead of translucent
//! tints, sharper corners and no animated transitions.

use crate::theme::{ColorScheme, PreviewColors, Theme, ThemeCategory};
use crate::tokens::*;
use smallvec::smallvec;
use swatch_core::Color;

#[derive(Clone, Copy, Debug, Default)]
pub struct HighContrastTheme;

impl HighContrastTheme {
    pub const ID: &'static str = "high-contrast";

    pub fn light() -> ColorPalette {
        let primary = Color::from_hex(0x0040DD);
        ColorPalette::builder(PaletteSeed {
            primary,
            secondary: Color::from_hex(0x3634A3),
            tertiary: Color::from_hex(0x8944AB),
            background: Color::WHITE,
            on_background: Color::BLACK,
            surface: Color::WHITE,
            on_surface: Color::BLACK,
            surface_variant: Color::from_hex(0xE0E0E0),
            on_surface_variant: Color::BLACK,
            error: Color::from_hex(0xD70015),
            warning: Color::from_hex(0xC93400),
            success: Color::from_hex(0x248A3D),
            info: Color::from_hex(0x0071A4),
            outline: Color::BLACK,
        })
        .primary_container(primary)
        .on_primary_container(Color::WHITE)
        .on_warning(Color::WHITE)
        .build()
    }

    pub fn dark() -> ColorPalette {
        let primary = Color::from_hex(0x409CFF);
        ColorPalette::builder(PaletteSeed {
            primary,
            secondary: Color::from_hex(0x7D7AFF),
            tertiary: Color::from_hex(0xDA8FFF),
            background: Color::BLACK,
            on_background: Color::WHITE,
            surface: Color::BLACK,
            on_surface: Color::WHITE,
            surface_variant: Color::from_hex(0x262626),
            on_surface_variant: Color::WHITE,
            error: Color::from_hex(0xFF6961),
            warning: Color::from_hex(0xFFB340),
            success: Color::from_hex(0x30DB5B),
            info: Color::from_hex(0x70D7FF),
            outline: Color::WHITE,
        })
        .on_primary(Color::BLACK)
        .primary_container(primary)
        .on_primary_container(Color::BLACK)
        .on_error(Color::BLACK)
        .on_success(Color::BLACK)
        .set(ColorRole::OnInfo, Color::BLACK)
        .build()
    }
}

impl Theme for HighContrastTheme {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "High Contrast"
    }

    fn description(&self) -> &str {
        "Maximum legibility with solid fills and no motion"
    }

    fn category(&self) -> ThemeCategory {
        ThemeCategory::Accessibility
    }

    fn preview_colors(&self) -> PreviewColors {
        smallvec![Color::BLACK, Color::WHITE, Color::from_hex(0x0040DD)]
    }

    fn color_palette(&self, scheme: ColorScheme) -> ColorPalette {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    fn radii(&self) -> RadiusTokens {
        RadiusTokens::sharp()
    }

    fn typography(&self) -> TypographyTokens {
        let mut typography = TypographyTokens::default();
        typography.body.weight = FontWeight::Medium;
        typography.callout.weight = FontWeight::Medium;
        typography.footnote.weight = FontWeight::Medium;
        typography
    }

    fn motion(&self) -> MotionTokens {
        MotionTokens::reduced()
    }
}

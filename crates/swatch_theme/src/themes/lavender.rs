//! Lavender theme: soft violets with rounded corners

use crate::theme::{ColorScheme, PreviewColors, Theme, ThemeCategory};
use crate::tokens::*;
use smallvec::smallvec;
use swatch_core::Color;

pub const GRAPE: Color = Color::from_hex(0x5A189A);
pub const VIOLET: Color = Color::from_hex(0x7B2CBF);
pub const ORCHID: Color = Color::from_hex(0x9D4EDD);
pub const LILAC: Color = Color::from_hex(0xC77DFF);
pub const THISTLE: Color = Color::from_hex(0xE0AAFF);
pub const ROSE: Color = Color::from_hex(0xD6336C);

#[derive(Clone, Copy, Debug, Default)]
pub struct LavenderTheme;

impl LavenderTheme {
    pub const ID: &'static str = "lavender";

    pub fn light() -> ColorPalette {
        ColorPalette::from_seed(PaletteSeed {
            primary: VIOLET,
            secondary: ORCHID,
            tertiary: ROSE,
            background: Color::from_hex(0xFBF8FF),
            on_background: Color::from_hex(0x240046),
            surface: Color::WHITE,
            on_surface: Color::from_hex(0x240046),
            surface_variant: Color::from_hex(0xF0E6FA),
            on_surface_variant: Color::from_hex(0x4A3B5C),
            error: Color::from_hex(0xD00000),
            warning: Color::from_hex(0xF48C06),
            success: Color::from_hex(0x38B000),
            info: Color::from_hex(0x4361EE),
            outline: Color::from_hex(0xD7C4EA),
        })
    }

    pub fn dark() -> ColorPalette {
        ColorPalette::builder(PaletteSeed {
            primary: LILAC,
            secondary: THISTLE,
            tertiary: Color::from_hex(0xF783AC),
            background: Color::from_hex(0x14081F),
            on_background: Color::from_hex(0xF3E8FF),
            surface: Color::from_hex(0x1F1030),
            on_surface: Color::from_hex(0xF3E8FF),
            surface_variant: Color::from_hex(0x2E1A47),
            on_surface_variant: THISTLE,
            error: Color::from_hex(0xFF6B6B),
            warning: Color::from_hex(0xFFB347),
            success: Color::from_hex(0x70E000),
            info: Color::from_hex(0x7B9CFF),
            outline: GRAPE,
        })
        .on_primary(Color::from_hex(0x240046))
        .on_secondary(Color::from_hex(0x240046))
        .build()
    }
}

impl Theme for LavenderTheme {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Lavender"
    }

    fn description(&self) -> &str {
        "Playful purples with generous rounding"
    }

    fn category(&self) -> ThemeCategory {
        ThemeCategory::BrandPersonality
    }

    fn preview_colors(&self) -> PreviewColors {
        smallvec![GRAPE, VIOLET, LILAC, THISTLE]
    }

    fn color_palette(&self, scheme: ColorScheme) -> ColorPalette {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    fn radii(&self) -> RadiusTokens {
        RadiusTokens {
            radius_sm: 6.0,
            radius_md: 12.0,
            radius_lg: 18.0,
            radius_xl: 24.0,
            radius_xxl: 32.0,
            ..RadiusTokens::default()
        }
    }
}

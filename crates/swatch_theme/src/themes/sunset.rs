//! Sunset theme: warm coral and gold

use crate::theme::{ColorScheme, PreviewColors, Theme, ThemeCategory};
use crate::tokens::*;
use smallvec::smallvec;
use swatch_core::Color;

pub const CORAL: Color = Color::from_hex(0xE76F51);
pub const APRICOT: Color = Color::from_hex(0xF4A261);
pub const SAFFRON: Color = Color::from_hex(0xE9C46A);
pub const PLUM: Color = Color::from_hex(0x6D2E46);
pub const DUSK: Color = Color::from_hex(0x264653);
pub const EMBER: Color = Color::from_hex(0x2B1A1F);

#[derive(Clone, Copy, Debug, Default)]
pub struct SunsetTheme;

impl SunsetTheme {
    pub const ID: &'static str = "sunset";

    pub fn light() -> ColorPalette {
        ColorPalette::from_seed(PaletteSeed {
            primary: CORAL,
            secondary: APRICOT,
            tertiary: PLUM,
            background: Color::from_hex(0xFFF8F0),
            on_background: EMBER,
            surface: Color::WHITE,
            on_surface: EMBER,
            surface_variant: Color::from_hex(0xFCE8D8),
            on_surface_variant: Color::from_hex(0x5C3D2E),
            error: Color::from_hex(0xC1121F),
            warning: SAFFRON,
            success: Color::from_hex(0x2A9D8F),
            info: DUSK,
            outline: Color::from_hex(0xE8C4A8),
        })
    }

    pub fn dark() -> ColorPalette {
        ColorPalette::builder(PaletteSeed {
            primary: Color::from_hex(0xF08A6C),
            secondary: APRICOT,
            tertiary: Color::from_hex(0xC97B98),
            background: EMBER,
            on_background: Color::from_hex(0xFDEDE3),
            surface: Color::from_hex(0x3A252B),
            on_surface: Color::from_hex(0xFDEDE3),
            surface_variant: Color::from_hex(0x4A2F36),
            on_surface_variant: Color::from_hex(0xF2C9B4),
            error: Color::from_hex(0xFF6B6B),
            warning: SAFFRON,
            success: Color::from_hex(0x52B69A),
            info: Color::from_hex(0x8AB6C4),
            outline: Color::from_hex(0x6B4A52),
        })
        .on_primary(EMBER)
        .on_secondary(EMBER)
        .build()
    }
}

impl Theme for SunsetTheme {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Sunset"
    }

    fn description(&self) -> &str {
        "Golden-hour warmth for friendly products"
    }

    fn category(&self) -> ThemeCategory {
        ThemeCategory::BrandPersonality
    }

    fn preview_colors(&self) -> PreviewColors {
        smallvec![CORAL, APRICOT, SAFFRON, PLUM, DUSK]
    }

    fn color_palette(&self, scheme: ColorScheme) -> ColorPalette {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    fn motion(&self) -> MotionTokens {
        MotionTokens {
            spring: SpringConfig::bouncy(),
            ..MotionTokens::default()
        }
    }
}

//! Ocean theme: deep navy surfaces with cyan accents

use crate::theme::{ColorScheme, PreviewColors, Theme, ThemeCategory};
use crate::tokens::*;
use smallvec::smallvec;
use swatch_core::Color;

pub const DEEP: Color = Color::from_hex(0x03045E);
pub const NAVY: Color = Color::from_hex(0x023E8A);
pub const MARINE: Color = Color::from_hex(0x0077B6);
pub const CERULEAN: Color = Color::from_hex(0x00B4D8);
pub const SKY: Color = Color::from_hex(0x48CAE4);
pub const FOAM: Color = Color::from_hex(0x90E0EF);
pub const MIST: Color = Color::from_hex(0xCAF0F8);
pub const ABYSS: Color = Color::from_hex(0x001D3D);
pub const TRENCH: Color = Color::from_hex(0x002B55);

#[derive(Clone, Copy, Debug, Default)]
pub struct OceanTheme;

impl OceanTheme {
    pub const ID: &'static str = "ocean";

    pub fn light() -> ColorPalette {
        ColorPalette::from_seed(PaletteSeed {
            primary: MARINE,
            secondary: CERULEAN,
            tertiary: SKY,
            background: Color::from_hex(0xF0F9FF),
            on_background: DEEP,
            surface: Color::WHITE,
            on_surface: DEEP,
            surface_variant: MIST,
            on_surface_variant: NAVY,
            error: Color::from_hex(0xE63946),
            warning: Color::from_hex(0xF4A261),
            success: Color::from_hex(0x2A9D8F),
            info: CERULEAN,
            outline: FOAM,
        })
    }

    pub fn dark() -> ColorPalette {
        ColorPalette::builder(PaletteSeed {
            primary: SKY,
            secondary: CERULEAN,
            tertiary: FOAM,
            background: ABYSS,
            on_background: MIST,
            surface: TRENCH,
            on_surface: Color::from_hex(0xE0F7FF),
            surface_variant: NAVY,
            on_surface_variant: Color::from_hex(0xADE8F4),
            error: Color::from_hex(0xFF6B6B),
            warning: Color::from_hex(0xFFB703),
            success: Color::from_hex(0x52B69A),
            info: SKY,
            outline: MARINE,
        })
        // bright accents need dark foregrounds
        .on_primary(ABYSS)
        .on_tertiary(ABYSS)
        .build()
    }
}

impl Theme for OceanTheme {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Ocean"
    }

    fn description(&self) -> &str {
        "Calm blues from shoreline to trench"
    }

    fn category(&self) -> ThemeCategory {
        ThemeCategory::BrandPersonality
    }

    fn preview_colors(&self) -> PreviewColors {
        smallvec![NAVY, MARINE, CERULEAN, FOAM]
    }

    fn color_palette(&self, scheme: ColorScheme) -> ColorPalette {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

//! Forest theme: moss greens over warm paper tones

use crate::theme::{ColorScheme, PreviewColors, Theme, ThemeCategory};
use crate::tokens::*;
use smallvec::smallvec;
use swatch_core::Color;

pub const PINE: Color = Color::from_hex(0x1B4332);
pub const FERN: Color = Color::from_hex(0x2D6A4F);
pub const MOSS: Color = Color::from_hex(0x40916C);
pub const SAGE: Color = Color::from_hex(0x74C69D);
pub const MINT: Color = Color::from_hex(0xB7E4C7);
pub const BARK: Color = Color::from_hex(0x7F5539);
pub const AMBER: Color = Color::from_hex(0xDDA15E);

#[derive(Clone, Copy, Debug, Default)]
pub struct ForestTheme;

impl ForestTheme {
    pub const ID: &'static str = "forest";

    pub fn light() -> ColorPalette {
        ColorPalette::from_seed(PaletteSeed {
            primary: FERN,
            secondary: MOSS,
            tertiary: BARK,
            background: Color::from_hex(0xF7F5EE),
            on_background: PINE,
            surface: Color::from_hex(0xFFFDF7),
            on_surface: PINE,
            surface_variant: Color::from_hex(0xE9EDC9),
            on_surface_variant: Color::from_hex(0x3A5A40),
            error: Color::from_hex(0xBC4749),
            warning: AMBER,
            success: MOSS,
            info: Color::from_hex(0x457B9D),
            outline: Color::from_hex(0xA3B18A),
        })
    }

    pub fn dark() -> ColorPalette {
        ColorPalette::builder(PaletteSeed {
            primary: SAGE,
            secondary: MINT,
            tertiary: AMBER,
            background: Color::from_hex(0x0B1D13),
            on_background: Color::from_hex(0xE8F3EC),
            surface: Color::from_hex(0x132A1E),
            on_surface: Color::from_hex(0xE8F3EC),
            surface_variant: PINE,
            on_surface_variant: MINT,
            error: Color::from_hex(0xE5989B),
            warning: Color::from_hex(0xE9C46A),
            success: SAGE,
            info: Color::from_hex(0x8ECAE6),
            outline: FERN,
        })
        .on_primary(PINE)
        .on_secondary(PINE)
        .build()
    }
}

impl Theme for ForestTheme {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Forest"
    }

    fn description(&self) -> &str {
        "Grounded greens with a hint of bark"
    }

    fn category(&self) -> ThemeCategory {
        ThemeCategory::BrandPersonality
    }

    fn preview_colors(&self) -> PreviewColors {
        smallvec![PINE, FERN, SAGE, BARK]
    }

    fn color_palette(&self, scheme: ColorScheme) -> ColorPalette {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    fn radii(&self) -> RadiusTokens {
        RadiusTokens {
            radius_md: 10.0,
            radius_lg: 14.0,
            ..RadiusTokens::default()
        }
    }
}

//! Default theme built on the platform system colors
//!
//! Light mode uses the standard system palette, dark mode the
//! brightened dark-appearance variants.

use crate::theme::{ColorScheme, PreviewColors, Theme, ThemeCategory};
use crate::tokens::*;
use smallvec::smallvec;
use swatch_core::Color;

/// System palette (light appearance)
pub mod light {
    use swatch_core::Color;

    pub const BLUE: Color = Color::from_hex(0x007AFF);
    pub const INDIGO: Color = Color::from_hex(0x5856D6);
    pub const PURPLE: Color = Color::from_hex(0xAF52DE);
    pub const RED: Color = Color::from_hex(0xFF3B30);
    pub const ORANGE: Color = Color::from_hex(0xFF9500);
    pub const GREEN: Color = Color::from_hex(0x34C759);
    pub const TEAL: Color = Color::from_hex(0x5AC8FA);

    pub const GROUPED_BACKGROUND: Color = Color::from_hex(0xF2F2F7);
    pub const FILL: Color = Color::from_hex(0xE5E5EA);
    pub const SECONDARY_LABEL: Color = Color::from_hex(0x3C3C43);
    pub const SEPARATOR: Color = Color::from_hex(0xC6C6C8);
}

/// System palette (dark appearance)
pub mod dark {
    use swatch_core::Color;

    pub const BLUE: Color = Color::from_hex(0x0A84FF);
    pub const INDIGO: Color = Color::from_hex(0x5E5CE6);
    pub const PURPLE: Color = Color::from_hex(0xBF5AF2);
    pub const RED: Color = Color::from_hex(0xFF453A);
    pub const ORANGE: Color = Color::from_hex(0xFF9F0A);
    pub const GREEN: Color = Color::from_hex(0x30D158);
    pub const TEAL: Color = Color::from_hex(0x64D2FF);

    pub const GROUPED_BACKGROUND: Color = Color::from_hex(0x1C1C1E);
    pub const FILL: Color = Color::from_hex(0x2C2C2E);
    pub const SECONDARY_LABEL: Color = Color::from_hex(0xEBEBF5);
    pub const SEPARATOR: Color = Color::from_hex(0x38383A);
}

/// The library's default look, registered under the id `"default"`
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTheme;

impl DefaultTheme {
    pub const ID: &'static str = "default";

    /// Light palette
    pub fn light() -> ColorPalette {
        ColorPalette::from_seed(PaletteSeed {
            primary: light::BLUE,
            secondary: light::INDIGO,
            tertiary: light::PURPLE,
            background: Color::WHITE,
            on_background: Color::BLACK,
            surface: light::GROUPED_BACKGROUND,
            on_surface: Color::BLACK,
            surface_variant: light::FILL,
            on_surface_variant: light::SECONDARY_LABEL,
            error: light::RED,
            warning: light::ORANGE,
            success: light::GREEN,
            info: light::TEAL,
            outline: light::SEPARATOR,
        })
    }

    /// Dark palette
    pub fn dark() -> ColorPalette {
        ColorPalette::from_seed(PaletteSeed {
            primary: dark::BLUE,
            secondary: dark::INDIGO,
            tertiary: dark::PURPLE,
            background: Color::BLACK,
            on_background: Color::WHITE,
            surface: dark::GROUPED_BACKGROUND,
            on_surface: Color::WHITE,
            surface_variant: dark::FILL,
            on_surface_variant: dark::SECONDARY_LABEL,
            error: dark::RED,
            warning: dark::ORANGE,
            success: dark::GREEN,
            info: dark::TEAL,
            outline: dark::SEPARATOR,
        })
    }
}

impl Theme for DefaultTheme {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Default"
    }

    fn description(&self) -> &str {
        "System blue accents on neutral grouped surfaces"
    }

    fn category(&self) -> ThemeCategory {
        ThemeCategory::Standard
    }

    fn preview_colors(&self) -> PreviewColors {
        smallvec![light::BLUE, light::INDIGO, light::GREEN, light::ORANGE]
    }

    fn color_palette(&self, scheme: ColorScheme) -> ColorPalette {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

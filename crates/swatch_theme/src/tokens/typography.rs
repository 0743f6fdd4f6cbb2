//! Typography tokens for theming
//!
//! Text styles follow the platform dynamic type ramp. Line heights are
//! derived from the font size rather than stored.

/// Text style keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption,
    Caption2,
}

/// Font weight on the usual 100-900 scale
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// A single step of the type ramp
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub line_height_multiplier: f32,
}

impl TextStyle {
    pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            line_height_multiplier: Self::DEFAULT_LINE_HEIGHT,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_multiplier
    }
}

/// Complete type ramp
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub font_family: String,
    pub large_title: TextStyle,
    pub title: TextStyle,
    pub title2: TextStyle,
    pub title3: TextStyle,
    pub headline: TextStyle,
    pub body: TextStyle,
    pub callout: TextStyle,
    pub subheadline: TextStyle,
    pub footnote: TextStyle,
    pub caption: TextStyle,
    pub caption2: TextStyle,
}

impl TypographyTokens {
    /// Get a text style by token key
    pub fn get(&self, token: TypographyToken) -> TextStyle {
        match token {
            TypographyToken::LargeTitle => self.large_title,
            TypographyToken::Title => self.title,
            TypographyToken::Title2 => self.title2,
            TypographyToken::Title3 => self.title3,
            TypographyToken::Headline => self.headline,
            TypographyToken::Body => self.body,
            TypographyToken::Callout => self.callout,
            TypographyToken::Subheadline => self.subheadline,
            TypographyToken::Footnote => self.footnote,
            TypographyToken::Caption => self.caption,
            TypographyToken::Caption2 => self.caption2,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        use FontWeight::*;

        Self {
            font_family: "system-ui".to_string(),
            large_title: TextStyle::new(34.0, Regular),
            title: TextStyle::new(28.0, Regular),
            title2: TextStyle::new(22.0, Regular),
            title3: TextStyle::new(20.0, Regular),
            headline: TextStyle::new(17.0, Semibold),
            body: TextStyle::new(17.0, Regular),
            callout: TextStyle::new(16.0, Regular),
            subheadline: TextStyle::new(15.0, Regular),
            footnote: TextStyle::new(13.0, Regular),
            caption: TextStyle::new(12.0, Regular),
            caption2: TextStyle::new(11.0, Regular),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_height_derives_from_size() {
        let typography = TypographyTokens::default();
        assert_eq!(typography.get(TypographyToken::Body).line_height(), 17.0 * 1.2);
        assert_eq!(typography.get(TypographyToken::Caption2).line_height(), 11.0 * 1.2);
    }

    #[test]
    fn test_headline_is_semibold_body_size() {
        let typography = TypographyTokens::default();
        let headline = typography.get(TypographyToken::Headline);
        assert_eq!(headline.size, typography.body.size);
        assert_eq!(headline.weight.value(), 600);
    }
}

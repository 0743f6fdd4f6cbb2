//! Border radius tokens for theming

/// Radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Full,
}

/// Complete set of corner radii in points
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub radius_none: f32,
    pub radius_xs: f32,
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_xxl: f32,
    pub radius_full: f32,
}

impl RadiusTokens {
    /// Get a radius value by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.radius_none,
            RadiusToken::Xs => self.radius_xs,
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Xxl => self.radius_xxl,
            RadiusToken::Full => self.radius_full,
        }
    }

    /// Square corners everywhere except `Full` (pills stay pills)
    pub fn sharp() -> Self {
        Self {
            radius_none: 0.0,
            radius_xs: 0.0,
            radius_sm: 2.0,
            radius_md: 4.0,
            radius_lg: 6.0,
            radius_xl: 8.0,
            radius_xxl: 12.0,
            radius_full: 9999.0,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_none: 0.0,
            radius_xs: 2.0,
            radius_sm: 4.0,
            radius_md: 8.0,
            radius_lg: 12.0,
            radius_xl: 16.0,
            radius_xxl: 24.0,
            radius_full: 9999.0,
        }
    }
}

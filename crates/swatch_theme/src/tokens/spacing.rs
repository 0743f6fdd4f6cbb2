//! Spacing tokens for theming
//!
//! A 4pt-based scale used for padding, margins and stack gaps.

/// Spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

/// Complete spacing scale in points
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

impl SpacingTokens {
    /// Get a spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }

    /// Every value multiplied by `factor` (compact / roomy density)
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            xxs: self.xxs * factor,
            xs: self.xs * factor,
            sm: self.sm * factor,
            md: self.md * factor,
            lg: self.lg * factor,
            xl: self.xl * factor,
            xxl: self.xxl * factor,
            xxxl: self.xxxl * factor,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xxs: 2.0,
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
            xxl: 32.0,
            xxxl: 48.0,
        }
    }
}

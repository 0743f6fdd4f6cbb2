//! Opacity tokens for theming

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    Container,
    Disabled,
    Pressed,
    Hover,
}

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub container: f32,
    pub disabled: f32,
    pub pressed: f32,
    pub hover: f32,
}

impl OpacityTokens {
    /// Alpha applied to a base color when deriving its container role
    pub const CONTAINER: f32 = 0.12;

    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Container => self.container,
            OpacityToken::Disabled => self.disabled,
            OpacityToken::Pressed => self.pressed,
            OpacityToken::Hover => self.hover,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            container: Self::CONTAINER,
            disabled: 0.38,
            pressed: 0.16,
            hover: 0.08,
        }
    }
}

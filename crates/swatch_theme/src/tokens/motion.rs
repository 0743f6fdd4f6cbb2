//! Motion tokens for theming
//!
//! Durations, the standard easing curve and the default spring used by
//! component transitions. Themes that target reduced motion return
//! [`MotionTokens::reduced`].

use std::time::Duration;

/// Motion token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum MotionToken {
    Fast,
    Normal,
    Slow,
}

/// Easing curve token, handed to the host's animation system
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)` control points
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Control points of the equivalent CSS `cubic-bezier()`
    pub fn control_points(self) -> [f32; 4] {
        match self {
            Easing::Linear => [0.0, 0.0, 1.0, 1.0],
            Easing::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Easing::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Easing::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            Easing::CubicBezier(x1, y1, x2, y2) => [x1, y1, x2, y2],
        }
    }
}

/// Spring described by perceptual response and damping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Approximate settle time in seconds
    pub response: f32,
    /// 1.0 is critically damped, lower values overshoot
    pub damping_fraction: f32,
}

impl SpringConfig {
    pub const fn smooth() -> Self {
        Self {
            response: 0.5,
            damping_fraction: 1.0,
        }
    }

    pub const fn snappy() -> Self {
        Self {
            response: 0.3,
            damping_fraction: 0.85,
        }
    }

    pub const fn bouncy() -> Self {
        Self {
            response: 0.5,
            damping_fraction: 0.7,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::smooth()
    }
}

/// Complete set of motion tokens
#[derive(Clone, Debug, PartialEq)]
pub struct MotionTokens {
    pub fast: Duration,
    pub normal: Duration,
    pub slow: Duration,
    pub easing: Easing,
    pub spring: SpringConfig,
    pub reduce_motion: bool,
}

impl MotionTokens {
    /// Get a duration by token key
    pub fn duration(&self, token: MotionToken) -> Duration {
        match token {
            MotionToken::Fast => self.fast,
            MotionToken::Normal => self.normal,
            MotionToken::Slow => self.slow,
        }
    }

    /// Instant transitions for reduced-motion contexts
    pub fn reduced() -> Self {
        Self {
            fast: Duration::ZERO,
            normal: Duration::ZERO,
            slow: Duration::ZERO,
            easing: Easing::Linear,
            spring: SpringConfig::smooth(),
            reduce_motion: true,
        }
    }
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            fast: Duration::from_millis(150),
            normal: Duration::from_millis(250),
            slow: Duration::from_millis(400),
            easing: Easing::default(),
            spring: SpringConfig::default(),
            reduce_motion: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_easings_match_css_keywords() {
        assert_eq!(Easing::EaseInOut.control_points(), [0.42, 0.0, 0.58, 1.0]);
        assert_eq!(Easing::Linear.control_points(), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(
            Easing::CubicBezier(0.25, 0.1, 0.25, 1.0).control_points(),
            [0.25, 0.1, 0.25, 1.0]
        );
    }

    #[test]
    fn test_reduced_motion_is_instant() {
        let reduced = MotionTokens::reduced();
        assert!(reduced.reduce_motion);
        assert_eq!(reduced.duration(MotionToken::Slow), Duration::ZERO);
    }

    #[test]
    fn test_default_durations_ordered() {
        let motion = MotionTokens::default();
        assert!(motion.duration(MotionToken::Fast) < motion.duration(MotionToken::Normal));
        assert!(motion.duration(MotionToken::Normal) < motion.duration(MotionToken::Slow));
    }
}

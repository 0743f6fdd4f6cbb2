//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Color palettes
//! - Spacing (margins, padding)
//! - Border radii
//! - Typography (sizes, weights, line heights)
//! - Motion (durations, easings, springs)
//! - Opacity

mod motion;
mod opacity;
mod palette;
mod radius;
mod spacing;
mod typography;

pub use motion::*;
pub use opacity::*;
pub use palette::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;

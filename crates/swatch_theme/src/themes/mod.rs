//! Built-in themes

pub mod default;
pub mod forest;
pub mod high_contrast;
pub mod lavender;
pub mod ocean;
pub mod sunset;

pub use default::DefaultTheme;
pub use forest::ForestTheme;
pub use high_contrast::HighContrastTheme;
pub use lavender::LavenderTheme;
pub use ocean::OceanTheme;
pub use sunset::SunsetTheme;

//! Swatch Core
//!
//! Foundational value types for the Swatch theme system:
//!
//! - **Color**: RGBA values with hex parsing, interpolation and serde support
//! - **Subscribers**: single-threaded change notification for state owners
//!
//! # Example
//!
//! ```rust
//! use swatch_core::Color;
//!
//! let accent = Color::from_hex(0x007AFF);
//! let container = accent.with_alpha(0.12);
//!
//! assert_eq!(accent.to_hex_string(), "#007aff");
//! assert_eq!(Color::parse_hex("#007AFF"), Ok(accent));
//! assert!(container.a < accent.a);
//! ```

pub mod color;
pub mod subscribers;

pub use color::{Color, ParseColorError};
pub use subscribers::{Listener, ListenerId, Subscribers};

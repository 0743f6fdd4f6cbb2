//! Theme error types

use std::path::PathBuf;
use swatch_core::ParseColorError;
use thiserror::Error;

/// Errors raised while loading theme definitions
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The theme file could not be read
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file is not valid TOML or does not match the schema
    #[error("invalid theme file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color value could not be parsed
    #[error("theme {theme:?}: invalid color for {role}: {source}")]
    InvalidColor {
        theme: String,
        role: String,
        #[source]
        source: ParseColorError,
    },

    /// A palette is missing one of the base roles
    #[error("theme {theme:?}: {scheme} palette is missing required role {role:?}")]
    MissingRole {
        theme: String,
        scheme: &'static str,
        role: &'static str,
    },

    /// A palette names a role that does not exist
    #[error("theme {theme:?}: unknown color role {role:?}")]
    UnknownRole { theme: String, role: String },

    /// A theme was declared without an id
    #[error("theme id must not be empty")]
    EmptyId,

    /// Preview swatches must number between three and five
    #[error("theme {theme:?}: expected 3 to 5 preview colors, got {count}")]
    PreviewCount { theme: String, count: usize },

    /// Spacing scale must be finite and positive
    #[error("theme {theme:?}: spacing scale must be a positive number, got {value}")]
    InvalidSpacingScale { theme: String, value: f32 },

    /// Two themes in the same file share an id
    #[error("duplicate theme id {0:?}")]
    DuplicateId(String),
}

/// Result type for theme loading
pub type Result<T> = std::result::Result<T, ThemeError>;

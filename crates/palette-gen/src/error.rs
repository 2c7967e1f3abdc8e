//! Error types for palette generation.
//!
//! Each stage has its own error enum so callers can match on the failure they
//! care about. [`Error`] wraps all of them for the top-level pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Why a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedReason {
    /// The string is not wrapped in `hsl(...)` or `hsla(...)`.
    #[error("expected hsl(...) or hsla(...)")]
    MissingFunction,

    /// The argument list did not split into 3 or 4 components.
    #[error("expected 3 or 4 components, found {0}")]
    ComponentCount(usize),

    /// A component is not a finite number after normalization.
    #[error("{component} '{text}' is not a number")]
    NotANumber {
        component: &'static str,
        text: String,
    },

    /// Saturation, lightness or alpha fell outside `[0, 1]`.
    #[error("{component} {value} is outside 0..=1")]
    OutOfRange { component: &'static str, value: f64 },
}

/// A color string that does not describe an HSL color.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed color '{input}': {reason}")]
pub struct MalformedColorError {
    /// The raw string as it was given to the parser.
    pub input: String,
    pub reason: MalformedReason,
}

impl MalformedColorError {
    pub(crate) fn new(input: &str, reason: MalformedReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Errors raised while turning a palette into declaration lines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmitError {
    #[error("collection '{collection}', step '{step}': {source}")]
    MalformedColor {
        collection: String,
        step: String,
        #[source]
        source: MalformedColorError,
    },
}

/// Errors raised while loading a palette document.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to read palette {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON palette: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML palette: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported palette format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("palette contains no collections")]
    Empty,
}

/// Errors raised while loading generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Errors raised by a [`Sink`](crate::sink::Sink).
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move generated file into {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
}

/// Top-level error for the generation pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result type for palette generation.
pub type Result<T> = std::result::Result<T, Error>;

// src/error.rs

use thiserror::Error;

/// Everything that can stop a timeline run. All variants are fatal.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("unknown energy unit '{0}' (expected GeV or TeV)")]
    UnknownUnit(String),

    #[error("unknown particle type '{0}' (expected e, p or m)")]
    UnknownParticle(String),

    #[error("invalid label location '{0}'")]
    InvalidLabelLocation(String),

    #[error("unsupported output format '{0}' (supported: png, svg)")]
    UnsupportedFormat(String),

    #[error("invalid collider record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error("unknown dataset '{0}' (built-in: current, future1, future2)")]
    UnknownDataset(String),

    #[error("unknown style '{0}' (built-in: style)")]
    UnknownStyle(String),

    #[error("dataset contains no colliders")]
    EmptyDataset,

    #[error("invalid color '{value}': {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("render error: {0}")]
    Render(String),
}

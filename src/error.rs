//! Error types for changelog extraction and configuration loading.

use thiserror::Error;

/// Main error type for release-changelog operations.
///
/// Extraction accessors never surface these to callers: anchor failures are
/// treated as missing structure and skipped. Configuration loading does
/// propagate them.
#[derive(Error, Debug)]
pub enum ChangelogError {
    // Document errors
    #[error("no anchor element found")]
    NoAnchor,

    #[error("expected an anchor element, found <{0}>")]
    NotAnAnchor(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an error for an element that is not an anchor
    pub fn not_an_anchor(tag: impl Into<String>) -> Self {
        Self::NotAnAnchor(tag.into())
    }
}

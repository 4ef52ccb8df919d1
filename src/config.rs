//! Configuration loading and parsing for `release-changelog.toml` files.
//!
//! Every field is optional; missing fields fall back to the values the
//! release controller changelog format has always used.
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path};

use crate::error::{ChangelogError, Result};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "release-changelog.toml";
/// Upper bound on pull requests returned for a single changelog. One payload
/// once listed ~235,000 of them.
pub const DEFAULT_MAX_PULL_REQUESTS: usize = 2500;
/// Domain identifying source control (pull request) links.
pub const DEFAULT_SOURCE_CONTROL_DOMAIN: &str = "github.com";
/// Domains identifying defect tracker links.
pub const DEFAULT_BUG_TRACKER_DOMAINS: [&str; 2] =
    ["bugzilla.redhat.com", "issues.redhat.com"];

/// Tunables for the changelog extractor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct ExtractorConfig {
    /// Maximum number of pull requests returned per changelog.
    pub max_pull_requests: usize,
    /// An href containing this marks the pull request link.
    pub source_control_domain: String,
    /// An href containing any of these marks the bug link.
    pub bug_tracker_domains: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_pull_requests: DEFAULT_MAX_PULL_REQUESTS,
            source_control_domain: DEFAULT_SOURCE_CONTROL_DOMAIN.into(),
            bug_tracker_domains: DEFAULT_BUG_TRACKER_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl ExtractorConfig {
    /// Parse and validate configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ExtractorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// * `Ok(Some(config))` - file was found and is valid
    /// * `Ok(None)` - file does not exist
    /// * `Err(_)` - file could not be read or is invalid
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_pull_requests == 0 {
            return Err(ChangelogError::invalid_config(
                "max_pull_requests must be greater than 0",
            ));
        }

        if self.source_control_domain.trim().is_empty() {
            return Err(ChangelogError::invalid_config(
                "source_control_domain must not be empty",
            ));
        }

        if self.bug_tracker_domains.iter().any(|d| d.trim().is_empty()) {
            return Err(ChangelogError::invalid_config(
                "bug_tracker_domains must not contain empty entries",
            ));
        }

        Ok(())
    }
}

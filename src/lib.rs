//! Extracts structured release metadata from the HTML changelog pages
//! rendered by the release controller.
//!
//! ```rust
//! use release_changelog::Changelog;
//!
//! let html = r#"<h3>Components</h3><ul><li>Kubernetes 1.29.2</li></ul>"#;
//! let changelog = Changelog::new("4.16.0", html);
//!
//! assert_eq!(changelog.kubernetes_version().as_deref(), Some("1.29.2"));
//! assert!(changelog.previous_release_tag().is_none());
//! ```
pub mod changelog;
pub mod config;
pub mod document;
pub mod error;

pub use changelog::{
    Changelog, PullRequestReport,
    types::{
        CoreOsVersion, PullRequest, ReleaseMetadata, Repository, VersionLink,
    },
    warning::Warning,
};
pub use config::ExtractorConfig;
pub use error::{ChangelogError, Result};

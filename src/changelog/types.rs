//! Records extracted from a release changelog.
use serde::Serialize;

/// A component version together with the page it links to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionLink {
    /// Version string as displayed in the changelog.
    pub version: String,
    /// Link to the version's release page, empty when the anchor had no href.
    pub url: String,
}

/// CoreOS version recorded in the "Components" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoreOsVersion {
    /// The release ships a single CoreOS version.
    Current(VersionLink),
    /// The release upgraded CoreOS from a previous version.
    Upgraded {
        previous: VersionLink,
        current: VersionLink,
        /// Link comparing the two versions.
        diff_url: String,
    },
}

impl CoreOsVersion {
    /// The version shipped with this release regardless of upgrade.
    pub fn current(&self) -> &VersionLink {
        match self {
            CoreOsVersion::Current(current) => current,
            CoreOsVersion::Upgraded { current, .. } => current,
        }
    }
}

/// Source repository included in a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Repository (image) name.
    pub name: String,
    /// Link to the head commit built into the release.
    pub head: String,
    /// "Full changelog" comparison link, if the section has one.
    pub diff_url: Option<String>,
}

/// Merged pull request referenced by a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    /// Name of the repository section the pull request is listed under.
    pub name: String,
    pub description: String,
    /// Source control link to the pull request, empty when none was found.
    pub url: String,
    /// Pull request number without its leading `#`.
    pub pull_request_id: String,
    /// Linked defect tracker issue.
    pub bug_url: Option<String>,
}

/// Everything the extractor knows about one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseMetadata {
    pub release_tag: String,
    pub previous_release_tag: Option<String>,
    pub coreos: Option<CoreOsVersion>,
    pub kubernetes: Option<String>,
    pub repositories: Option<Vec<Repository>>,
    pub pull_requests: Option<Vec<PullRequest>>,
}

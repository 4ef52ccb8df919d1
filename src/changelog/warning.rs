//! Non-fatal anomalies found while extracting a changelog.
use serde::Serialize;
use std::fmt::Display;

/// Data-integrity anomaly. Extraction continues with a defined fallback for
/// each kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A pull request with the same (repository, url) key was already seen.
    /// The later entry is dropped. The release controller has listed the
    /// same pull request for both upstream and a fork.
    DuplicatePullRequest {
        release_tag: String,
        name: String,
        url: String,
    },
    /// More pull requests than the configured limit. The rest are dropped.
    TooManyPullRequests {
        release_tag: String,
        found: usize,
        limit: usize,
    },
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::DuplicatePullRequest {
                release_tag,
                name,
                url,
            } => {
                write!(f, "duplicate PR in {release_tag:?}: {url:?}, {name:?}")
            }
            Warning::TooManyPullRequests {
                release_tag,
                found,
                limit,
            } => write!(
                f,
                "{release_tag:?} had {found} PRs, more than the limit of \
                 {limit}: ignoring the rest"
            ),
        }
    }
}

use log::*;
use serde::Serialize;
use std::collections::HashSet;

use crate::{
    changelog::{Changelog, types::PullRequest, warning::Warning},
    document::{Node, extract_anchor},
};

/// Pull requests extracted from a changelog along with the anomalies found
/// while collecting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestReport {
    /// Unique pull requests in first-seen order, capped at the configured
    /// limit.
    pub pull_requests: Vec<PullRequest>,
    pub warnings: Vec<Warning>,
}

/// Uniqueness key for a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PullRequestLocator {
    name: String,
    url: String,
}

impl From<&PullRequest> for PullRequestLocator {
    fn from(pr: &PullRequest) -> Self {
        Self {
            name: pr.name.clone(),
            url: pr.url.clone(),
        }
    }
}

impl Changelog {
    /// Unique pull requests merged into the release. Warnings are written to
    /// the log.
    ///
    /// Returns `None` when the page has no `h3` sections at all.
    pub fn pull_requests(&self) -> Option<Vec<PullRequest>> {
        let report = self.pull_request_report()?;

        for warning in report.warnings.iter() {
            warn!("{warning}");
        }

        Some(report.pull_requests)
    }

    /// Same as [`Changelog::pull_requests`] but returns warnings to the
    /// caller instead of logging them.
    pub fn pull_request_report(&self) -> Option<PullRequestReport> {
        let sections = self.repository_sections()?;

        let mut seen = HashSet::new();
        let mut report = PullRequestReport::default();

        for section in sections.iter() {
            for item in section.items.iter() {
                let Some(pr) =
                    self.parse_pull_request(&section.anchor.text, item)
                else {
                    continue;
                };

                // the same PR may be listed for upstream and its fork
                if !seen.insert(PullRequestLocator::from(&pr)) {
                    report.warnings.push(Warning::DuplicatePullRequest {
                        release_tag: self.release_tag.clone(),
                        name: pr.name,
                        url: pr.url,
                    });
                    continue;
                }

                report.pull_requests.push(pr);
            }
        }

        let limit = self.config.max_pull_requests;
        let found = report.pull_requests.len();

        if found > limit {
            report.warnings.push(Warning::TooManyPullRequests {
                release_tag: self.release_tag.clone(),
                found,
                limit,
            });
            report.pull_requests.truncate(limit);
        }

        Some(report)
    }

    /// Build a pull request from one list item. `None` when the item has no
    /// text of its own.
    fn parse_pull_request(
        &self,
        name: &str,
        item: &Node<'_>,
    ) -> Option<PullRequest> {
        let text = item.text();

        if text.is_empty() {
            return None;
        }

        let mut pr = PullRequest {
            name: name.to_string(),
            description: text
                .strip_prefix(": ")
                .unwrap_or(text)
                .trim()
                .to_string(),
            ..PullRequest::default()
        };

        for anchor in item.find_all("a") {
            let Ok(anchor) = extract_anchor(Some(anchor)) else {
                continue;
            };

            if anchor.href.contains(&self.config.source_control_domain) {
                pr.pull_request_id =
                    anchor.text.trim_start_matches('#').to_string();
                pr.url = anchor.href.clone();
            }

            if self
                .config
                .bug_tracker_domains
                .iter()
                .any(|domain| anchor.href.contains(domain.as_str()))
            {
                pr.bug_url = Some(anchor.href);
            }
        }

        Some(pr)
    }
}

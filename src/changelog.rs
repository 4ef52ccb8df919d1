//! Structured extraction of release controller changelog pages.
//!
//! The release controller only delivers changelog data as rendered HTML. The
//! page layout is a convention rather than a schema, so every accessor treats
//! missing headings, lists or links as absent data instead of an error.
//!
//! The structure relied upon:
//!
//! ```html
//! <h2>Changes from <a href="...">4.16.0</a></h2>
//! <h3>Components</h3>
//! <ul>
//!   <li>Kubernetes 1.29.2</li>
//!   <li>CoreOS upgraded from <a>..</a> to <a>..</a> (<a>diff</a>)</li>
//! </ul>
//! <h3><a href="https://github.com/openshift/api/tree/abc">api</a></h3>
//! <ul>
//!   <li><a href="https://github.com/openshift/api/pull/1">#1</a>: Fix it <a href="https://issues.redhat.com/browse/OCPBUGS-1">OCPBUGS-1</a></li>
//!   <li><a href="...">Full changelog</a></li>
//! </ul>
//! ```
use log::*;

use crate::{
    config::ExtractorConfig,
    document::{Anchor, Document, Node, extract_anchor},
};

mod pull_requests;
mod repositories;
pub mod types;
pub mod warning;

pub use pull_requests::PullRequestReport;

use types::{CoreOsVersion, ReleaseMetadata, VersionLink};

/// Heading text of the section listing component versions.
const COMPONENTS_HEADING: &str = "Components";
/// Marker in the `h2` heading naming the previous release.
const CHANGES_FROM: &str = "Changes from";
/// Marker in a component item when its version changed.
const UPGRADED_FROM: &str = "upgraded from";

/// Changelog for a single release, parsed once and queried through
/// read-only accessors.
#[derive(Debug)]
pub struct Changelog {
    release_tag: String,
    config: ExtractorConfig,
    document: Document,
}

/// One repository section: an `h3` heading anchor followed by a list.
struct Section<'a> {
    anchor: Anchor,
    list: Node<'a>,
    items: Vec<Node<'a>>,
}

impl Changelog {
    /// Parse the changelog HTML for `release_tag` with default settings.
    pub fn new(release_tag: impl Into<String>, html: &str) -> Self {
        Self::with_config(release_tag, html, ExtractorConfig::default())
    }

    /// Parse the changelog HTML for `release_tag` with custom settings.
    pub fn with_config(
        release_tag: impl Into<String>,
        html: &str,
        config: ExtractorConfig,
    ) -> Self {
        Self {
            release_tag: release_tag.into(),
            config,
            document: Document::parse(html),
        }
    }

    pub fn release_tag(&self) -> &str {
        &self.release_tag
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Tag of the release this changelog was diffed against. `None` for
    /// first releases.
    pub fn previous_release_tag(&self) -> Option<String> {
        self.document
            .root()
            .find_all("h2")
            .into_iter()
            .filter(|heading| heading.text().contains(CHANGES_FROM))
            .find_map(|heading| extract_anchor(heading.find("a")).ok())
            .map(|anchor| anchor.text)
            .filter(|tag| !tag.is_empty())
    }

    /// CoreOS version, or the upgrade it went through in this release.
    ///
    /// An upgrade needs exactly three links (previous, current, diff); any
    /// other count yields `None` since a partial match can't be trusted.
    pub fn coreos_version(&self) -> Option<CoreOsVersion> {
        let component = self.extract_component("CoreOS")?;

        if !component.text().contains(UPGRADED_FROM) {
            let current = extract_anchor(component.find("a")).ok()?;
            return Some(CoreOsVersion::Current(version_link(current)));
        }

        let anchors = component.find_all("a");
        if anchors.len() != 3 {
            debug!(
                "{}: expected 3 links in CoreOS upgrade, found {}",
                self.release_tag,
                anchors.len()
            );
            return None;
        }

        let previous = extract_anchor(Some(anchors[0])).ok()?;
        let current = extract_anchor(Some(anchors[1])).ok()?;
        let diff = extract_anchor(Some(anchors[2])).ok()?;

        Some(CoreOsVersion::Upgraded {
            previous: version_link(previous),
            current: version_link(current),
            diff_url: diff.href,
        })
    }

    /// Kubernetes version, listed as plain text ("Kubernetes 1.29.2").
    pub fn kubernetes_version(&self) -> Option<String> {
        let component = self.extract_component("Kubernetes")?;
        let parts = component.text().split_whitespace().collect::<Vec<&str>>();

        if parts.len() > 1 {
            return parts.last().map(|v| v.to_string());
        }

        None
    }

    /// Run every accessor and collect the results.
    pub fn metadata(&self) -> ReleaseMetadata {
        ReleaseMetadata {
            release_tag: self.release_tag.clone(),
            previous_release_tag: self.previous_release_tag(),
            coreos: self.coreos_version(),
            kubernetes: self.kubernetes_version(),
            repositories: self.repositories(),
            pull_requests: self.pull_requests(),
        }
    }

    /// First item of the "Components" list whose text mentions `name`.
    fn extract_component(&self, name: &str) -> Option<Node<'_>> {
        let heading = self
            .document
            .root()
            .find_all("h3")
            .into_iter()
            .find(|section| section.text().trim() == COMPONENTS_HEADING)?;

        heading
            .next_element_sibling()?
            .find_all("li")
            .into_iter()
            .find(|component| component.text().contains(name))
    }

    /// Repository sections with a heading link and a non-empty list. `None`
    /// when the page has no `h3` headings at all.
    fn repository_sections(&self) -> Option<Vec<Section<'_>>> {
        let headings = self.document.root().find_all("h3");

        if headings.is_empty() {
            return None;
        }

        let mut sections = vec![];

        for heading in headings {
            let Ok(anchor) = extract_anchor(heading.find("a")) else {
                continue;
            };

            let Some(list) = heading.next_element_sibling() else {
                debug!(
                    "{}: no list follows section {}",
                    self.release_tag, anchor.text
                );
                continue;
            };

            let items = list.find_all("li");
            if items.is_empty() {
                debug!(
                    "{}: section {} has no items",
                    self.release_tag, anchor.text
                );
                continue;
            }

            sections.push(Section {
                anchor,
                list,
                items,
            });
        }

        Some(sections)
    }
}

fn version_link(anchor: Anchor) -> VersionLink {
    VersionLink {
        version: anchor.text,
        url: anchor.href,
    }
}

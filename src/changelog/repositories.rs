use crate::{
    changelog::{Changelog, types::Repository},
    document::extract_anchor,
};

/// Text of the link comparing a repository's previous and current heads.
const FULL_CHANGELOG: &str = "Full changelog";

impl Changelog {
    /// Source repositories included in the release, one per section.
    ///
    /// Returns `None` when the page has no `h3` sections at all, and an empty
    /// list when sections exist but none describe a repository.
    pub fn repositories(&self) -> Option<Vec<Repository>> {
        let sections = self.repository_sections()?;

        let repositories = sections
            .into_iter()
            .map(|section| {
                // last matching link wins
                let diff_url = section
                    .list
                    .find_all("a")
                    .into_iter()
                    .filter_map(|a| extract_anchor(Some(a)).ok())
                    .filter(|a| a.text.contains(FULL_CHANGELOG))
                    .next_back()
                    .map(|a| a.href);

                Repository {
                    name: section.anchor.text,
                    head: section.anchor.href,
                    diff_url,
                }
            })
            .collect();

        Some(repositories)
    }
}

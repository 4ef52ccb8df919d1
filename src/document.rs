//! Navigable HTML document tree used by the changelog extractor.
//!
//! This is the only module that knows about the underlying HTML parser
//! (`scraper`, which uses html5ever and tolerates malformed markup). The
//! extractor depends on the five primitives exposed by [`Node`]: find all
//! descendants by tag, find the first descendant by tag, next sibling
//! element, attributes and visible text.

use scraper::{ElementRef, Html};

use crate::error::{ChangelogError, Result};

/// A parsed HTML document.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw HTML. Parsing never fails, malformed markup is repaired by
    /// the parser.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Root element of the document (`<html>`).
    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
        }
    }
}

/// Element within a parsed [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// Lowercase tag name of this element.
    pub fn tag(&self) -> &'a str {
        self.element.value().name()
    }

    /// All descendant elements with the given tag, in document order. The
    /// element itself is never included.
    pub fn find_all(&self, tag: &str) -> Vec<Node<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == tag)
            .map(|element| Node { element })
            .collect()
    }

    /// First descendant element with the given tag.
    pub fn find(&self, tag: &str) -> Option<Node<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == tag)
            .map(|element| Node { element })
    }

    /// Next sibling that is an element, skipping text and comment nodes.
    pub fn next_element_sibling(&self) -> Option<Node<'a>> {
        self.element
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(|element| Node { element })
    }

    /// Value of a single attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// All attributes as (name, value) pairs.
    pub fn attrs(&self) -> Vec<(&'a str, &'a str)> {
        self.element.value().attrs().collect()
    }

    /// Visible text of the element: its first direct text child that is not
    /// blank. Text belonging to nested elements is not included, so for
    /// `<li><a>#12</a>: Fix it</li>` this is `": Fix it"`. Empty when the
    /// element has no text of its own.
    pub fn text(&self) -> &'a str {
        self.element
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .find(|text| !text.trim().is_empty())
            .unwrap_or_default()
    }
}

/// Hyperlink recovered from an `<a>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    /// Value of the `href` attribute, empty when missing.
    pub href: String,
    /// Visible text of the anchor, trimmed.
    pub text: String,
}

/// Recover the href and text of an anchor element.
///
/// Takes the result of a lookup directly so a failed lookup becomes
/// [`ChangelogError::NoAnchor`]. Callers are expected to skip the anchor on
/// error rather than propagate it.
pub fn extract_anchor(anchor: Option<Node<'_>>) -> Result<Anchor> {
    let anchor = anchor.ok_or(ChangelogError::NoAnchor)?;

    if anchor.tag() != "a" {
        return Err(ChangelogError::not_an_anchor(anchor.tag()));
    }

    Ok(Anchor {
        href: anchor.attr("href").unwrap_or_default().to_string(),
        text: anchor.text().trim().to_string(),
    })
}

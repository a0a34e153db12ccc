// src/extractors/boundary.rs
//! Resolves section names to the last tagged paragraph before their heading.

use crate::document::{self, Document, NodeKind};
use crate::extractors::matcher::{MatchConfig, TextMatch, TextMatcher};
use crate::extractors::tagger::ID_ATTRIBUTE;
use crate::review::ParagraphId;
use markup5ever_rcdom::Handle;
use serde::Serialize;

/// Where a section starts, expressed as the paragraph just before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBoundary {
    /// Section name that was matched (or the names searched for, if none).
    pub section: String,
    /// Heading text that matched, if any.
    pub heading: Option<String>,
    /// Last tagged paragraph preceding the heading.
    pub anchor: Option<ParagraphId>,
}

impl SectionBoundary {
    fn unmatched(section: String) -> Self {
        Self { section, heading: None, anchor: None }
    }
}

pub struct BoundaryLocator {
    matcher: TextMatcher,
}

impl BoundaryLocator {
    pub fn new(config: MatchConfig) -> Self {
        Self { matcher: TextMatcher::new(config) }
    }

    /// Boundary for a single section name, e.g. "references".
    pub fn locate(&self, doc: &Document, section: &str) -> SectionBoundary {
        self.locate_any(doc, &[section])
    }

    /// Boundary for whichever of `sections` has the first heading-like
    /// match in document order. Only that first match is considered; a later,
    /// "better" heading for the same section is never looked at.
    pub fn locate_any<S: AsRef<str>>(&self, doc: &Document, sections: &[S]) -> SectionBoundary {
        let label = sections
            .iter()
            .map(AsRef::<str>::as_ref)
            .collect::<Vec<_>>()
            .join("/");

        let Some(found) = self.matcher.find_containing(doc, sections) else {
            tracing::debug!("No heading-like text found for '{}'", label);
            return SectionBoundary::unmatched(label);
        };

        let section = self.matched_section(&found, sections).unwrap_or(label);
        let anchor = paragraph_before(doc, &found);
        match &anchor {
            Some(id) => tracing::debug!("Section '{}' ('{}') starts after {}", section, found.text, id),
            None => tracing::debug!("Section '{}' ('{}') has no tagged paragraph before it", section, found.text),
        }

        SectionBoundary {
            section,
            heading: Some(found.text),
            anchor,
        }
    }

    fn matched_section<S: AsRef<str>>(&self, found: &TextMatch, sections: &[S]) -> Option<String> {
        let case_sensitive = self.matcher.config().case_sensitive;
        let fold = |s: &str| if case_sensitive { s.to_string() } else { s.to_lowercase() };
        let text = fold(&found.text);
        sections
            .iter()
            .map(AsRef::<str>::as_ref)
            .find(|s| text.contains(&fold(*s)))
            .map(str::to_string)
    }
}

impl Default for BoundaryLocator {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

/// Walks up from the matched text to the nearest paragraph or heading, so
/// that inline wrappers like `<h2><strong>References</strong></h2>` resolve
/// to the heading itself.
fn structural_container(found: &TextMatch) -> Option<Handle> {
    let mut current = found.container();
    while let Some(node) = current {
        if NodeKind::of(&node).is_structural() {
            return Some(node);
        }
        current = document::parent(&node);
    }
    None
}

fn paragraph_before(doc: &Document, found: &TextMatch) -> Option<ParagraphId> {
    let container = structural_container(found)?;
    let sequence = doc.structural_sequence();

    // By identity: the same heading text may recur elsewhere
    let index = sequence.iter().position(|n| document::same_node(n, &container))?;
    if index == 0 {
        return None;
    }

    sequence[..index]
        .iter()
        .rev()
        .filter(|n| NodeKind::of(n) == NodeKind::Paragraph)
        .find_map(|n| document::attr(n, ID_ATTRIBUTE).filter(|id| !id.is_empty()))
        .map(ParagraphId::from)
}

// src/extractors/matcher.rs
//! Finds short, heading-like text in a document.
//!
//! The length bound is what separates a heading label ("References",
//! "2. Introduction") from body prose that happens to mention the same word.

use crate::document::{self, Document};
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};

/// Heading texts must be strictly shorter than this many characters.
pub const DEFAULT_MAX_HEADING_LENGTH: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub max_heading_length: usize,
    pub case_sensitive: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_heading_length: DEFAULT_MAX_HEADING_LENGTH,
            case_sensitive: false,
        }
    }
}

/// A text node that satisfied the matcher.
#[derive(Debug, Clone)]
pub struct TextMatch {
    /// Normalized text as the predicate saw it (before case folding).
    pub text: String,
    pub node: Handle,
}

impl TextMatch {
    /// The element directly containing the matched text.
    pub fn container(&self) -> Option<Handle> {
        document::parent(&self.node)
    }
}

pub struct TextMatcher {
    config: MatchConfig,
}

impl TextMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Scans every text node in document order and returns the first whose
    /// normalized text is short enough and satisfies `predicate`. The
    /// predicate receives the text case-folded unless matching is
    /// case-sensitive.
    pub fn find_first<F>(&self, doc: &Document, predicate: F) -> Option<TextMatch>
    where
        F: Fn(&str) -> bool,
    {
        for node in doc.nodes() {
            let Some(raw) = document::text_of(&node) else {
                continue;
            };
            let text = document::normalize_text(&raw);
            if text.is_empty() || text.chars().count() >= self.config.max_heading_length {
                continue;
            }

            let candidate = self.fold(&text);
            if predicate(&candidate) {
                tracing::trace!("Heading-like text matched: '{}'", text);
                return Some(TextMatch { text, node });
            }
        }
        None
    }

    /// First heading-like text containing any of `needles`.
    pub fn find_containing<S: AsRef<str>>(&self, doc: &Document, needles: &[S]) -> Option<TextMatch> {
        let needles: Vec<String> = needles.iter().map(|n| self.fold(n.as_ref())).collect();
        self.find_first(doc, |text| needles.iter().any(|n| text.contains(n.as_str())))
    }

    fn fold(&self, text: &str) -> String {
        if self.config.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        }
    }
}

impl Default for TextMatcher {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

// src/review/mod.rs
//! Paragraph records and the review set handed to downstream reviewers.

pub mod filter;
pub mod slice;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier stamped on a paragraph: `p_1`, `p_2`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParagraphId(String);

impl ParagraphId {
    /// Id for the `ordinal`-th paragraph (1-based).
    pub fn from_ordinal(ordinal: usize) -> Self {
        Self(format!("p_{}", ordinal))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParagraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParagraphId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ParagraphId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ParagraphId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ParagraphId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One paragraph as seen by the reviewer. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    pub id: ParagraphId,
    // Absent in hand-written input: treat as empty
    #[serde(default)]
    pub text: String,
}

impl ParagraphRecord {
    pub fn new(id: impl Into<ParagraphId>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Ordered paragraphs to review, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSet {
    #[serde(default)]
    pub paragraphs_to_review: Vec<ParagraphRecord>,
}

impl ReviewSet {
    pub fn new(paragraphs: Vec<ParagraphRecord>) -> Self {
        Self { paragraphs_to_review: paragraphs }
    }

    pub fn len(&self) -> usize {
        self.paragraphs_to_review.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs_to_review.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParagraphRecord> {
        self.paragraphs_to_review.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.iter().map(|p| p.id.as_str()).collect()
    }

    /// Index of the first record with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.iter().position(|p| p.id == id)
    }
}

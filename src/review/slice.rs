// src/review/slice.rs
//! Boundary-based trimming of a review set.
//!
//! Every operation is total: an id that is not in the set leaves the set
//! unchanged rather than discarding data on an uncertain match.

use super::ReviewSet;

impl ReviewSet {
    /// Keeps the prefix ending at (and including) `id`.
    pub fn keep_through(mut self, id: &str) -> Self {
        match self.position(id) {
            Some(index) => {
                self.paragraphs_to_review.truncate(index + 1);
                tracing::debug!("Kept {} paragraphs through {}", self.len(), id);
            }
            None => tracing::debug!("Paragraph {} not in review set, nothing trimmed", id),
        }
        self
    }

    /// Keeps the suffix starting at (and including) `id`.
    pub fn keep_from(mut self, id: &str) -> Self {
        match self.position(id) {
            Some(index) => {
                self.paragraphs_to_review.drain(..index);
                tracing::debug!("Kept {} paragraphs from {}", self.len(), id);
            }
            None => tracing::debug!("Paragraph {} not in review set, nothing trimmed", id),
        }
        self
    }

    /// Keeps the suffix strictly after `id`.
    pub fn keep_after(mut self, id: &str) -> Self {
        match self.position(id) {
            Some(index) => {
                self.paragraphs_to_review.drain(..=index);
                tracing::debug!("Kept {} paragraphs after {}", self.len(), id);
            }
            None => tracing::debug!("Paragraph {} not in review set, nothing trimmed", id),
        }
        self
    }
}

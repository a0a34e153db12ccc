// src/review/filter.rs
//! Minimum-length filtering of review records.

use super::ReviewSet;

/// Conventional threshold for "likely not reviewable" paragraphs.
pub const DEFAULT_MIN_LENGTH: usize = 50;
/// Stricter threshold used when only substantial paragraphs should remain.
pub const STRICT_MIN_LENGTH: usize = 100;

impl ReviewSet {
    /// Drops records whose text is shorter than `min_length` characters.
    pub fn retain_min_length(mut self, min_length: usize) -> Self {
        let before = self.len();
        self.paragraphs_to_review.retain(|p| p.char_len() >= min_length);
        tracing::debug!(
            "Length filter (min {}): kept {} of {} paragraphs",
            min_length,
            self.len(),
            before
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ParagraphRecord;
    use proptest::prelude::*;

    fn sample_set() -> ReviewSet {
        ReviewSet::new(vec![
            ParagraphRecord::new("p_1", "Short"),
            ParagraphRecord::new("p_2", "This is a medium length paragraph with enough content"),
            ParagraphRecord::new("p_3", ""),
            ParagraphRecord::new(
                "p_4",
                "This is a very long paragraph that definitely exceeds the minimum length requirement for inclusion in the review",
            ),
            ParagraphRecord::new("p_5", "Medium"),
        ])
    }

    #[test]
    fn test_default_length() {
        let result = sample_set().retain_min_length(DEFAULT_MIN_LENGTH);
        assert_eq!(result.ids(), vec!["p_2", "p_4"]);
    }

    #[test]
    fn test_strict_length() {
        let result = sample_set().retain_min_length(STRICT_MIN_LENGTH);
        assert_eq!(result.ids(), vec!["p_4"]);
    }

    #[test]
    fn test_custom_length() {
        assert_eq!(sample_set().retain_min_length(10).ids(), vec!["p_2", "p_4"]);
    }

    #[test]
    fn test_zero_keeps_everything() {
        assert_eq!(sample_set().retain_min_length(0).len(), 5);
    }

    #[test]
    fn test_very_high_removes_everything() {
        assert!(sample_set().retain_min_length(200).is_empty());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let set = ReviewSet::new(vec![ParagraphRecord::new("p_1", "x".repeat(50))]);
        assert_eq!(set.retain_min_length(50).len(), 1);
    }

    #[test]
    fn test_missing_text_is_treated_as_empty() {
        let set: ReviewSet = serde_json::from_str(
            r#"{"paragraphs_to_review":[
                {"id":"p_1"},
                {"id":"p_2","text":"This paragraph has text and should be kept if long enough"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(set.retain_min_length(10).ids(), vec!["p_2"]);
    }

    #[test]
    fn test_empty_set() {
        assert!(ReviewSet::default().retain_min_length(DEFAULT_MIN_LENGTH).is_empty());
    }

    proptest! {
        #[test]
        fn prop_filter_at_lower_threshold_is_noop(
            texts in proptest::collection::vec(".{0,120}", 0..20),
            t in 0usize..120,
            extra in 0usize..60,
        ) {
            let set = ReviewSet::new(
                texts
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| ParagraphRecord::new(format!("p_{}", i + 1), text))
                    .collect(),
            );
            let stricter = set.retain_min_length(t + extra);
            prop_assert_eq!(stricter.clone().retain_min_length(t), stricter);
        }
    }
}

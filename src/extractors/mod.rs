// src/extractors/mod.rs
pub mod boundary;
pub mod matcher;
pub mod paragraphs;
pub mod tagger;

// Re-export key extraction types for convenience
pub use boundary::{BoundaryLocator, SectionBoundary};
pub use matcher::{MatchConfig, TextMatch, TextMatcher};
pub use paragraphs::extract_paragraphs;
pub use tagger::tag_paragraphs;

// src/lib.rs
//! Prepares converted manuscript HTML for editorial review: stamps paragraph
//! ids, locates section boundaries by heading text, trims front and back
//! matter and drops paragraphs too short to review.

pub mod batch;
pub mod config;
pub mod document;
pub mod extractors;
pub mod pipeline;
pub mod review;
pub mod storage;
pub mod utils;

pub use config::PipelineConfig;
pub use document::Document;
pub use pipeline::{PipelineReport, ReviewPipeline};
pub use review::{ParagraphId, ParagraphRecord, ReviewSet};
pub use utils::AppError;

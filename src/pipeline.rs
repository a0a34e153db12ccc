// src/pipeline.rs
//! Tag -> extract -> locate boundaries -> slice -> filter.

use crate::config::PipelineConfig;
use crate::document::Document;
use crate::extractors::{extract_paragraphs, tag_paragraphs, BoundaryLocator, SectionBoundary};
use crate::review::ReviewSet;
use crate::utils::error::DocumentError;
use serde::Serialize;

/// Outcome of one document run: the review set plus what it took to get there.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub review_set: ReviewSet,
    /// Paragraphs found and tagged in the document.
    pub total_paragraphs: usize,
    /// Records left after slicing, before the length filter.
    pub before_filter: usize,
    /// Front boundary that was applied, if any.
    pub front: Option<SectionBoundary>,
    /// Back boundary that was applied, if any.
    pub back: Option<SectionBoundary>,
    /// Every lookup made, in order, including misses.
    pub lookups: Vec<SectionBoundary>,
}

impl PipelineReport {
    /// Ids of the boundary paragraphs, labeled "front" / "back".
    pub fn boundary_anchors(&self) -> Vec<(&str, &str)> {
        [("front", &self.front), ("back", &self.back)]
            .into_iter()
            .filter_map(|(kind, boundary)| {
                let id = boundary.as_ref()?.anchor.as_ref()?;
                Some((kind, id.as_str()))
            })
            .collect()
    }
}

pub struct ReviewPipeline {
    config: PipelineConfig,
    locator: BoundaryLocator,
}

impl ReviewPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let locator = BoundaryLocator::new(config.matcher.clone());
        Self { config, locator }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Parses `html` and runs the whole pipeline on it.
    pub fn run(&self, html: &str) -> Result<PipelineReport, DocumentError> {
        let mut doc = Document::parse(html);
        self.process(&mut doc)
    }

    /// Runs the pipeline on an already parsed document, tagging it in place.
    pub fn process(&self, doc: &mut Document) -> Result<PipelineReport, DocumentError> {
        let total_paragraphs = tag_paragraphs(doc)?;
        let mut review_set = extract_paragraphs(doc)?;
        let mut lookups = Vec::new();

        // Front matter: first section (in configured order) that resolves
        let mut front = None;
        for section in &self.config.front_sections {
            let boundary = self.locator.locate(doc, section);
            lookups.push(boundary.clone());
            if boundary.anchor.is_some() {
                front = Some(boundary);
                break;
            }
        }

        // Back matter: first matching heading in document order
        let back = if self.config.back_sections.is_empty() {
            None
        } else {
            let boundary = self.locator.locate_any(doc, self.config.back_sections.as_slice());
            lookups.push(boundary.clone());
            Some(boundary).filter(|b| b.anchor.is_some())
        };

        // The anchor is the paragraph *before* the section heading
        if let Some(id) = front.as_ref().and_then(|b| b.anchor.as_ref()) {
            tracing::info!("Trimming front matter through {}", id);
            review_set = review_set.keep_after(id.as_str());
        }
        if let Some(id) = back.as_ref().and_then(|b| b.anchor.as_ref()) {
            tracing::info!("Trimming back matter after {}", id);
            review_set = review_set.keep_through(id.as_str());
        }

        let before_filter = review_set.len();
        let review_set = review_set.retain_min_length(self.config.min_length);

        tracing::info!(
            "Review set ready: {} of {} paragraphs ({} before length filter)",
            review_set.len(),
            total_paragraphs,
            before_filter
        );

        Ok(PipelineReport {
            review_set,
            total_paragraphs,
            before_filter,
            front,
            back,
            lookups,
        })
    }
}

impl Default for ReviewPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

// src/batch.rs
//! Runs the pipeline over many files, one document per blocking task.

use crate::config::PipelineConfig;
use crate::document::Document;
use crate::pipeline::ReviewPipeline;
use crate::storage::StorageManager;
use crate::utils::error::AppError;
use crate::utils::html_debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Processes a single HTML file and writes its review set, metadata and
/// (optionally) a debug rendering. Returns the review set path.
pub fn process_file(
    input: &Path,
    config: &PipelineConfig,
    storage: &StorageManager,
    debug: bool,
) -> Result<PathBuf, AppError> {
    tracing::info!("Processing {}", input.display());
    let html = std::fs::read_to_string(input)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Config(format!("Input path has no file name: {}", input.display())))?;

    let pipeline = ReviewPipeline::new(config.clone());
    let mut doc = Document::parse(&html);
    let report = pipeline.process(&mut doc)?;

    let output = storage.save_review_set(&stem, &report.review_set)?;
    storage.save_metadata(&stem, input, &report, config.min_length)?;

    if debug {
        let debug_dir = storage.debug_dir(&stem)?;
        let debug_path = debug_dir.join("tagged_annotated.html");
        if let Err(e) = html_debug::save_debug_html(&doc.to_html()?, &debug_path, &report.boundary_anchors()) {
            tracing::warn!("Failed to create debug HTML: {}", e);
        }
    }

    Ok(output)
}

/// Processes every input independently. Failures are logged and counted;
/// they never stop the other documents.
pub async fn run_batch(
    inputs: Vec<PathBuf>,
    config: PipelineConfig,
    storage: StorageManager,
    debug: bool,
) -> BatchSummary {
    let config = Arc::new(config);
    let storage = Arc::new(storage);
    let mut tasks = JoinSet::new();

    for input in inputs {
        let config = Arc::clone(&config);
        let storage = Arc::clone(&storage);
        tasks.spawn_blocking(move || {
            let result = process_file(&input, &config, &storage, debug);
            (input, result)
        });
    }

    let mut summary = BatchSummary::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(output))) => {
                tracing::info!("Wrote {}", output.display());
                summary.succeeded += 1;
            }
            Ok((input, Err(e))) => {
                tracing::error!("Failed to process {}: {}", input.display(), e);
                summary.failed += 1;
            }
            Err(e) => {
                tracing::error!("Processing task panicked or was cancelled: {}", e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        summary.succeeded,
        summary.failed
    );
    summary
}

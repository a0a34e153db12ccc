// src/storage/mod.rs
use crate::pipeline::PipelineReport;
use crate::review::ReviewSet;
use crate::utils::error::StorageError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Writes the review set as `<stem>.json`.
    pub fn save_review_set(&self, stem: &str, review_set: &ReviewSet) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}.json", stem));
        fs::write(&file_path, to_json(review_set)?).map_err(StorageError::IoError)?;

        tracing::info!("Saved {} paragraphs to {}", review_set.len(), file_path.display());
        Ok(file_path)
    }

    /// Writes run metadata as `<stem>_meta.json`.
    pub fn save_metadata(
        &self,
        stem: &str,
        source: &Path,
        report: &PipelineReport,
        min_length: usize,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", stem));

        let metadata = serde_json::json!({
            "source": source.display().to_string(),
            "total_paragraphs": report.total_paragraphs,
            "paragraphs_before_filter": report.before_filter,
            "paragraphs_to_review": report.review_set.len(),
            "min_length": min_length,
            "front_boundary": report.front,
            "back_boundary": report.back,
            "lookups": report.lookups,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        fs::write(&file_path, to_json(&metadata)?).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }

    /// Where debug artifacts for `stem` go; created on demand.
    pub fn debug_dir(&self, stem: &str) -> Result<PathBuf, StorageError> {
        let dir = self.base_dir.join("debug").join(stem);
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(StorageError::IoError)?;
        }
        Ok(dir)
    }
}

/// Pretty JSON with four-space indentation, non-ASCII kept as is.
fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, StorageError> {
    let mut output = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    Ok(output)
}

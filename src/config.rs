// src/config.rs
//! Pipeline settings and their defaults.

use crate::extractors::matcher::MatchConfig;
use crate::review::filter::DEFAULT_MIN_LENGTH;
use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no minimum length is given.
pub const MIN_LENGTH_ENV: &str = "MIN_PARAGRAPH_LENGTH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Paragraphs shorter than this (in characters) are dropped.
    pub min_length: usize,
    /// Sections whose heading starts the reviewable body. Tried in order; the
    /// first one that resolves to a paragraph wins.
    pub front_sections: Vec<String>,
    /// Sections whose heading ends the reviewable body. The first heading in
    /// document order matching any of them wins. Matching is by substring, so
    /// the stem "reference" covers "References", "Reference" and "Reference List".
    pub back_sections: Vec<String>,
    pub matcher: MatchConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            front_sections: vec!["introduction".to_string(), "abstract".to_string()],
            back_sections: vec!["reference".to_string(), "bibliography".to_string()],
            matcher: MatchConfig::default(),
        }
    }
}

/// Minimum length from the command line, else `MIN_PARAGRAPH_LENGTH`, else
/// the default.
pub fn resolve_min_length(cli_value: Option<usize>) -> Result<usize, AppError> {
    if let Some(value) = cli_value {
        tracing::debug!("Using minimum paragraph length {} from command-line argument", value);
        return Ok(value);
    }

    match std::env::var(MIN_LENGTH_ENV) {
        Ok(raw) => {
            let value = raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("Invalid {} value '{}': {}", MIN_LENGTH_ENV, raw, e))
            })?;
            tracing::debug!("Using minimum paragraph length {} from {}", value, MIN_LENGTH_ENV);
            Ok(value)
        }
        Err(_) => {
            tracing::debug!("Using minimum paragraph length {} (default)", DEFAULT_MIN_LENGTH);
            Ok(DEFAULT_MIN_LENGTH)
        }
    }
}

// src/main.rs
use clap::{Args, Parser, Subcommand};
use review_prep::batch;
use review_prep::config::{self, PipelineConfig};
use review_prep::extractors::{tag_paragraphs, MatchConfig};
use review_prep::storage::StorageManager;
use review_prep::utils;
use review_prep::{AppError, Document};
use std::path::PathBuf;

/// Prepares converted manuscript HTML for editorial review
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the reviewable paragraphs of one or more HTML files as JSON
    Extract(ExtractArgs),

    /// Stamp paragraph ids onto an HTML file and write the result
    Tag {
        /// HTML file to tag
        input: PathBuf,

        /// Where to write the tagged HTML
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// HTML files to process (one JSON file is written per input)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for review sets and metadata
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Minimum paragraph length in characters (falls back to MIN_PARAGRAPH_LENGTH, then 50)
    #[arg(long)]
    min_length: Option<usize>,

    /// Section whose heading starts the reviewable body (repeatable, tried in order)
    #[arg(long = "front-section")]
    front_sections: Vec<String>,

    /// Section whose heading ends the reviewable body (repeatable)
    #[arg(long = "back-section")]
    back_sections: Vec<String>,

    /// Heading-like text must be shorter than this many characters
    #[arg(long, default_value = "25")]
    max_heading_length: usize,

    /// Match section names case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Debug mode - save annotated HTML files for debugging
    #[arg(short, long)]
    debug: bool,
}

impl ExtractArgs {
    fn pipeline_config(&self) -> Result<PipelineConfig, AppError> {
        let defaults = PipelineConfig::default();
        Ok(PipelineConfig {
            min_length: config::resolve_min_length(self.min_length)?,
            front_sections: non_empty_or(&self.front_sections, defaults.front_sections),
            back_sections: non_empty_or(&self.back_sections, defaults.back_sections),
            matcher: MatchConfig {
                max_heading_length: self.max_heading_length,
                case_sensitive: self.case_sensitive,
            },
        })
    }
}

fn non_empty_or(given: &[String], fallback: Vec<String>) -> Vec<String> {
    if given.is_empty() {
        fallback
    } else {
        given.to_vec()
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let cli = Cli::parse();
    tracing::info!("Starting processing for args: {:?}", cli);

    match cli.command {
        Command::Extract(args) => extract(args).await,
        Command::Tag { input, output } => tag(input, output),
    }
}

async fn extract(args: ExtractArgs) -> Result<(), AppError> {
    let config = args.pipeline_config()?;
    tracing::debug!("Pipeline configuration: {:?}", config);

    let storage = StorageManager::new(&args.output_dir)?;
    let summary = batch::run_batch(args.inputs, config, storage, args.debug).await;

    if summary.succeeded == 0 && summary.failed > 0 {
        return Err(AppError::Processing(format!(
            "Failed to extract paragraphs from any of {} documents",
            summary.failed
        )));
    }
    Ok(())
}

fn tag(input: PathBuf, output: PathBuf) -> Result<(), AppError> {
    let html = std::fs::read_to_string(&input)?;
    let mut doc = Document::parse(&html);
    let count = tag_paragraphs(&mut doc)?;

    std::fs::write(&output, doc.to_html()?)?;
    tracing::info!("Wrote {} tagged paragraphs to {}", count, output.display());
    Ok(())
}

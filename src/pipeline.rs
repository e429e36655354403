//! Run sequencing: extract -> compose -> generate
//!
//! The base file is extracted first, then all analysis files concurrently.
//! Results are recombined in input order; the first failure wins and no
//! partial results are surfaced. Nothing is cached between runs.

use crate::config::Config;
use crate::error::{RegDocError, Result};
use crate::extractor;
use crate::gemini::GeminiClient;
use regdoc_common::{build_unify_prompt, Locale, Strings};
use std::path::{Path, PathBuf};

/// Stage of an in-flight run, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extracting,
    Analyzing,
    Generating,
}

impl Stage {
    pub fn message<'a>(&self, strings: &'a Strings) -> &'a str {
        match self {
            Stage::Extracting => strings.loading_extract,
            Stage::Analyzing => strings.loading_analyze,
            Stage::Generating => strings.loading_generate,
        }
    }
}

/// Run the full pipeline and return the unified document text.
///
/// `on_stage` is invoked at each stage transition, before the stage's work
/// starts (Generating fires once the response is in hand, mirroring the
/// display order of the UI).
pub async fn run_pipeline(
    config: &Config,
    locale: Locale,
    base: &Path,
    analysis: &[PathBuf],
    mut on_stage: impl FnMut(Stage),
) -> Result<String> {
    if analysis.is_empty() {
        return Err(RegDocError::NoAnalysisFiles);
    }

    on_stage(Stage::Extracting);
    let base_text = extract_one(base.to_path_buf()).await?;
    let analysis_texts = extract_all(analysis).await?;

    on_stage(Stage::Analyzing);
    let prompt = build_unify_prompt(locale, &base_text, &analysis_texts);
    let client = GeminiClient::new(config)?;
    let document = client.generate(&prompt).await?;

    on_stage(Stage::Generating);
    Ok(document)
}

async fn extract_one(path: PathBuf) -> Result<String> {
    tokio::task::spawn_blocking(move || extractor::extract_text(&path))
        .await
        .map_err(|e| RegDocError::Extraction(format!("extraction task failed: {}", e)))?
}

/// Extract every analysis file concurrently, preserving input order.
async fn extract_all(paths: &[PathBuf]) -> Result<Vec<String>> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::task::spawn_blocking(move || extractor::extract_text(&path)))
        .collect();

    let joined = futures::future::try_join_all(handles)
        .await
        .map_err(|e| RegDocError::Extraction(format!("extraction task failed: {}", e)))?;

    joined.into_iter().collect()
}

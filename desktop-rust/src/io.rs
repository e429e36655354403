use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use regdoc_common::DEFAULT_PDF_FILENAME;

pub fn load_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

pub fn default_pdf_path(source: &Path) -> PathBuf {
    source.with_file_name(DEFAULT_PDF_FILENAME)
}

use regdoc_common::Strings;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegDocError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API key not set. Use `regdoc-ai config --set-api-key YOUR_KEY` or the GEMINI_API_KEY environment variable")]
    MissingApiKey,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("No analysis files given; at least one is required")]
    NoAnalysisFiles,

    #[error("Gemini API call failed: {0}")]
    ApiCall(String),

    #[error("Failed to parse Gemini API response: {0}")]
    ApiParse(String),

    #[error("PDF generation failed: {0}")]
    PdfGeneration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] regdoc_common::Error),
}

pub type Result<T> = std::result::Result<T, RegDocError>;

impl RegDocError {
    /// Localized message shown to the user when a run fails.
    ///
    /// Only two kinds are surfaced: extraction failures and generation
    /// failures (the latter carrying the upstream detail). Everything else
    /// collapses to the generic error string.
    pub fn user_message(&self, strings: &Strings) -> String {
        match self {
            RegDocError::Extraction(_) | RegDocError::FileNotFound(_) => {
                strings.error_pdf_extraction.to_string()
            }
            RegDocError::ApiCall(detail) | RegDocError::ApiParse(detail) => {
                format!("{} {}", strings.error_gemini, detail)
            }
            RegDocError::MissingApiKey => {
                format!("{} {}", strings.error_gemini, self)
            }
            _ => strings.error_generic.to_string(),
        }
    }
}

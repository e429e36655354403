use clap::{Parser, Subcommand};
use regdoc_common::Locale;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regdoc-ai")]
#[command(about = "Analisador e gerador de documentos regulatórios (AI)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface and prompt locale (pt/en)
    #[arg(long, default_value = "pt", global = true)]
    pub lang: Locale,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract, analyze and generate the unified document
    Run {
        /// Reference (base) PDF that anchors the clause structure
        #[arg(required = true)]
        base: PathBuf,

        /// One or more PDFs to compare against the base
        #[arg(required = true, num_args = 1..)]
        analysis: Vec<PathBuf>,

        /// Output text file (default: documento_unificado.md)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also export the result as PDF
        #[arg(long)]
        pdf: bool,

        /// Location rendered on the exported document
        #[arg(long)]
        location: Option<String>,

        /// Effective date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Extract the plain text of a single PDF
    Extract {
        /// Input PDF
        #[arg(required = true)]
        file: PathBuf,

        /// Output text file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a generated document text file as PDF
    Export {
        /// Input text file (output of `run`)
        #[arg(required = true)]
        input: PathBuf,

        /// Output PDF (default: documento_regulatorio_unificado.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Location rendered on the document
        #[arg(long)]
        location: Option<String>,

        /// Effective date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show or edit the configuration
    Config {
        /// Set the Gemini API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Show the current configuration
        #[arg(long)]
        show: bool,
    },
}

/// Default location placeholder, matching the rendered document field.
pub const DEFAULT_LOCATION: &str = "São Paulo";

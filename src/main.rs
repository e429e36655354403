use clap::Parser;
use indicatif::ProgressBar;
use regdoc_ai::{cli, config, error, export, extractor, pipeline};

use cli::{Cli, Commands};
use config::Config;
use error::{RegDocError, Result};
use regdoc_common::{DocumentMeta, DEFAULT_PDF_FILENAME};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let strings = cli.lang.strings();

    match cli.command {
        Commands::Run {
            base,
            analysis,
            output,
            pdf,
            location,
            date,
        } => {
            println!("📑 regdoc-ai\n");
            println!("  [base]     {}", base.display());
            for (index, file) in analysis.iter().enumerate() {
                println!("  [análise {}] {}", index + 1, file.display());
            }
            println!();

            let spinner = ProgressBar::new_spinner();
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result = pipeline::run_pipeline(&config, cli.lang, &base, &analysis, |stage| {
                spinner.set_message(stage.message(strings).to_string());
            })
            .await;

            let document = match result {
                Ok(document) => {
                    spinner.finish_and_clear();
                    document
                }
                Err(err) => {
                    spinner.finish_and_clear();
                    eprintln!("{}", err.user_message(strings));
                    if cli.verbose {
                        eprintln!("  ({})", err);
                    }
                    std::process::exit(1);
                }
            };

            let output = output.unwrap_or_else(|| PathBuf::from("documento_unificado.md"));
            std::fs::write(&output, &document)?;
            println!("✔ {}", output.display());

            if pdf {
                let meta = build_meta(location, date)?;
                let pdf_path = output.with_file_name(DEFAULT_PDF_FILENAME);
                export::generate_pdf(&document, &meta, cli.lang, &pdf_path)?;
                println!("✔ {}", pdf_path.display());
            }

            println!("\n✅ {}", strings.result_title);
        }

        Commands::Extract { file, output } => {
            if !file.exists() {
                return Err(RegDocError::FileNotFound(file.display().to_string()));
            }
            let bytes = std::fs::read(&file)?;
            let pages = extractor::page_count(&bytes)?;
            let text = extractor::extract_text_from_bytes(&bytes)?;

            eprintln!("✔ {} ({} pages, {} chars)", file.display(), pages, text.len());
            match output {
                Some(path) => {
                    std::fs::write(&path, &text)?;
                    println!("✔ {}", path.display());
                }
                None => println!("{}", text),
            }
        }

        Commands::Export {
            input,
            output,
            location,
            date,
        } => {
            let document = std::fs::read_to_string(&input)?;
            let meta = build_meta(location, date)?;
            let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_FILENAME));
            export::generate_pdf(&document, &meta, cli.lang, &output)?;
            println!("✔ {}", output.display());
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("config ({})", Config::config_path()?.display());
                println!("  model:       {}", config.model);
                println!("  temperature: {}", config.temperature);
                println!("  timeout:     {}s", config.timeout_seconds);
                println!(
                    "  api key:     {}",
                    if config.get_api_key().is_ok() { "set" } else { "not set" }
                );
            }
        }
    }

    Ok(())
}

fn build_meta(location: Option<String>, date: Option<String>) -> Result<DocumentMeta> {
    let location = location.unwrap_or_else(|| cli::DEFAULT_LOCATION.to_string());
    let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    Ok(DocumentMeta::new(location, date)?)
}

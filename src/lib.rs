pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod gemini;
pub mod pipeline;

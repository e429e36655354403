//! RegDoc AI Common Library
//!
//! Types and utilities shared by the CLI and the desktop front end

pub mod document;
pub mod error;
pub mod layout;
pub mod locale;
pub mod prompts;

pub use document::{validate_date, DocumentMeta, DEFAULT_PDF_FILENAME, SIGNATURE};
pub use error::{Error, Result};
pub use layout::{wrap_text, PdfLayout};
pub use locale::{Locale, Strings};
pub use prompts::build_unify_prompt;

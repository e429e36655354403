//! Unified document metadata
//!
//! Location and effective date are user-editable and attached to the
//! rendered document only; they are never sent to the generation API.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed signature line closing every unified document, centered.
pub const SIGNATURE: &str = "TELEFÔNICA BRASIL S.A.";

/// Fixed output file name for the exported PDF.
pub const DEFAULT_PDF_FILENAME: &str = "documento_regulatorio_unificado.pdf";

/// Metadata rendered below the generated document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub location: String,
    /// Effective date, `YYYY-MM-DD`
    pub effective_date: String,
}

impl DocumentMeta {
    pub fn new(location: impl Into<String>, effective_date: impl Into<String>) -> Result<Self> {
        let effective_date = effective_date.into();
        validate_date(&effective_date)?;
        Ok(Self {
            location: location.into(),
            effective_date,
        })
    }

    /// `Local: São Paulo, Data de Vigência: 2026-08-25` (labels per locale)
    pub fn display_line(&self, location_label: &str, date_label: &str) -> String {
        format!(
            "{} {}, {} {}",
            location_label, self.location, date_label, self.effective_date
        )
    }
}

/// Validate a `YYYY-MM-DD` date string.
///
/// Only shape and digit ranges are checked; calendar-level validation
/// (leap years, month lengths) is left to the date picker upstream.
pub fn validate_date(date: &str) -> Result<()> {
    let invalid = || Error::InvalidDate(date.to_string());

    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let (year, month, day) = (parts[0], parts[1], parts[2]);
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(invalid());
    }
    let _year: u32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_ok() {
        assert!(validate_date("2026-08-25").is_ok());
        assert!(validate_date("1999-01-01").is_ok());
        assert!(validate_date("2030-12-31").is_ok());
    }

    #[test]
    fn test_validate_date_rejects_wrong_shape() {
        for bad in ["25/08/2026", "2026-8-25", "2026-08", "20260825", ""] {
            assert!(validate_date(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_validate_date_rejects_out_of_range() {
        assert!(validate_date("2026-00-10").is_err());
        assert!(validate_date("2026-13-10").is_err());
        assert!(validate_date("2026-05-32").is_err());
        assert!(validate_date("2026-05-00").is_err());
    }

    #[test]
    fn test_meta_new_validates() {
        assert!(DocumentMeta::new("São Paulo", "2026-08-25").is_ok());
        let err = DocumentMeta::new("São Paulo", "hoje").unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));
    }

    #[test]
    fn test_display_line() {
        let meta = DocumentMeta::new("São Paulo", "2026-08-25").unwrap();
        let line = meta.display_line("Local:", "Data de Vigência:");
        assert_eq!(line, "Local: São Paulo, Data de Vigência: 2026-08-25");
    }

    #[test]
    fn test_signature_constant() {
        assert_eq!(SIGNATURE, "TELEFÔNICA BRASIL S.A.");
    }
}

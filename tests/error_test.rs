//! Error surface tests
//!
//! A failed run shows exactly one of two localized error kinds: extraction
//! or generation (with the upstream detail). Everything else is generic.

use regdoc_ai::error::RegDocError;
use regdoc_common::Locale;

#[test]
fn test_extraction_error_localized_pt() {
    let err = RegDocError::Extraction("bad xref".to_string());
    let msg = err.user_message(Locale::Pt.strings());
    assert_eq!(msg, "Falha ao extrair texto de um dos PDFs.");
}

#[test]
fn test_extraction_error_localized_en() {
    let err = RegDocError::Extraction("bad xref".to_string());
    let msg = err.user_message(Locale::En.strings());
    assert_eq!(msg, "Failed to extract text from one of the PDFs.");
}

#[test]
fn test_missing_file_maps_to_extraction_message() {
    let err = RegDocError::FileNotFound("base.pdf".to_string());
    let msg = err.user_message(Locale::Pt.strings());
    assert_eq!(msg, "Falha ao extrair texto de um dos PDFs.");
}

#[test]
fn test_generation_error_includes_upstream_detail() {
    let err = RegDocError::ApiCall("quota exceeded".to_string());

    let pt = err.user_message(Locale::Pt.strings());
    assert!(pt.starts_with("Erro ao chamar a API do Gemini:"));
    assert!(pt.contains("quota exceeded"));

    let en = err.user_message(Locale::En.strings());
    assert!(en.starts_with("Error calling the Gemini API:"));
    assert!(en.contains("quota exceeded"));
}

#[test]
fn test_api_parse_error_is_a_generation_failure() {
    let err = RegDocError::ApiParse("empty response".to_string());
    let msg = err.user_message(Locale::En.strings());
    assert!(msg.contains("Gemini"));
    assert!(msg.contains("empty response"));
}

#[test]
fn test_other_errors_map_to_generic_message() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: RegDocError = io_err.into();
    let msg = err.user_message(Locale::Pt.strings());
    assert_eq!(msg, "Ocorreu um erro. Por favor, tente novamente.");
}

#[test]
fn test_missing_api_key_message_names_both_sources() {
    let err = RegDocError::MissingApiKey;
    let display = format!("{}", err);
    assert!(display.contains("GEMINI_API_KEY"));
    assert!(display.contains("regdoc-ai config"));
}

#[test]
fn test_error_display_nonempty() {
    let errors = vec![
        RegDocError::Config("bad config".to_string()),
        RegDocError::FileNotFound("base.pdf".to_string()),
        RegDocError::Extraction("parse failed".to_string()),
        RegDocError::NoAnalysisFiles,
        RegDocError::ApiCall("500".to_string()),
        RegDocError::ApiParse("empty".to_string()),
        RegDocError::PdfGeneration("save failed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message for {:?}", err);
    }
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RegDocError = io_err.into();
    assert!(matches!(err, RegDocError::Io(_)));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: RegDocError = json_err.into();
    assert!(matches!(err, RegDocError::Json(_)));
}

#[test]
fn test_common_error_conversion_is_transparent() {
    let common_err = regdoc_common::Error::InvalidDate("hoje".to_string());
    let err: RegDocError = common_err.into();
    assert!(matches!(err, RegDocError::Common(_)));
    assert!(format!("{}", err).contains("hoje"));
}

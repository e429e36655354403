//! Locale selection and display string tables
//!
//! Two supported locales (pt-BR and en-US). Every user-visible string is a
//! named field on `Strings`; callers resolve the table once per render
//! instead of looking strings up by key.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Interface locale. Also selects which prompt template is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    /// Short tag used on the command line and in file names
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// Display string table for this locale
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Pt => &PT,
            Locale::En => &EN,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pt" | "pt-br" => Ok(Locale::Pt),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(Error::UnknownLocale(other.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Localized display strings
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub lang_pt: &'static str,
    pub lang_en: &'static str,
    pub base_file_title: &'static str,
    pub base_file_desc: &'static str,
    pub upload_base: &'static str,
    pub analysis_files_title: &'static str,
    pub analysis_files_desc: &'static str,
    pub upload_analysis: &'static str,
    pub analyze_btn: &'static str,
    pub analyzing: &'static str,
    pub loading_extract: &'static str,
    pub loading_analyze: &'static str,
    pub loading_generate: &'static str,
    pub result_title: &'static str,
    pub save_pdf: &'static str,
    pub date_label: &'static str,
    pub location_label: &'static str,
    pub error_generic: &'static str,
    pub error_pdf_extraction: &'static str,
    pub error_gemini: &'static str,
}

pub static PT: Strings = Strings {
    title: "Analisador e Gerador de Documentos Regulatórios",
    lang_pt: "Português (BR)",
    lang_en: "English (US)",
    base_file_title: "1. Arquivo de Referência",
    base_file_desc: "Carregue o documento PDF que servirá como base para a estrutura e cláusulas principais.",
    upload_base: "Carregar Arquivo Base",
    analysis_files_title: "2. Arquivos para Análise",
    analysis_files_desc: "Carregue um ou mais documentos PDF para comparar com o arquivo de referência.",
    upload_analysis: "Carregar Arquivos de Análise",
    analyze_btn: "Analisar e Gerar Documento",
    analyzing: "Analisando...",
    loading_extract: "Extraindo texto dos PDFs...",
    loading_analyze: "Analisando cláusulas com a IA...",
    loading_generate: "Gerando documento unificado...",
    result_title: "Documento Unificado Gerado",
    save_pdf: "Salvar em PDF",
    date_label: "Data de Vigência:",
    location_label: "Local:",
    error_generic: "Ocorreu um erro. Por favor, tente novamente.",
    error_pdf_extraction: "Falha ao extrair texto de um dos PDFs.",
    error_gemini: "Erro ao chamar a API do Gemini:",
};

pub static EN: Strings = Strings {
    title: "Regulatory Document Analyzer and Generator",
    lang_pt: "Português (BR)",
    lang_en: "English (US)",
    base_file_title: "1. Reference File",
    base_file_desc: "Upload the PDF document that will serve as the basis for the structure and main clauses.",
    upload_base: "Upload Base File",
    analysis_files_title: "2. Files for Analysis",
    analysis_files_desc: "Upload one or more PDF documents to compare against the reference file.",
    upload_analysis: "Upload Analysis Files",
    analyze_btn: "Analyze and Generate Document",
    analyzing: "Analyzing...",
    loading_extract: "Extracting text from PDFs...",
    loading_analyze: "Analyzing clauses with AI...",
    loading_generate: "Generating unified document...",
    result_title: "Generated Unified Document",
    save_pdf: "Save as PDF",
    date_label: "Effective Date:",
    location_label: "Location:",
    error_generic: "An error occurred. Please try again.",
    error_pdf_extraction: "Failed to extract text from one of the PDFs.",
    error_gemini: "Error calling the Gemini API:",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_locale_from_str() {
        assert_eq!(Locale::from_str("pt").unwrap(), Locale::Pt);
        assert_eq!(Locale::from_str("PT-BR").unwrap(), Locale::Pt);
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert_eq!(Locale::from_str("en-US").unwrap(), Locale::En);
    }

    #[test]
    fn test_locale_from_str_unknown() {
        let err = Locale::from_str("fr").unwrap_err();
        assert!(matches!(err, Error::UnknownLocale(_)));
    }

    #[test]
    fn test_locale_default_is_pt() {
        assert_eq!(Locale::default(), Locale::Pt);
    }

    #[test]
    fn test_strings_resolve_by_locale() {
        assert_eq!(Locale::Pt.strings().save_pdf, "Salvar em PDF");
        assert_eq!(Locale::En.strings().save_pdf, "Save as PDF");
    }

    #[test]
    fn test_stage_strings_differ_between_locales() {
        let pt = Locale::Pt.strings();
        let en = Locale::En.strings();
        assert_ne!(pt.loading_extract, en.loading_extract);
        assert_ne!(pt.loading_analyze, en.loading_analyze);
        assert_ne!(pt.loading_generate, en.loading_generate);
    }

    #[test]
    fn test_tag_round_trip() {
        for locale in [Locale::Pt, Locale::En] {
            assert_eq!(Locale::from_str(locale.tag()).unwrap(), locale);
        }
    }
}

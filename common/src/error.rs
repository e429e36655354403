//! Shared error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown locale: {0}. Use pt or en")]
    UnknownLocale(String),

    #[error("Invalid date: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_locale() {
        let error = Error::UnknownLocale("fr".to_string());
        let display = format!("{}", error);
        assert!(display.contains("fr"));
        assert!(display.contains("pt or en"));
    }

    #[test]
    fn test_error_display_invalid_date() {
        let error = Error::InvalidDate("25/08/2026".to_string());
        let display = format!("{}", error);
        assert!(display.contains("25/08/2026"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownLocale("xx".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownLocale"));
    }
}

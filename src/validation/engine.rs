//! Validation Engine
//!
//! Turns a classified candidate into a reportable result with diagnostics
//! explaining the outcome. Kept apart from classification and the CLI.

use serde::Serialize;

use crate::isbn::{IsbnFormat, IsbnValidator};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic message about a candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a single candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub input: String,
    pub format: IsbnFormat,
    pub strict: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new(input: impl Into<String>, format: IsbnFormat, strict: bool) -> Self {
        Self {
            input: input.into(),
            format,
            strict,
            diagnostics: Vec::new(),
        }
    }

    /// Build the report for an already classified candidate
    pub fn from_validator(isbn: &IsbnValidator) -> Self {
        let mut result = Self::new(isbn.as_str(), isbn.format(), isbn.is_strict());

        match isbn.format() {
            IsbnFormat::Unknown => {
                result.add_error("unrecognized ISBN format".to_string());
                if isbn.is_strict() && IsbnValidator::lenient(isbn.as_str()).verify_format() {
                    result.add_info("hyphen-less form is rejected in strict mode".to_string());
                }
            }
            IsbnFormat::Isbn13 | IsbnFormat::Isbn10 => {
                if !isbn.verify_check_digit() {
                    let expected = isbn
                        .expected_check_character()
                        .map(String::from)
                        .unwrap_or_default();
                    let found = isbn.found_check_characters().unwrap_or_default();
                    result.add_error(format!(
                        "check digit mismatch: expected '{}', found '{}'",
                        expected, found
                    ));
                } else if isbn.is_isbn10() {
                    result.add_info("legacy ISBN-10 format".to_string());
                }
            }
        }

        result
    }

    pub fn add_error(&mut self, message: String) {
        self.push(message, Severity::Error);
    }

    pub fn add_warning(&mut self, message: String) {
        self.push(message, Severity::Warning);
    }

    pub fn add_info(&mut self, message: String) {
        self.push(message, Severity::Info);
    }

    fn push(&mut self, message: String, severity: Severity) {
        self.diagnostics.push(Diagnostic { message, severity });
    }

    /// The first error message, if any
    pub fn first_error(&self) -> Option<&str> {
        self.diagnostics
            .iter()
            .find(|d| d.severity == Severity::Error)
            .map(|d| d.message.as_str())
    }

    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Classify and check a single candidate
pub fn validate_isbn(raw: &str, strict: bool) -> ValidationResult {
    let isbn = IsbnValidator::new(raw, strict);
    let result = ValidationResult::from_validator(&isbn);
    log::debug!(
        "validated {:?}: {} diagnostic(s), valid={}",
        raw,
        result.diagnostics.len(),
        result.is_valid()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new("x", IsbnFormat::Unknown, false);
        assert!(result.is_valid());

        result.add_warning("Test warning".to_string());
        assert!(result.is_valid()); // Warnings don't make it invalid

        result.add_error("Test error".to_string());
        assert!(!result.is_valid()); // Errors make it invalid
        assert_eq!(result.first_error(), Some("Test error"));
    }

    #[test]
    fn test_validate_valid_isbn13() {
        let result = validate_isbn("978-4-87311-336-4", false);
        assert!(result.is_valid());
        assert_eq!(result.format, IsbnFormat::Isbn13);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_validate_check_digit_mismatch() {
        let result = validate_isbn("4-87311-336-3", false);
        assert!(!result.is_valid());
        assert_eq!(
            result.first_error(),
            Some("check digit mismatch: expected '9', found '3'")
        );
    }

    #[test]
    fn test_validate_legacy_isbn10() {
        let result = validate_isbn("4873113369", false);
        assert!(result.is_valid());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Info);
    }

    #[test]
    fn test_validate_strict_plain_digits() {
        let result = validate_isbn("9784873113364", true);
        assert!(!result.is_valid());
        assert_eq!(result.first_error(), Some("unrecognized ISBN format"));
        assert!(result
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Info && d.message.contains("strict mode")));
    }

    #[test]
    fn test_validate_garbage() {
        let result = validate_isbn("not an isbn", true);
        assert!(!result.is_valid());
        assert_eq!(result.diagnostics.len(), 1);
    }
}

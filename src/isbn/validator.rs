//! ISBN Validator
//!
//! An immutable candidate: the raw input, the strictness flag it was
//! built with, and the format it was classified as at construction.

use crate::isbn::check_digit::{isbn10_check_character, isbn13_check_character, strip_hyphens};
use crate::isbn::format::{classify, IsbnFormat};

/// A classified ISBN candidate
///
/// Construction never fails. Input that matches no ISBN layout is kept as
/// `IsbnFormat::Unknown` and every query on it answers `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsbnValidator {
    raw: String,
    format: IsbnFormat,
    strict: bool,
}

impl IsbnValidator {
    /// Classify `raw`; in strict mode only the hyphenated layouts are accepted
    pub fn new(raw: impl Into<String>, strict: bool) -> Self {
        let raw = raw.into();
        let format = classify(&raw, strict);
        Self {
            raw,
            format,
            strict,
        }
    }

    /// Lenient mode accepts both hyphenated and plain-digit input
    pub fn lenient(raw: impl Into<String>) -> Self {
        Self::new(raw, false)
    }

    pub fn strict(raw: impl Into<String>) -> Self {
        Self::new(raw, true)
    }

    /// Alias of [`verify_check_digit`](Self::verify_check_digit)
    pub fn is_valid(&self) -> bool {
        self.verify_check_digit()
    }

    pub fn is_isbn13(&self) -> bool {
        self.format == IsbnFormat::Isbn13
    }

    pub fn is_isbn10(&self) -> bool {
        self.format == IsbnFormat::Isbn10
    }

    /// Check the layout only, not the check digit
    pub fn verify_format(&self) -> bool {
        self.format != IsbnFormat::Unknown
    }

    /// Check both the layout and the check digit
    ///
    /// A passing result says nothing about whether the book exists.
    pub fn verify_check_digit(&self) -> bool {
        match (self.expected_check_character(), self.found_check_characters()) {
            (Some(expected), Some(found)) => {
                let mut rest = found.chars();
                rest.next() == Some(expected) && rest.next().is_none()
            }
            _ => false,
        }
    }

    pub fn format(&self) -> IsbnFormat {
        self.format
    }

    /// The input exactly as given
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The check character the digits call for, `None` for unknown input
    pub fn expected_check_character(&self) -> Option<char> {
        let stripped = strip_hyphens(&self.raw);
        match self.format {
            IsbnFormat::Isbn13 => isbn13_check_character(&stripped),
            IsbnFormat::Isbn10 => isbn10_check_character(&stripped),
            IsbnFormat::Unknown => None,
        }
    }

    /// Everything after the check offset of the hyphen-stripped input
    pub fn found_check_characters(&self) -> Option<String> {
        let offset = self.format.check_offset()?;
        Some(strip_hyphens(&self.raw).chars().skip(offset).collect())
    }
}

impl AsRef<str> for IsbnValidator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

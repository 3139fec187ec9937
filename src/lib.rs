//! ISBN Validator
//!
//! Classification and check-digit verification for International Standard
//! Book Numbers.
//!
//! This library provides:
//! - ISBN-13 / ISBN-10 format classification, hyphenated or plain
//! - Check-digit verification for both formats
//! - Diagnostics explaining why a candidate failed
//! - Configuration and CLI plumbing for the `isbn-check` binary

pub mod cli;
pub mod config;
pub mod isbn;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use isbn::{IsbnFormat, IsbnValidator};
pub use validation::{validate_isbn, Diagnostic, Severity, ValidationResult};

//! Validation Engine
//!
//! Diagnostics and reporting on top of the ISBN core.

pub mod engine;

pub use engine::{validate_isbn, Diagnostic, Severity};

// Re-export common types
pub use engine::ValidationResult;

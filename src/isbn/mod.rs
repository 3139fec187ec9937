//! ISBN Core
//!
//! Format classification and check-digit verification for ISBN-13 and
//! ISBN-10 candidates. Pure functions only, no I/O.

pub mod check_digit;
pub mod format;
pub mod validator;

pub use check_digit::{isbn10_check_character, isbn13_check_character, strip_hyphens};
pub use format::{classify, IsbnFormat};
pub use validator::IsbnValidator;

//! ISBN Format Classifier
//!
//! Decides whether a candidate looks like an ISBN-13 or ISBN-10,
//! hyphenated or plain. Group widths are only checked against their
//! bounds, never against registration-agency ranges.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `[0-9]` rather than `\d`: the regex crate's `\d` also matches non-ASCII digits.
static HYPHENATED_13: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(978|979)-[0-9]{1,5}-[0-9]{1,7}-[0-9]{1,7}-[0-9]$")
        .expect("hyphenated ISBN-13 pattern is valid")
});

static PLAIN_13: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13}$").expect("plain ISBN-13 pattern is valid"));

static HYPHENATED_10: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,5}-[0-9]{1,7}-[0-9]{1,7}-[0-9X]$")
        .expect("hyphenated ISBN-10 pattern is valid")
});

static PLAIN_10: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9}[0-9X]$").expect("plain ISBN-10 pattern is valid"));

/// Total length of a hyphenated ISBN-13: 13 digits and 4 hyphens
const HYPHENATED_13_LEN: usize = 17;
/// Total length of a hyphenated ISBN-10: 10 characters and 3 hyphens
const HYPHENATED_10_LEN: usize = 13;

/// The format a candidate string was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IsbnFormat {
    Unknown,
    Isbn13,
    Isbn10,
}

impl IsbnFormat {
    /// Offset of the check character within the hyphen-stripped form
    pub fn check_offset(self) -> Option<usize> {
        match self {
            IsbnFormat::Isbn13 => Some(12),
            IsbnFormat::Isbn10 => Some(9),
            IsbnFormat::Unknown => None,
        }
    }
}

impl fmt::Display for IsbnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IsbnFormat::Unknown => "unknown",
            IsbnFormat::Isbn13 => "ISBN-13",
            IsbnFormat::Isbn10 => "ISBN-10",
        };
        f.write_str(name)
    }
}

/// Classify a candidate string
///
/// Rules are tried in order and the first match wins. In strict mode a
/// plain 13-digit string is `Unknown` outright; it is not retried against
/// the ISBN-10 rules.
pub fn classify(raw: &str, strict: bool) -> IsbnFormat {
    let format = if raw.len() == HYPHENATED_13_LEN && HYPHENATED_13.is_match(raw) {
        IsbnFormat::Isbn13
    } else if PLAIN_13.is_match(raw) {
        if strict {
            IsbnFormat::Unknown
        } else {
            IsbnFormat::Isbn13
        }
    } else if raw.len() == HYPHENATED_10_LEN && HYPHENATED_10.is_match(raw) {
        IsbnFormat::Isbn10
    } else if PLAIN_10.is_match(raw) && !strict {
        IsbnFormat::Isbn10
    } else {
        IsbnFormat::Unknown
    };

    log::debug!("classified {:?} (strict={}) as {}", raw, strict, format);
    format
}

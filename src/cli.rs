//! Command-line entry point for `isbn-check`.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::process::ExitCode;

use crate::config::{Config, OutputFormat};
use crate::validation::{validate_isbn, ValidationResult};

/// Check the candidate named on the command line
///
/// Exit code is 0 for a valid ISBN and 1 otherwise. Configuration errors
/// propagate to the caller.
pub fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    if let Some(path) = &config.config_path {
        log::info!("Loaded config file: {:?}", path);
    }

    let result = validate_isbn(&config.isbn, config.strict);
    println!("{}", render(&result, config.format)?);

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Render a result for stdout
pub fn render(result: &ValidationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("failed to serialize result")
        }
        OutputFormat::Text => Ok(render_text(result)),
    }
}

fn render_text(result: &ValidationResult) -> String {
    let mut out = match result.first_error() {
        None => format!("{}: valid {}", result.input, result.format),
        Some(error) => format!("{}: invalid ({})", result.input, error),
    };

    for diagnostic in &result.diagnostics {
        // Writing to a String cannot fail
        let _ = write!(out, "\n  {:?}: {}", diagnostic.severity, diagnostic.message);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_valid() {
        let result = validate_isbn("978-4-87311-336-4", false);
        let text = render(&result, OutputFormat::Text).expect("render");
        assert_eq!(text, "978-4-87311-336-4: valid ISBN-13");
    }

    #[test]
    fn test_render_text_invalid() {
        let result = validate_isbn("978-4-87311-336-1", false);
        let text = render(&result, OutputFormat::Text).expect("render");
        assert_eq!(
            text,
            "978-4-87311-336-1: invalid (check digit mismatch: expected '4', found '1')\n  \
             Error: check digit mismatch: expected '4', found '1'"
        );
    }

    #[test]
    fn test_render_json() {
        let result = validate_isbn("0-8044-2957-X", true);
        let json = render(&result, OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["input"], "0-8044-2957-X");
        assert_eq!(value["format"], "isbn10");
        assert_eq!(value["strict"], true);
        assert_eq!(value["diagnostics"][0]["severity"], "info");
    }
}

//! Configuration management for the ISBN checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (explicit path or user config directory)

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the ISBN checker
#[derive(Debug, Parser)]
#[command(name = "isbn-check")]
#[command(about = "Check the format and check digit of an ISBN")]
#[command(version)]
pub struct Args {
    /// The candidate ISBN, hyphenated or plain
    pub isbn: String,

    /// Only accept hyphenated ISBNs
    #[arg(long, help = "Reject hyphen-less ISBNs")]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Config file to load instead of the user default
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for the checker
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub strict: Option<bool>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Parse a config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Default location under the user config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("isbn-check").join("config.toml"))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// The candidate to check
    pub isbn: String,
    /// Reject hyphen-less input
    pub strict: bool,
    pub format: OutputFormat,
    /// Log level
    pub log_level: String,
    /// Config file that was actually loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // An explicit path must load; the default location is optional
        let (file, config_path) = match args.config {
            Some(path) => (FileConfig::load(&path)?, Some(path)),
            None => match FileConfig::default_path().filter(|p| p.is_file()) {
                Some(path) => (FileConfig::load(&path)?, Some(path)),
                None => (FileConfig::default(), None),
            },
        };

        Ok(Self::merge(args.isbn, args.strict, args.format, args.log_level, file, config_path))
    }

    fn merge(
        isbn: String,
        strict: bool,
        format: Option<OutputFormat>,
        log_level: Option<String>,
        file: FileConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        Config {
            isbn,
            // The flag can only turn strict mode on
            strict: strict || file.strict.unwrap_or(false),
            format: format.or(file.format).unwrap_or_default(),
            log_level: log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_path,
        }
    }
}

use std::str::FromStr;

use anyhow::{Context, Result};

use crate::errors::AppError;

/// How the finished report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!(
                "unknown report format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub report_format: OutputFormat,
    pub feedback_preview_chars: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_format: OutputFormat::Text,
            feedback_preview_chars: 80,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let report_format = match std::env::var("REPORT_FORMAT") {
            Ok(raw) => raw
                .parse::<OutputFormat>()
                .context("REPORT_FORMAT must be 'text' or 'json'")?,
            Err(_) => defaults.report_format,
        };

        let feedback_preview_chars = match std::env::var("FEEDBACK_PREVIEW_CHARS") {
            Ok(raw) => parse_preview_chars(&raw)
                .context("FEEDBACK_PREVIEW_CHARS must be a positive integer")?,
            Err(_) => defaults.feedback_preview_chars,
        };

        Ok(Config {
            report_format,
            feedback_preview_chars,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_preview_chars(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(AppError::Config("preview length must be at least 1".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::Config(format!("invalid preview length '{raw}': {e}"))),
    }
}

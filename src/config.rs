//! Generator configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any sitemap
//! is rendered.
//!
//! ```bash
//! export SITEMAP_INDENT=2     # pretty-print with two spaces per level
//! export RUST_LOG=debug
//! export LOG_FORMAT=json
//! ```
//!
//! ## Optional Variables
//!
//! - `SITEMAP_INDENT` - Spaces per nesting level, `0` for compact output (default: `0`, max: `8`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::application::GeneratorOptions;
use anyhow::{Context, Result};
use std::env;

/// Largest accepted `SITEMAP_INDENT`.
pub const MAX_INDENT: usize = 8;

/// Generator configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spaces per nesting level; `0` writes a compact document.
    pub indent: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: 0,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SITEMAP_INDENT` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let indent = match env::var("SITEMAP_INDENT") {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("SITEMAP_INDENT must be a number, got '{value}'"))?,
            Err(_) => 0,
        };
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            indent,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `indent` is greater than [`MAX_INDENT`]
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.indent > MAX_INDENT {
            anyhow::bail!(
                "SITEMAP_INDENT must be between 0 and {MAX_INDENT}, got {}",
                self.indent
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Generator options derived from this configuration.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            indent: (self.indent > 0).then_some(self.indent),
        }
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        if self.indent > 0 {
            tracing::info!("  Indent: {} spaces", self.indent);
        } else {
            tracing::info!("  Indent: compact");
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the binary).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

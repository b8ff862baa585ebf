//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.bloglist.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".bloglist.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Blog list source settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path. Empty means stdout.
    #[serde(default)]
    pub output: String,
}

/// Where and how blog lists are loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Default input (file path, `-`, or URL) when `--input` is not given.
    #[serde(default)]
    pub input: String,

    /// Request timeout in seconds for remote sources.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Skip invalid records instead of failing.
    #[serde(default)]
    pub skip_invalid: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            input: String::new(),
            timeout_seconds: default_timeout(),
            skip_invalid: false,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of authors listed in the breakdown table.
    #[serde(default = "default_top_authors")]
    pub top_authors: usize,

    /// Include the per-author breakdown section.
    #[serde(default = "default_true")]
    pub include_breakdown: bool,

    /// List skipped records in the report.
    #[serde(default = "default_true")]
    pub include_skipped: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_authors: default_top_authors(),
            include_breakdown: true,
            include_skipped: true,
        }
    }
}

fn default_top_authors() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref input) = args.input {
            self.source.input = input.clone();
        }
        if let Some(timeout) = args.timeout {
            self.source.timeout_seconds = timeout;
        }
        if args.skip_invalid {
            self.source.skip_invalid = true;
        }

        if let Some(top) = args.top {
            self.report.top_authors = top;
        }

        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }
    }

    /// Check CLI flags that depend on the merged configuration.
    pub fn check_args(&self, args: &crate::cli::Args) -> Result<()> {
        if args.fail_on_skipped && !self.source.skip_invalid {
            anyhow::bail!(
                "--fail-on-skipped requires --skip-invalid or source.skip_invalid = true"
            );
        }
        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// bloglist - statistics for blog lists
///
/// Reads a JSON array of blog posts and reports total likes, the favorite
/// blog, the most prolific author and the most liked author.
///
/// Examples:
///   bloglist --input blogs.json
///   bloglist --input http://localhost:3003/api/blogs --format json
///   cat blogs.json | bloglist --input - --format text
///   bloglist --input blogs.json --skip-invalid --fail-on-skipped
///   bloglist --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Blog list to read: a JSON file, `-` for stdin, or an http(s) URL
    ///
    /// Falls back to `source.input` in .bloglist.toml when omitted.
    #[arg(short, long, value_name = "SOURCE", env = "BLOGLIST_INPUT")]
    pub input: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json, text)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .bloglist.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Request timeout in seconds for URL sources
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip records missing a title or url instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Exit with code 2 if any records were skipped
    ///
    /// Requires skip mode, from --skip-invalid or `source.skip_invalid`.
    #[arg(long)]
    pub fail_on_skipped: bool,

    /// Number of authors shown in the breakdown
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Generate a default .bloglist.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
    /// Short plain-text summary
    Text,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if let Some(ref input) = self.input {
            if input.trim().is_empty() {
                return Err("Input must not be empty".to_string());
            }
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        if let Some(top) = self.top {
            if top == 0 {
                return Err("--top must be at least 1".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Builds the log filter. A valid `RUST_LOG` value wins over the
    /// verbosity flags.
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| {
                EnvFilter::default().add_directive(LevelFilter::from_level(self.log_level()).into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            input: Some("blogs.json".to_string()),
            output: None,
            format: OutputFormat::Markdown,
            config: None,
            verbose: false,
            quiet: false,
            timeout: None,
            skip_invalid: false,
            fail_on_skipped: false,
            top: None,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = Args::try_parse_from([
            "bloglist",
            "--input",
            "-",
            "--format",
            "json",
            "--top",
            "3",
            "--skip-invalid",
        ])
        .unwrap();

        assert_eq!(args.input.as_deref(), Some("-"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.top, Some(3));
        assert!(args.skip_invalid);
    }

    #[test]
    fn test_validation_ok() {
        assert!(make_args().validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_zero_values() {
        let mut args = make_args();
        args.timeout = Some(0);
        assert!(args.validate().is_err());

        let mut args = make_args();
        args.top = Some(0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_leaves_fail_on_skipped_to_config() {
        let mut args = make_args();
        args.fail_on_skipped = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_init_config_skips_validation() {
        let mut args = make_args();
        args.init_config = true;
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_log_filter() {
        let mut args = make_args();
        args.verbose = true;
        assert!(args.log_filter(None).to_string().contains("debug"));
        assert!(args.log_filter(Some("")).to_string().contains("debug"));

        let filter = args.log_filter(Some("bloglist=trace"));
        assert!(filter.to_string().contains("bloglist=trace"));
    }
}

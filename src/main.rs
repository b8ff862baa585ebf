//! bloglist - blog list statistics
//!
//! A CLI tool that loads a blog list (file, stdin or URL) and reports
//! total likes, the favorite blog and the top authors.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (I/O, parse, validation, HTTP, config)
//!   2 - Records were skipped and --fail-on-skipped is set

use anyhow::{Context, Result};
use bloglist::analysis;
use bloglist::cli::{Args, OutputFormat};
use bloglist::config::{Config, CONFIG_FILE_NAME};
use bloglist::models::{ReportMetadata, StatsReport};
use bloglist::report;
use bloglist::source::{self, LoadOptions, PostSource};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // No logging needed to write a config file
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("bloglist v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            error!("Run failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .bloglist.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging from `RUST_LOG` or the verbosity settings.
///
/// Logs go to stderr so reports printed on stdout stay clean.
fn init_logging(args: &Args) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = args.log_filter(rust_log.as_deref());

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Load, aggregate and render. Returns the exit code (0 or 2).
async fn run(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    let mut config = load_config(&args)?;
    config.merge_with_args(&args);
    config.check_args(&args)?;

    if config.source.input.is_empty() {
        anyhow::bail!(
            "No input given. Pass --input or set source.input in {}",
            CONFIG_FILE_NAME
        );
    }

    let post_source = PostSource::parse(&config.source.input);
    let options = LoadOptions::from(&config.source);

    let loaded = source::load_posts(&post_source, &options)
        .await
        .with_context(|| format!("Failed to load blog list from {}", post_source))?;

    if !loaded.skipped.is_empty() {
        warn!("Skipped {} invalid records", loaded.skipped.len());
    }

    let stats = analysis::compute_stats(&loaded.posts);
    info!(
        "Aggregated {} posts ({} total likes)",
        stats.post_count, stats.total_likes
    );

    let authors = if config.report.include_breakdown {
        let breakdown = analysis::author_breakdown(&loaded.posts);
        analysis::top_authors(&breakdown, config.report.top_authors)
    } else {
        Vec::new()
    };

    let skipped_count = loaded.skipped.len();
    let skipped = if config.report.include_skipped {
        loaded.skipped
    } else {
        Vec::new()
    };

    let report = StatsReport {
        metadata: ReportMetadata {
            source: post_source.to_string(),
            generated_at: Utc::now(),
            posts_loaded: loaded.posts.len(),
            posts_skipped: skipped_count,
            duration_seconds: start_time.elapsed().as_secs_f64(),
        },
        stats,
        authors,
        skipped,
    };

    let output = match args.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Markdown => report::generate_markdown_report(&report),
        OutputFormat::Text => report::generate_summary_text(&report.stats),
    };

    if config.general.output.is_empty() {
        println!("{}", output);
    } else {
        let path = PathBuf::from(&config.general.output);
        report::write_report(&output, &path)?;
        info!("Report saved to {}", path.display());
    }

    if args.fail_on_skipped && skipped_count > 0 {
        eprintln!(
            "{} records were skipped. Failing (exit code 2).",
            skipped_count
        );
        return Ok(2);
    }

    Ok(0)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}

//! Report generation.
//!
//! This module renders a [`StatsReport`] as a Markdown document, as
//! pretty-printed JSON, or as a short plain-text summary for the console.

use crate::models::{AuthorSummary, BlogStats, ReportMetadata, SkippedPost, StatsReport};
use anyhow::{Context, Result};
use std::path::Path;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &StatsReport) -> String {
    let mut output = String::new();

    output.push_str("# Blog List Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_summary_section(&report.stats));
    output.push_str(&generate_authors_section(&report.authors));
    output.push_str(&generate_skipped_section(&report.skipped));
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** `{}`\n", metadata.source));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Posts Loaded:** {}\n", metadata.posts_loaded));
    if metadata.posts_skipped > 0 {
        section.push_str(&format!("- **Posts Skipped:** {}\n", metadata.posts_skipped));
    }
    section.push_str(&format!(
        "- **Duration:** {:.3}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Generate the headline statistics section.
fn generate_summary_section(stats: &BlogStats) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");
    section.push_str("| Posts | Total Likes |\n");
    section.push_str("|:---:|:---:|\n");
    section.push_str(&format!(
        "| {} | {} |\n\n",
        stats.post_count, stats.total_likes
    ));

    section.push_str("### Favorite Blog\n\n");
    match stats.favorite_blog {
        Some(ref favorite) => {
            section.push_str(&format!(
                "**{}** by {} ({} likes)\n\n",
                favorite.title,
                display_author(&favorite.author),
                favorite.likes
            ));
        }
        None => section.push_str("No posts to choose from.\n\n"),
    }

    section.push_str("### Top Authors\n\n");
    section.push_str("| Statistic | Author | Value |\n");
    section.push_str("|:---|:---|:---:|\n");
    section.push_str(&format!(
        "| Most blogs | {} | {} |\n",
        escape_cell(display_author(&stats.most_blogs.author)),
        stats.most_blogs.blogs
    ));
    section.push_str(&format!(
        "| Most likes | {} | {} |\n\n",
        escape_cell(display_author(&stats.most_likes.author)),
        stats.most_likes.likes
    ));

    section
}

/// Generate the per-author breakdown table.
fn generate_authors_section(authors: &[AuthorSummary]) -> String {
    if authors.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Authors\n\n");
    section.push_str("| Author | Blogs | Likes |\n");
    section.push_str("|:---|:---:|:---:|\n");

    for row in authors {
        section.push_str(&format!(
            "| {} | {} | {} |\n",
            escape_cell(display_author(&row.author)),
            row.blogs,
            row.likes
        ));
    }
    section.push('\n');

    section
}

/// Generate the list of records rejected by validation.
fn generate_skipped_section(skipped: &[SkippedPost]) -> String {
    if skipped.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Skipped Records\n\n");
    for record in skipped {
        section.push_str(&format!("- Record {}: {}\n", record.index, record.reason));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    format!(
        "---\n\n*Report generated by bloglist v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}

fn display_author(author: &str) -> &str {
    if author.is_empty() {
        "(none)"
    } else {
        author
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Generate a JSON report.
pub fn generate_json_report(report: &StatsReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Generate a short plain-text summary of the statistics.
pub fn generate_summary_text(stats: &BlogStats) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Posts: {}", stats.post_count));
    lines.push(format!("Total likes: {}", stats.total_likes));

    match stats.favorite_blog {
        Some(ref favorite) => lines.push(format!(
            "Favorite blog: \"{}\" by {} ({} likes)",
            favorite.title,
            display_author(&favorite.author),
            favorite.likes
        )),
        None => lines.push("Favorite blog: -".to_string()),
    }

    lines.push(format!(
        "Most blogs: {} ({})",
        display_author(&stats.most_blogs.author),
        stats.most_blogs.blogs
    ));
    lines.push(format!(
        "Most likes: {} ({})",
        display_author(&stats.most_likes.author),
        stats.most_likes.likes
    ));

    lines.join("\n")
}

/// Write rendered report content to a file.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

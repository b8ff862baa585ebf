//! Data models for blog-list statistics.
//!
//! This module contains the blog record consumed by the aggregator and
//! the summary records and report structures derived from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single blog entry as returned by the blog-list service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Document identifier assigned by the store, if any.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title of the post.
    pub title: String,
    /// Author name, compared verbatim when grouping. Missing or null means empty.
    #[serde(default, deserialize_with = "author_or_empty")]
    pub author: String,
    /// Link to the post.
    pub url: String,
    /// Like count. Missing or null means zero.
    #[serde(default, deserialize_with = "likes_or_zero")]
    pub likes: i64,
}

fn likes_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

fn author_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl BlogPost {
    /// Creates a post without a store identifier.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        likes: i64,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes,
        }
    }
}

/// The post with the most likes, projected down to the reported fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: i64,
}

impl From<&BlogPost> for FavoriteBlog {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            likes: post.likes,
        }
    }
}

/// Number of posts written by one author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorTotal {
    pub author: String,
    pub blogs: usize,
}

/// Sum of likes across one author's posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

/// Per-author row combining post count and like total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub author: String,
    pub blogs: usize,
    pub likes: i64,
}

/// All headline statistics for one blog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogStats {
    /// Number of posts aggregated.
    pub post_count: usize,
    /// Sum of likes over every post.
    pub total_likes: i64,
    /// Most liked post; absent for an empty list.
    pub favorite_blog: Option<FavoriteBlog>,
    /// Author with the most posts.
    pub most_blogs: AuthorTotal,
    /// Author with the most likes.
    pub most_likes: AuthorLikes,
}

/// A record that was dropped during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPost {
    /// Position of the record in the input array (0-indexed).
    pub index: usize,
    /// Why it was rejected.
    pub reason: String,
}

/// Metadata about a statistics report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Where the blog list came from (path, `-`, or URL).
    pub source: String,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Number of posts that passed validation.
    pub posts_loaded: usize,
    /// Number of posts rejected by validation.
    pub posts_skipped: usize,
    /// Load plus aggregation time in seconds.
    pub duration_seconds: f64,
}

/// The complete statistics report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub metadata: ReportMetadata,
    pub stats: BlogStats,
    /// Top authors by likes.
    pub authors: Vec<AuthorSummary>,
    /// Records rejected by validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedPost>,
}

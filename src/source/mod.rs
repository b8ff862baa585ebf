//! Blog list loading and validation.
//!
//! A blog list is a JSON array of post objects, read from a file, from
//! stdin, or fetched from a remote endpoint such as `GET /api/blogs`.
//! Each entry is checked with the same rules the blog service applies
//! when a post is created.

use crate::error::{Error, Result};
use crate::models::{BlogPost, SkippedPost};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Options controlling how a blog list is loaded.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Drop invalid records instead of failing the whole load.
    pub skip_invalid: bool,
    /// Timeout for remote requests.
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_invalid: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&crate::config::SourceConfig> for LoadOptions {
    fn from(config: &crate::config::SourceConfig) -> Self {
        Self {
            skip_invalid: config.skip_invalid,
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// Where a blog list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON piped on standard input.
    Stdin,
    /// An HTTP(S) endpoint returning a JSON array.
    Url(String),
}

impl PostSource {
    /// Interpret a `--input` value: `-` is stdin, `http(s)://` is a URL,
    /// anything else is a file path.
    pub fn parse(input: &str) -> Self {
        if input == "-" {
            PostSource::Stdin
        } else if input.starts_with("http://") || input.starts_with("https://") {
            PostSource::Url(input.to_string())
        } else {
            PostSource::File(PathBuf::from(input))
        }
    }

    /// Read the source and parse it into raw JSON entries.
    pub async fn load_raw(&self, options: &LoadOptions) -> Result<Vec<Value>> {
        let body = match self {
            PostSource::File(path) => {
                debug!("Reading blog list from {}", path.display());
                tokio::fs::read_to_string(path).await?
            }
            PostSource::Stdin => {
                debug!("Reading blog list from stdin");
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            }
            PostSource::Url(url) => fetch(url, options.timeout).await?,
        };

        parse_entries(&body)
    }
}

impl fmt::Display for PostSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostSource::File(path) => write!(f, "{}", path.display()),
            PostSource::Stdin => write!(f, "-"),
            PostSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Posts that passed validation, plus the ones that were dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadedPosts {
    pub posts: Vec<BlogPost>,
    pub skipped: Vec<SkippedPost>,
}

/// Load and validate a blog list, keeping the input order.
pub async fn load_posts(source: &PostSource, options: &LoadOptions) -> Result<LoadedPosts> {
    let entries = source.load_raw(options).await?;
    info!("Read {} records from {}", entries.len(), source);
    validate_entries(entries, options.skip_invalid)
}

/// Validate raw entries in order.
///
/// In strict mode the first invalid entry aborts with
/// [`Error::InvalidPost`]; otherwise it is recorded and skipped.
pub fn validate_entries(entries: Vec<Value>, skip_invalid: bool) -> Result<LoadedPosts> {
    let mut loaded = LoadedPosts::default();

    for (index, entry) in entries.into_iter().enumerate() {
        match validate_post(entry, index) {
            Ok(post) => loaded.posts.push(post),
            Err(Error::InvalidPost { index, reason }) if skip_invalid => {
                warn!("Skipping record {}: {}", index, reason);
                loaded.skipped.push(SkippedPost { index, reason });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(loaded)
}

/// Check one entry against the create-post rules and convert it.
///
/// A title is required first, then a url. Missing likes become zero.
pub fn validate_post(entry: Value, index: usize) -> Result<BlogPost> {
    let invalid = |reason: &str| Error::InvalidPost {
        index,
        reason: reason.to_string(),
    };

    let Some(object) = entry.as_object() else {
        return Err(invalid("Expected an object"));
    };

    for field in ["title", "url"] {
        check_text_field(object.get(field), field).map_err(|reason| invalid(&reason))?;
    }

    serde_json::from_value(entry).map_err(|e| invalid(&e.to_string()))
}

/// Absent, null and empty values are missing; other non-strings are a type error.
fn check_text_field(value: Option<&Value>, field: &str) -> std::result::Result<(), String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(()),
        None | Some(Value::Null) | Some(Value::String(_)) => Err(format!("Missing {}", field)),
        Some(other) => Err(format!(
            "Invalid {}: expected a string, got {}",
            field,
            json_type_name(other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_entries(body: &str) -> Result<Vec<Value>> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    Ok(entries)
}

async fn fetch(url: &str, timeout: Duration) -> Result<String> {
    info!("Fetching blog list from {}", url);

    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(status.as_u16()));
    }

    Ok(response.text().await?)
}

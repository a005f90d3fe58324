use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or looking up articles.
///
/// Every variant names the file or slug it concerns so a scan report can be
/// printed without extra context.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Malformed JSON in '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid article schema in '{}': {reason}", .path.display())]
    InvalidSchema { path: PathBuf, reason: String },

    #[error(
        "Duplicate slug '{slug}': '{}' shadows '{}'",
        .duplicate.display(),
        .first.display()
    )]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        duplicate: PathBuf,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ArticleError {
    /// The file this error points at, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ArticleError::Io { path, .. }
            | ArticleError::Walk { path, .. }
            | ArticleError::Parse { path, .. }
            | ArticleError::InvalidSchema { path, .. } => Some(path),
            ArticleError::DuplicateSlug { duplicate, .. } => Some(duplicate),
            ArticleError::NotFound(_) | ArticleError::Config(_) => None,
        }
    }
}

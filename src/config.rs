use std::path::PathBuf;

use url::Url;

use crate::error::ArticleError;

pub const DEFAULT_CONTENT_ROOT: &str = "data/articles";
pub const DEFAULT_BASE_URL: &str = "https://www.outlawgames.app";
pub const DEFAULT_SITE_NAME: &str = "Outlaw Games";

/// Site-wide settings shared by the store and the SEO helpers.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding the article JSON files.
    pub content_root: PathBuf,
    /// Public origin used for canonical and Open Graph URLs.
    pub base_url: Url,
    /// Name advertised as the Open Graph site name.
    pub site_name: String,
}

/// Values that take precedence over the environment, e.g. CLI flags.
#[derive(Debug, Clone, Default)]
pub struct SiteOverrides {
    pub content_root: Option<PathBuf>,
    pub base_url: Option<String>,
    pub site_name: Option<String>,
}

impl SiteConfig {
    /// Build the config from environment variables.
    ///
    /// Optional env vars:
    /// - `ARTICLES_DIR` (default `data/articles`)
    /// - `SITE_BASE_URL` (default `https://www.outlawgames.app`)
    /// - `SITE_NAME` (default `Outlaw Games`)
    pub fn from_env() -> Result<Self, ArticleError> {
        Self::from_env_with(SiteOverrides::default())
    }

    /// Like [`SiteConfig::from_env`], but a field set in `overrides` is used
    /// as is and its env var is never read.
    pub fn from_env_with(overrides: SiteOverrides) -> Result<Self, ArticleError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve every field from `overrides` first, then `lookup`, then the
    /// built-in default.
    pub fn from_lookup<F>(overrides: SiteOverrides, lookup: F) -> Result<Self, ArticleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_root = overrides.content_root.unwrap_or_else(|| {
            lookup("ARTICLES_DIR")
                .unwrap_or_else(|| DEFAULT_CONTENT_ROOT.to_string())
                .into()
        });
        let base_url = overrides
            .base_url
            .or_else(|| lookup("SITE_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let site_name = overrides
            .site_name
            .or_else(|| lookup("SITE_NAME"))
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());

        Ok(Self {
            content_root,
            base_url: parse_base_url(&base_url)?,
            site_name,
        })
    }

    /// Build with explicit values (useful for testing).
    pub fn new(content_root: impl Into<PathBuf>, base_url: Url, site_name: String) -> Self {
        Self {
            content_root: content_root.into(),
            base_url,
            site_name,
        }
    }
}

/// Parse a site origin. Only absolute `http`/`https` URLs are accepted.
pub fn parse_base_url(raw: &str) -> Result<Url, ArticleError> {
    let url = Url::parse(raw)
        .map_err(|e| ArticleError::Config(format!("Invalid base URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ArticleError::Config(format!(
            "Base URL '{}' must use http or https, not '{}'",
            raw, other
        ))),
    }
}

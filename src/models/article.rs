use std::fmt;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ArticleError;

/// One body section of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSection {
    pub heading: String,
    /// Paragraphs separated by blank lines. A paragraph of the form
    /// `label: value` is rendered as a highlighted label by the page layer.
    pub content: String,
}

/// A question/answer pair shown in the FAQ block and in the FAQ JSON-LD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFaq {
    pub question: String,
    pub answer: String,
}

/// The editorial category of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "SEO/GEO")]
    SeoGeo,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SeoGeo => "SEO/GEO",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An article as stored on disk, one JSON object per file.
///
/// Date fields keep the stored text verbatim; use [`Article::published_at`]
/// and [`Article::last_updated_at`] for parsed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier, also the file stem and the URL path segment.
    pub slug: String,
    pub meta_title: String,
    pub meta_description: String,
    pub title: String,
    pub intro: String,
    pub sections: Vec<ArticleSection>,
    #[serde(default)]
    pub faqs: Vec<ArticleFaq>,
    pub conclusion: String,
    pub category: Category,
    pub published_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Article {
    /// Parsed `publishedDate`. `None` only for records that skipped validation.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_calendar_date(&self.published_date)
    }

    /// Parsed `lastUpdated`, if present and well formed.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated.as_deref().and_then(parse_calendar_date)
    }

    /// The modification date to advertise: `lastUpdated`, or `publishedDate`
    /// when the article was never revised.
    pub fn modified_date(&self) -> &str {
        self.last_updated
            .as_deref()
            .unwrap_or(&self.published_date)
    }

    pub fn is_featured(&self) -> bool {
        self.featured == Some(true)
    }

    /// Check the invariants serde cannot express.
    ///
    /// `expected_slug` is the stem of the file the article was read from;
    /// lookups by slug only work when the two agree.
    pub fn validate(&self, expected_slug: Option<&str>) -> Result<(), String> {
        if self.slug.trim().is_empty() {
            return Err("slug is empty".into());
        }
        if let Some(expected) = expected_slug {
            if self.slug != expected {
                return Err(format!(
                    "slug '{}' does not match file name '{}.json'",
                    self.slug, expected
                ));
            }
        }
        if self.title.trim().is_empty() {
            return Err("title is empty".into());
        }
        if self.published_at().is_none() {
            return Err(format!(
                "publishedDate '{}' is not a valid date",
                self.published_date
            ));
        }
        if let Some(updated) = &self.last_updated {
            if parse_calendar_date(updated).is_none() {
                return Err(format!("lastUpdated '{}' is not a valid date", updated));
            }
        }
        if let Some(pos) = self.sections.iter().position(|s| s.heading.trim().is_empty()) {
            return Err(format!("section {} has an empty heading", pos));
        }
        if let Some(pos) = self.faqs.iter().position(|f| f.question.trim().is_empty()) {
            return Err(format!("faq {} has an empty question", pos));
        }
        Ok(())
    }
}

/// Parse the date formats accepted in article files.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` (read as UTC) and bare
/// `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_calendar_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Read, parse and validate a single article file.
///
/// Syntax errors surface as [`ArticleError::Parse`]; well-formed JSON with
/// the wrong shape or failing [`Article::validate`] as
/// [`ArticleError::InvalidSchema`].
pub fn load_article(path: &Path) -> Result<Article, ArticleError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArticleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| ArticleError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let article: Article =
        serde_json::from_value(value).map_err(|e| ArticleError::InvalidSchema {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let stem = path.file_stem().and_then(|s| s.to_str());
    article
        .validate(stem)
        .map_err(|reason| ArticleError::InvalidSchema {
            path: path.to_path_buf(),
            reason,
        })?;

    Ok(article)
}

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use outlaw_articles::FsArticleStore;

/// A throwaway content root on disk.
///
/// The directory is removed when this struct is dropped.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// A store pointed at this fixture's root.
    pub fn store(&self) -> FsArticleStore {
        FsArticleStore::new(self.root())
    }

    /// Write raw text at `rel`, creating grouping folders as needed.
    pub fn write_raw(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create group dir");
        }
        std::fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// Write an article JSON document at `rel`.
    pub fn write_json(&self, rel: &str, value: &serde_json::Value) -> PathBuf {
        self.write_raw(
            rel,
            &serde_json::to_string_pretty(value).expect("Failed to serialize fixture"),
        )
    }

    /// Write a valid article whose file name matches its slug.
    pub fn add(&self, group: Option<&str>, slug: &str, date: &str, featured: Option<bool>) -> PathBuf {
        let rel = match group {
            Some(group) => format!("{}/{}.json", group, slug),
            None => format!("{}.json", slug),
        };
        self.write_json(&rel, &article_json(slug, date, featured))
    }
}

/// A complete, valid article document.
pub fn article_json(slug: &str, date: &str, featured: Option<bool>) -> serde_json::Value {
    let mut value = serde_json::json!({
        "slug": slug,
        "metaTitle": format!("{} | Outlaw Games", slug),
        "metaDescription": format!("Everything about {}", slug),
        "title": format!("Article {}", slug),
        "intro": "Players want to find us.",
        "sections": [
            { "heading": "Overview", "content": "First paragraph.\n\nReach: global" },
            { "heading": "Details", "content": "More text." }
        ],
        "faqs": [
            { "question": "Is this useful?", "answer": "Yes." }
        ],
        "conclusion": "That is all.",
        "category": "SEO/GEO",
        "publishedDate": date
    });
    if let Some(featured) = featured {
        value["featured"] = featured.into();
    }
    value
}

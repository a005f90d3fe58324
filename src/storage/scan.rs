use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ArticleError;
use crate::models::article::{load_article, Article};

/// Extension of article files, without the dot.
pub const ARTICLE_EXTENSION: &str = "json";

/// Outcome of visiting one file (or one unreadable directory) in the tree.
#[derive(Debug)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub outcome: Result<Article, ArticleError>,
}

/// Articles and problems gathered from a scan.
#[derive(Debug, Default)]
pub struct Collected {
    /// Valid, de-duplicated articles, most recently published first.
    pub articles: Vec<Article>,
    /// Everything that was skipped, in walk order.
    pub errors: Vec<ArticleError>,
}

/// Walk `root` recursively and load every `*.json` file.
///
/// Entries are visited in file-name order. A missing root yields no entries.
/// An unreadable directory yields a single [`ArticleError::Walk`] entry and
/// its subtree is skipped.
pub fn scan_tree(root: &Path) -> Vec<ScanEntry> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut entries = Vec::new();
    for item in article_files(root) {
        match item {
            Ok(path) => {
                let outcome = load_article(&path);
                entries.push(ScanEntry { path, outcome });
            }
            Err(err) => {
                let err = walk_error(root, err);
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                entries.push(ScanEntry {
                    path,
                    outcome: Err(err),
                });
            }
        }
    }

    entries
}

/// Files named `<slug>.json` found under a root, plus the walk failures met
/// on the way.
#[derive(Debug, Default)]
pub struct SlugMatches {
    /// Matching paths, in walk order.
    pub paths: Vec<PathBuf>,
    /// Unreadable entries; a match inside them cannot be seen.
    pub errors: Vec<ArticleError>,
}

/// Find every file under `root` whose name is exactly `<slug>.json`.
pub fn find_slug_files(root: &Path, slug: &str) -> SlugMatches {
    let mut found = SlugMatches::default();
    if !root.is_dir() {
        return found;
    }

    let wanted = format!("{}.{}", slug, ARTICLE_EXTENSION);
    for item in article_files(root) {
        match item {
            Ok(path) => {
                if path.file_name().and_then(|n| n.to_str()) == Some(wanted.as_str()) {
                    found.paths.push(path);
                }
            }
            Err(err) => found.errors.push(walk_error(root, err)),
        }
    }
    found
}

/// Keep the first valid article per slug and sort by publication date,
/// newest first. Later copies of a slug become [`ArticleError::DuplicateSlug`].
///
/// The sort is stable, so articles published at the same instant keep the
/// order in which the walk produced them.
pub fn collect_articles(entries: Vec<ScanEntry>) -> Collected {
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut collected = Collected::default();

    for entry in entries {
        match entry.outcome {
            Ok(article) => {
                if let Some(first) = seen.get(&article.slug) {
                    collected.errors.push(ArticleError::DuplicateSlug {
                        slug: article.slug,
                        first: first.clone(),
                        duplicate: entry.path,
                    });
                    continue;
                }
                seen.insert(article.slug.clone(), entry.path);
                collected.articles.push(article);
            }
            Err(err) => collected.errors.push(err),
        }
    }

    sort_newest_first(&mut collected.articles);
    collected
}

/// Stable sort by `publishedDate`, descending. Unparseable dates sort last.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
}

fn walk_error(root: &Path, source: walkdir::Error) -> ArticleError {
    let path = source
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    ArticleError::Walk { path, source }
}

fn article_files(root: &Path) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|item| match item {
            Ok(entry) => {
                let is_article = entry.file_type().is_file()
                    && entry.path().extension().and_then(|e| e.to_str())
                        == Some(ARTICLE_EXTENSION);
                is_article.then(|| Ok(entry.into_path()))
            }
            Err(err) => Some(Err(err)),
        })
}

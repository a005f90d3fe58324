use std::path::{Component, Path, PathBuf};

use crate::error::ArticleError;
use crate::models::article::{load_article, Article};
use crate::repository::ArticleRepository;
use crate::storage::scan::{collect_articles, find_slug_files, scan_tree, Collected, SlugMatches};

/// Article repository backed by a directory of JSON files.
///
/// Files may sit directly under the root or in grouping folders
/// (e.g. `2025-01/hello-world.json`). Nothing is cached: every call walks
/// the tree again.
#[derive(Debug, Clone)]
pub struct FsArticleStore {
    root: PathBuf,
}

impl FsArticleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and return every article together with every problem
    /// found, without logging anything.
    pub fn scan(&self) -> Collected {
        collect_articles(scan_tree(&self.root))
    }
}

impl ArticleRepository for FsArticleStore {
    fn list_all(&self) -> Vec<Article> {
        let Collected { articles, errors } = self.scan();
        for err in &errors {
            tracing::warn!("Skipping article: {}", err);
        }
        tracing::debug!(
            "Loaded {} article(s) from '{}' ({} skipped)",
            articles.len(),
            self.root.display(),
            errors.len()
        );
        articles
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, ArticleError> {
        if !is_plain_slug(slug) {
            tracing::debug!("Rejecting lookup of unsafe slug '{}'", slug);
            return Ok(None);
        }

        let SlugMatches { paths, errors } = find_slug_files(&self.root, slug);
        for err in &errors {
            tracing::warn!("Skipping unreadable entry while looking up '{}': {}", slug, err);
        }

        // Same policy as `collect_articles`: the first valid copy in walk
        // order wins, later copies are reported as duplicates.
        let mut found: Option<(PathBuf, Article)> = None;
        let mut first_error = None;
        for path in paths {
            let article = match load_article(&path) {
                Ok(article) => article,
                Err(err) => {
                    tracing::warn!("Skipping article: {}", err);
                    first_error.get_or_insert(err);
                    continue;
                }
            };
            if let Some((first, _)) = &found {
                let duplicate = ArticleError::DuplicateSlug {
                    slug: slug.to_string(),
                    first: first.clone(),
                    duplicate: path,
                };
                tracing::warn!("Ignoring article: {}", duplicate);
                continue;
            }
            found = Some((path, article));
        }

        match (found, first_error) {
            (Some((_, article)), _) => Ok(Some(article)),
            (None, Some(err)) => Err(err),
            (None, None) => Ok(None),
        }
    }
}

/// A slug must be a single, ordinary path component.
fn is_plain_slug(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !slug.contains(['/', '\\'])
}

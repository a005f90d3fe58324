use crate::error::ArticleError;
use crate::models::article::Article;

/// Number of featured articles shown by default.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;
/// Number of recent articles shown by default.
pub const DEFAULT_RECENT_LIMIT: usize = 6;
/// Number of articles in the home page "Articles" block.
pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 3;

/// Read-only access to the article corpus.
///
/// Implementations re-read their backing storage on every call. The query
/// helpers are provided methods built on [`ArticleRepository::list_all`], so
/// a test double only needs the two required methods.
pub trait ArticleRepository: Send + Sync {
    /// All valid articles, most recently published first. Never fails:
    /// unreadable or invalid entries are left out.
    fn list_all(&self) -> Vec<Article>;

    /// Look up one article by slug.
    ///
    /// Returns `Ok(None)` when no article has that slug.
    fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, ArticleError>;

    /// Like [`ArticleRepository::find_by_slug`], but any error is logged and
    /// reported as not found.
    fn get_by_slug(&self, slug: &str) -> Option<Article> {
        match self.find_by_slug(slug) {
            Ok(article) => article,
            Err(e) => {
                tracing::warn!("Article '{}' unavailable: {}", slug, e);
                None
            }
        }
    }

    /// Like [`ArticleRepository::find_by_slug`], but absence is an error too.
    fn require_by_slug(&self, slug: &str) -> Result<Article, ArticleError> {
        self.find_by_slug(slug)?
            .ok_or_else(|| ArticleError::NotFound(format!("article '{}'", slug)))
    }

    /// The first `limit` featured articles. Never padded with others.
    fn featured(&self, limit: usize) -> Vec<Article> {
        self.list_all()
            .into_iter()
            .filter(Article::is_featured)
            .take(limit)
            .collect()
    }

    /// The `limit` most recently published articles.
    fn recent(&self, limit: usize) -> Vec<Article> {
        let mut articles = self.list_all();
        articles.truncate(limit);
        articles
    }

    /// Home page selection: featured articles when there are at least
    /// `limit` of them, the most recent ones otherwise.
    fn highlighted(&self, limit: usize) -> Vec<Article> {
        let all = self.list_all();
        let featured: Vec<Article> = all
            .iter()
            .filter(|a| a.is_featured())
            .take(limit)
            .cloned()
            .collect();
        if featured.len() >= limit {
            featured
        } else {
            all.into_iter().take(limit).collect()
        }
    }

    /// Slugs of [`ArticleRepository::list_all`], in the same order. Used to
    /// enumerate the article pages a static build has to generate.
    fn slugs(&self) -> Vec<String> {
        self.list_all().into_iter().map(|a| a.slug).collect()
    }
}

use url::Url;

/// Path prefix under which article pages are served.
pub const ARTICLES_PATH: &str = "/articles";

/// Relative URL of an article page: `/articles/<slug>`.
///
/// Pure formatting; the slug is not checked against the store.
pub fn article_url(slug: &str) -> String {
    format!("{}/{}", ARTICLES_PATH, slug)
}

/// Absolute URL of an article page, resolved against the site origin.
///
/// Any path on `base` is replaced, matching how the site builds canonical
/// links from its origin.
pub fn canonical_article_url(base: &Url, slug: &str) -> String {
    let relative = article_url(slug);
    match base.join(&relative) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", base.as_str().trim_end_matches('/'), relative),
    }
}

/// Extract the slug from an article page link.
///
/// Accepts relative (`/articles/slug`) and absolute links, ignoring query
/// strings, fragments and trailing slashes. Returns `None` for links that do
/// not point at an article page.
pub fn slug_from_article_link(link: &str) -> Option<String> {
    let path = match Url::parse(link) {
        Ok(url) => url.path().to_string(),
        Err(_) => link.to_string(),
    };

    let without_fragment = path.split(['#', '?']).next().unwrap_or("");
    let rest = without_fragment
        .trim_start_matches('/')
        .strip_prefix("articles/")?;
    let slug = rest.trim_end_matches('/');

    if slug.is_empty() || slug.contains('/') {
        None
    } else {
        Some(slug.to_string())
    }
}

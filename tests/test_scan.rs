mod common;

use outlaw_articles::error::ArticleError;
use outlaw_articles::models::article::load_article;
use outlaw_articles::storage::scan::{collect_articles, find_slug_files, scan_tree};

use common::{article_json, Fixture};

#[test]
fn scan_reports_every_json_file_with_its_outcome() {
    let fx = Fixture::new();
    let good = fx.add(Some("2025-01"), "good", "2025-01-01", None);
    let bad = fx.write_raw("2025-01/bad.json", "[1, 2,");
    fx.write_raw("2025-01/readme.md", "# not an article");
    fx.write_raw("2025-01/draft.json.bak", "{}");

    let entries = scan_tree(fx.root());
    let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();
    assert_eq!(paths, vec![bad.clone(), good.clone()]);

    assert!(matches!(entries[0].outcome, Err(ArticleError::Parse { .. })));
    assert_eq!(entries[0].outcome.as_ref().unwrap_err().path(), Some(bad.as_path()));
    assert_eq!(entries[1].outcome.as_ref().unwrap().slug, "good");
}

#[test]
fn scan_of_a_file_root_is_empty() {
    let fx = Fixture::new();
    let file = fx.add(None, "lonely", "2025-01-01", None);
    assert!(scan_tree(&file).is_empty());
}

#[test]
fn collect_separates_articles_from_errors() {
    let fx = Fixture::new();
    fx.add(Some("a"), "one", "2025-01-01", None);
    fx.add(Some("b"), "two", "2025-03-01", None);
    fx.add(Some("c"), "one", "2025-02-01", None);
    fx.write_json("d/three.json", &serde_json::json!({ "slug": "three" }));

    let collected = collect_articles(scan_tree(fx.root()));
    let slugs: Vec<_> = collected.articles.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["two", "one"]);
    assert_eq!(collected.errors.len(), 2);
    assert!(matches!(collected.errors[0], ArticleError::DuplicateSlug { .. }));
    assert!(matches!(collected.errors[1], ArticleError::InvalidSchema { .. }));
}

#[test]
fn find_slug_files_matches_exact_names_only() {
    let fx = Fixture::new();
    let hit = fx.add(Some("2025-01"), "guide", "2025-01-01", None);
    fx.add(Some("2025-01"), "guide-extended", "2025-01-02", None);
    fx.write_raw("2025-02/guide.json.bak", "{}");

    let found = find_slug_files(fx.root(), "guide");
    assert_eq!(found.paths, vec![hit]);
    assert!(found.errors.is_empty());
    assert!(find_slug_files(fx.root(), "missing").paths.is_empty());
}

#[cfg(unix)]
#[test]
fn find_slug_files_collects_walk_errors() {
    let fx = Fixture::new();
    let hit = fx.add(Some("2025-01"), "guide", "2025-01-01", None);
    std::os::unix::fs::symlink(fx.root(), fx.root().join("2025-01/loop")).unwrap();

    let found = find_slug_files(fx.root(), "guide");
    assert_eq!(found.paths, vec![hit]);
    match &found.errors[..] {
        [ArticleError::Walk { .. }] => {}
        other => panic!("Expected one Walk error, got: {:?}", other),
    }
}

#[test]
fn load_article_reads_io_errors() {
    let fx = Fixture::new();
    match load_article(&fx.root().join("absent.json")) {
        Err(ArticleError::Io { path, .. }) => assert!(path.ends_with("absent.json")),
        other => panic!("Expected Io error, got: {:?}", other),
    }
}

#[test]
fn load_article_accepts_timestamps() {
    let fx = Fixture::new();
    let path = fx.write_json(
        "stamped.json",
        &article_json("stamped", "2025-04-01T09:30:00Z", Some(false)),
    );
    let article = load_article(&path).unwrap();
    assert_eq!(article.published_date, "2025-04-01T09:30:00Z");
    assert!(article.published_at().is_some());
    assert!(!article.is_featured());
}

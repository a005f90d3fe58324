use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use outlaw_articles::config::SiteOverrides;
use outlaw_articles::rendering::links::{article_url, canonical_article_url, slug_from_article_link};
use outlaw_articles::rendering::seo::{faq_json_ld, PageMetadata};
use outlaw_articles::repository::{
    DEFAULT_FEATURED_LIMIT, DEFAULT_HIGHLIGHT_LIMIT, DEFAULT_RECENT_LIMIT,
};
use outlaw_articles::{Article, ArticleRepository, FsArticleStore, SiteConfig};

/// Inspect and check the article corpus of the Outlaw Games website.
#[derive(Debug, Parser)]
#[command(name = "outlaw-articles", version, about)]
struct Cli {
    /// Article content root (overrides ARTICLES_DIR)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Public site origin (overrides SITE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Site name used in page metadata (overrides SITE_NAME)
    #[arg(long, global = true)]
    site_name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every article, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print one article as JSON (accepts a slug or an article link)
    Show { slug: String },
    /// List featured articles
    Featured {
        #[arg(long, default_value_t = DEFAULT_FEATURED_LIMIT)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// List the most recent articles
    Recent {
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// List the home page selection (featured, or recent as a fallback)
    Highlighted {
        #[arg(long, default_value_t = DEFAULT_HIGHLIGHT_LIMIT)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Print all slugs, one per line
    Slugs,
    /// Print the URL of an article page
    Url {
        slug: String,
        /// Print the canonical absolute URL
        #[arg(long)]
        absolute: bool,
    },
    /// Print page metadata and FAQ structured data for an article
    Meta { slug: String },
    /// Validate every article file; fails if any problem is found
    Check,
}

/// How a command ended, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok,
    NotFound,
    Problems,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => ExitCode::SUCCESS,
            Status::NotFound => ExitCode::from(1),
            Status::Problems => ExitCode::from(2),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetaOutput {
    metadata: PageMetadata,
    json_ld: serde_json::Value,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outlaw_articles=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(cli, &mut out) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Flags win over env vars; an env var is only read when its flag is absent.
fn site_overrides(cli: &Cli) -> SiteOverrides {
    SiteOverrides {
        content_root: cli.root.clone(),
        base_url: cli.base_url.clone(),
        site_name: cli.site_name.clone(),
    }
}

fn site_config(cli: &Cli) -> Result<SiteConfig> {
    SiteConfig::from_env_with(site_overrides(cli)).context("Failed to read site configuration")
}

/// Accept either a bare slug or a link to an article page.
fn resolve_slug(arg: &str) -> String {
    slug_from_article_link(arg).unwrap_or_else(|| arg.to_string())
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<Status> {
    let config = site_config(&cli)?;
    let store = FsArticleStore::new(config.content_root.clone());
    tracing::debug!("Reading articles from '{}'", store.root().display());

    match cli.command {
        Command::List { json } => print_articles(out, &store.list_all(), json)?,
        Command::Featured { limit, json } => print_articles(out, &store.featured(limit), json)?,
        Command::Recent { limit, json } => print_articles(out, &store.recent(limit), json)?,
        Command::Highlighted { limit, json } => {
            print_articles(out, &store.highlighted(limit), json)?
        }
        Command::Slugs => {
            for slug in store.slugs() {
                writeln!(out, "{}", slug)?;
            }
        }
        Command::Show { slug } => {
            let slug = resolve_slug(&slug);
            let Some(article) = store.get_by_slug(&slug) else {
                eprintln!("Article '{}' not found", slug);
                return Ok(Status::NotFound);
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&article)?)?;
        }
        Command::Url { slug, absolute } => {
            if absolute {
                writeln!(out, "{}", canonical_article_url(&config.base_url, &slug))?;
            } else {
                writeln!(out, "{}", article_url(&slug))?;
            }
        }
        Command::Meta { slug } => {
            let slug = resolve_slug(&slug);
            let output = match store.get_by_slug(&slug) {
                Some(article) => MetaOutput {
                    metadata: PageMetadata::for_article(&article, &config),
                    json_ld: faq_json_ld(&article),
                },
                None => {
                    writeln!(
                        out,
                        "{}",
                        serde_json::to_string_pretty(&PageMetadata::not_found())?
                    )?;
                    return Ok(Status::NotFound);
                }
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        Command::Check => return check(&store, out),
    }

    Ok(Status::Ok)
}

fn print_articles(out: &mut dyn Write, articles: &[Article], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(articles)?)?;
        return Ok(());
    }
    for article in articles {
        let marker = if article.is_featured() { "*" } else { " " };
        writeln!(
            out,
            "{} {}  {}  {}",
            marker, article.published_date, article.slug, article.title
        )?;
    }
    Ok(())
}

fn check(store: &FsArticleStore, out: &mut dyn Write) -> Result<Status> {
    let collected = store.scan();
    for err in &collected.errors {
        writeln!(out, "error: {}", err)?;
    }
    writeln!(
        out,
        "{} article(s), {} problem(s)",
        collected.articles.len(),
        collected.errors.len()
    )?;

    if collected.errors.is_empty() {
        Ok(Status::Ok)
    } else {
        Ok(Status::Problems)
    }
}

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::SiteConfig;
use crate::models::article::Article;
use crate::rendering::links::canonical_article_url;

pub const NOT_FOUND_TITLE: &str = "Article Not Found";

/// Head metadata for an article page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub published_time: String,
    pub modified_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    pub fn for_article(article: &Article, site: &SiteConfig) -> Self {
        let url = canonical_article_url(&site.base_url, &article.slug);
        Self {
            title: article.meta_title.clone(),
            description: Some(article.meta_description.clone()),
            canonical_url: Some(url.clone()),
            open_graph: Some(OpenGraph {
                title: article.meta_title.clone(),
                description: article.meta_description.clone(),
                url,
                site_name: site.site_name.clone(),
                kind: "article".to_string(),
                published_time: article.published_date.clone(),
                modified_time: article.modified_date().to_string(),
            }),
            twitter: Some(TwitterCard {
                card: "summary_large_image".to_string(),
                title: article.meta_title.clone(),
                description: article.meta_description.clone(),
            }),
        }
    }

    /// Metadata for a slug that has no article.
    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_string(),
            description: None,
            canonical_url: None,
            open_graph: None,
            twitter: None,
        }
    }
}

/// schema.org `FAQPage` structured data for an article's FAQ block.
pub fn faq_json_ld(article: &Article) -> Value {
    let questions: Vec<Value> = article
        .faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

pub mod config;
pub mod error;
pub mod models {
    pub mod article;
}
pub mod repository;
pub mod rendering {
    pub mod links;
    pub mod seo;
}
pub mod storage {
    pub mod fs;
    pub mod scan;
}

pub use config::SiteConfig;
pub use error::ArticleError;
pub use models::article::{Article, ArticleFaq, ArticleSection, Category};
pub use repository::ArticleRepository;
pub use storage::fs::FsArticleStore;

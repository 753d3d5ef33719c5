use pulse_core::{RawArticle, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Either a bare array of records or the `{"articles": [...]}` listing shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum ArticleDocument {
    List(Vec<RawArticle>),
    Listing { articles: Vec<RawArticle> },
}

pub fn parse_articles(json: &str) -> Result<Vec<RawArticle>> {
    let document: ArticleDocument = serde_json::from_str(json)?;
    Ok(match document {
        ArticleDocument::List(articles) => articles,
        ArticleDocument::Listing { articles } => articles,
    })
}

/// Reads raw articles from `path`, or from stdin when `path` is `-`.
pub fn read_articles(path: &Path) -> Result<Vec<RawArticle>> {
    let json = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    let articles = parse_articles(&json)?;
    info!("🗞️ Loaded {} raw articles from {}", articles.len(), path.display());
    Ok(articles)
}

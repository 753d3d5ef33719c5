use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::labels::{ArticleFilter, Category, FacetFilter, Sentiment};
use crate::types::{Article, RawArticle};
use crate::Result;

/// Outcome of one ingest batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub added: usize,
    pub updated: usize,
}

/// Per-label counts for both facets, every label present (zero included)
/// in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub total: usize,
    pub categories: Vec<(Category, usize)>,
    pub sentiments: Vec<(Sentiment, usize)>,
}

impl FacetCounts {
    pub fn category(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, count)| *count)
    }

    pub fn sentiment(&self, sentiment: Sentiment) -> usize {
        self.sentiments
            .iter()
            .find(|(s, _)| *s == sentiment)
            .map_or(0, |(_, count)| *count)
    }
}

/// A shareable article collection. Writes are applied atomically with
/// respect to reads.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Classify and upsert a batch of raw articles
    async fn ingest(&self, articles: Vec<RawArticle>) -> Result<IngestSummary>;

    /// Drop everything and ingest a fresh batch as one step
    async fn replace_all(&self, articles: Vec<RawArticle>) -> Result<IngestSummary>;

    /// Matching articles, most recent first
    async fn query(&self, filter: ArticleFilter) -> Result<Vec<Article>>;

    async fn get(&self, id: &str) -> Result<Option<Article>>;

    async fn remove(&self, id: &str) -> Result<Option<Article>>;

    async fn count_by_category(&self, category: FacetFilter<Category>) -> Result<usize>;

    async fn count_by_sentiment(&self, sentiment: FacetFilter<Sentiment>) -> Result<usize>;

    async fn facets(&self) -> Result<FacetCounts>;

    async fn clear(&self) -> Result<()>;
}

use async_trait::async_trait;
use pulse_core::{
    Article, ArticleFilter, ArticleStore, Category, FacetCounts, FacetFilter, IngestSummary, RawArticle, Result,
    Sentiment,
};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::index::ArticleIndex;
use crate::StorageBackend;

/// Shared handle to one [`ArticleIndex`]. Clones point at the same index.
/// Writers hold the lock for a whole batch, so readers see either the
/// collection before it or after it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    index: Arc<RwLock<ArticleIndex>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    fn name() -> &'static str {
        "memory"
    }

    async fn open() -> Result<Self> {
        Ok(Self::new())
    }
}

#[async_trait]
impl ArticleStore for MemoryStorage {
    async fn ingest(&self, articles: Vec<RawArticle>) -> Result<IngestSummary> {
        let mut index = self.index.write().await;
        Ok(index.ingest(articles))
    }

    async fn replace_all(&self, articles: Vec<RawArticle>) -> Result<IngestSummary> {
        let mut index = self.index.write().await;
        Ok(index.replace_all(articles))
    }

    async fn query(&self, filter: ArticleFilter) -> Result<Vec<Article>> {
        let index = self.index.read().await;
        Ok(index.query(&filter).into_iter().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Article>> {
        let index = self.index.read().await;
        Ok(index.get(id).cloned())
    }

    async fn remove(&self, id: &str) -> Result<Option<Article>> {
        let mut index = self.index.write().await;
        Ok(index.remove(id))
    }

    async fn count_by_category(&self, category: FacetFilter<Category>) -> Result<usize> {
        let index = self.index.read().await;
        Ok(index.count_by_category(category))
    }

    async fn count_by_sentiment(&self, sentiment: FacetFilter<Sentiment>) -> Result<usize> {
        let index = self.index.read().await;
        Ok(index.count_by_sentiment(sentiment))
    }

    async fn facets(&self) -> Result<FacetCounts> {
        let index = self.index.read().await;
        Ok(index.facets())
    }

    async fn clear(&self) -> Result<()> {
        let mut index = self.index.write().await;
        index.clear();
        Ok(())
    }
}

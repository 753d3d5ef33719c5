//! In-memory article index with facet counts.

use std::collections::HashMap;

use pulse_core::{
    annotate, Article, ArticleFilter, Category, FacetCounts, FacetFilter, IngestSummary, RawArticle, Sentiment,
};
use tracing::{debug, info};

/// Articles keyed by id, kept in insertion order, with per-facet counts that
/// always match the collection.
#[derive(Debug, Default)]
pub struct ArticleIndex {
    articles: Vec<Article>,
    positions: HashMap<String, usize>,
    category_counts: HashMap<Category, usize>,
    sentiment_counts: HashMap<Sentiment, usize>,
}

impl ArticleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies each raw article and upserts it by id. A re-ingested id is
    /// replaced in place and keeps its original insertion position.
    pub fn ingest<I>(&mut self, articles: I) -> IngestSummary
    where
        I: IntoIterator<Item = RawArticle>,
    {
        let mut summary = IngestSummary::default();
        for raw in articles {
            let article = annotate(raw);
            debug!(
                "🏷️ {} -> {} / {}",
                article.id, article.category, article.sentiment
            );
            if self.upsert(article) {
                summary.updated += 1;
            } else {
                summary.added += 1;
            }
        }
        self.recount();

        info!(
            "📥 Ingested {} articles ({} new, {} updated), {} in index",
            summary.added + summary.updated,
            summary.added,
            summary.updated,
            self.articles.len()
        );
        summary
    }

    /// Empties the index and ingests `articles` from scratch.
    pub fn replace_all<I>(&mut self, articles: I) -> IngestSummary
    where
        I: IntoIterator<Item = RawArticle>,
    {
        self.clear();
        self.ingest(articles)
    }

    /// Returns true when an existing entry was replaced.
    fn upsert(&mut self, article: Article) -> bool {
        match self.positions.get(&article.id) {
            Some(&position) => {
                self.articles[position] = article;
                true
            }
            None => {
                self.positions.insert(article.id.clone(), self.articles.len());
                self.articles.push(article);
                false
            }
        }
    }

    fn recount(&mut self) {
        self.category_counts.clear();
        self.sentiment_counts.clear();
        for article in &self.articles {
            *self.category_counts.entry(article.category).or_insert(0) += 1;
            *self.sentiment_counts.entry(article.sentiment).or_insert(0) += 1;
        }
    }

    /// Matching articles ordered by effective timestamp, newest first. Equal
    /// timestamps keep insertion order.
    pub fn query(&self, filter: &ArticleFilter) -> Vec<&Article> {
        let mut matches: Vec<&Article> = self
            .articles
            .iter()
            .filter(|article| filter.category.matches(&article.category))
            .filter(|article| filter.sentiment.matches(&article.sentiment))
            .collect();
        matches.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        matches
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.positions.get(id).map(|&position| &self.articles[position])
    }

    pub fn remove(&mut self, id: &str) -> Option<Article> {
        let position = self.positions.remove(id)?;
        let article = self.articles.remove(position);
        for later in &self.articles[position..] {
            if let Some(p) = self.positions.get_mut(&later.id) {
                *p -= 1;
            }
        }
        self.recount();
        debug!("🗑️ Removed {}", article.id);
        Some(article)
    }

    pub fn count_by_category(&self, category: FacetFilter<Category>) -> usize {
        match category {
            FacetFilter::All => self.articles.len(),
            FacetFilter::Only(category) => self.category_counts.get(&category).copied().unwrap_or(0),
        }
    }

    pub fn count_by_sentiment(&self, sentiment: FacetFilter<Sentiment>) -> usize {
        match sentiment {
            FacetFilter::All => self.articles.len(),
            FacetFilter::Only(sentiment) => self.sentiment_counts.get(&sentiment).copied().unwrap_or(0),
        }
    }

    pub fn facets(&self) -> FacetCounts {
        FacetCounts {
            total: self.articles.len(),
            categories: Category::ALL
                .iter()
                .map(|&category| (category, self.count_by_category(category.into())))
                .collect(),
            sentiments: Sentiment::ALL
                .iter()
                .map(|&sentiment| (sentiment, self.count_by_sentiment(sentiment.into())))
                .collect(),
        }
    }

    pub fn clear(&mut self) {
        self.articles.clear();
        self.positions.clear();
        self.category_counts.clear();
        self.sentiment_counts.clear();
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }
}

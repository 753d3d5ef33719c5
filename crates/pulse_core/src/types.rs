use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::labels::{Category, Sentiment};

/// An article record as handed over by the transport layer, before
/// classification. Every text field is optional; missing values read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

impl RawArticle {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            title: Some(title.into()),
            summary: Some(summary.into()),
            fetched_at,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// The key the article is stored under: the explicit id, else the link,
    /// else the title, else a digest of the remaining text fields. Never empty.
    pub fn resolved_id(&self) -> String {
        [&self.id, &self.link, &self.title]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| self.content_key())
    }

    fn content_key(&self) -> String {
        let mut hasher = Sha256::new();
        for field in [&self.summary, &self.source, &self.published] {
            hasher.update(field.as_deref().unwrap_or_default().as_bytes());
            hasher.update([0u8]);
        }
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}

/// A classified article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub link: String,
    pub published_at: Option<DateTime<Utc>>,
    pub fetched_at: DateTime<Utc>,
    pub sentiment: Sentiment,
    pub category: Category,
}

impl Article {
    /// Effective ordering key: publication time when known, else fetch time.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.fetched_at)
    }
}

/// Both derived labels for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub category: Category,
}

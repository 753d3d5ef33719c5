pub mod classifier;
pub mod error;
pub mod labels;
pub mod storage;
pub mod time;
pub mod types;

pub use classifier::{annotate, classify, classify_category, classify_sentiment};
pub use error::{Error, Result};
pub use labels::{ArticleFilter, Category, FacetFilter, Sentiment};
pub use storage::{ArticleStore, FacetCounts, IngestSummary};
pub use types::{Article, Classification, RawArticle};

//! Lexicon-based article classification.
//!
//! Sentiment is a thresholded majority over whole-token lexicon hits;
//! category is the first entry of [`CATEGORY_KEYWORDS`] with any keyword
//! occurring as a substring of the lowercased title and summary. Both are
//! pure functions of the text.

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::labels::{Category, Sentiment};
use crate::time::parse_published;
use crate::types::{Article, Classification, RawArticle};

/// Share of lexicon hits one side needs to strictly exceed to win.
pub const SENTIMENT_THRESHOLD: f64 = 0.6;

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "brilliant", "outstanding",
    "success", "achievement", "victory", "win", "positive", "growth", "improvement", "progress",
    "happy", "joy", "celebration", "breakthrough", "innovation", "advancement", "development",
    "profit", "gain", "increase", "rise", "boost", "surge", "jump", "climb", "soar", "leap",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disaster", "crisis", "problem", "issue", "failure",
    "loss", "defeat", "negative", "decline", "drop", "fall", "crash", "collapse", "breakdown",
    "sad", "angry", "fear", "worry", "concern", "danger", "threat", "risk", "attack", "violence",
    "death", "injury", "damage", "destruction", "corruption", "scandal", "controversy", "conflict",
];

/// Categories in matching order. `Other` has no keywords; it is what's left.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Politics,
        &[
            "election", "government", "minister", "parliament", "political", "vote", "democracy",
            "congress", "bjp", "party",
        ],
    ),
    (
        Category::Technology,
        &[
            "tech", "technology", "digital", "app", "software", "ai", "artificial intelligence",
            "startup", "innovation", "cyber",
        ],
    ),
    (
        Category::Business,
        &[
            "business", "economy", "market", "stock", "finance", "investment", "company",
            "corporate", "trade", "economic",
        ],
    ),
    (
        Category::Sports,
        &[
            "cricket", "football", "sports", "match", "tournament", "player", "team", "game",
            "olympics", "ipl",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie", "film", "actor", "actress", "bollywood", "hollywood", "music", "celebrity",
            "entertainment", "show",
        ],
    ),
    (
        Category::Health,
        &[
            "health", "medical", "doctor", "hospital", "disease", "covid", "vaccine", "medicine",
            "treatment", "healthcare",
        ],
    ),
    (
        Category::Education,
        &[
            "education", "school", "college", "university", "student", "exam", "study", "academic",
            "learning", "teacher",
        ],
    ),
    (
        Category::International,
        &[
            "world", "international", "global", "foreign", "diplomatic", "un", "nato", "europe",
            "america", "china",
        ],
    ),
];

lazy_static! {
    static ref POSITIVE_LEXICON: HashSet<&'static str> = POSITIVE_WORDS.iter().copied().collect();
    static ref NEGATIVE_LEXICON: HashSet<&'static str> = NEGATIVE_WORDS.iter().copied().collect();
}

pub fn classify_sentiment(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let (positive, negative) = lowered.split_whitespace().fold((0usize, 0usize), |(pos, neg), token| {
        if POSITIVE_LEXICON.contains(token) {
            (pos + 1, neg)
        } else if NEGATIVE_LEXICON.contains(token) {
            (pos, neg + 1)
        } else {
            (pos, neg)
        }
    });

    let total = positive + negative;
    if total == 0 {
        return Sentiment::Neutral;
    }
    if positive as f64 / total as f64 > SENTIMENT_THRESHOLD {
        Sentiment::Positive
    } else if negative as f64 / total as f64 > SENTIMENT_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

pub fn classify_category(title: &str, summary: &str) -> Category {
    let text = format!("{} {}", title, summary).to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

pub fn classify(title: &str, summary: &str) -> Classification {
    Classification {
        sentiment: classify_sentiment(&format!("{} {}", title, summary)),
        category: classify_category(title, summary),
    }
}

/// Classifies a raw record. Everything but the two labels passes through;
/// the id and publication date are resolved the same way on every call.
pub fn annotate(raw: RawArticle) -> Article {
    let title = raw.title.clone().unwrap_or_default();
    let summary = raw.summary.clone().unwrap_or_default();
    let Classification { sentiment, category } = classify(&title, &summary);

    Article {
        id: raw.resolved_id(),
        published_at: raw.published.as_deref().and_then(parse_published),
        source: raw.source.unwrap_or_default(),
        link: raw.link.unwrap_or_default(),
        fetched_at: raw.fetched_at,
        title,
        summary,
        sentiment,
        category,
    }
}

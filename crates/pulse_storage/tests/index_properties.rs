use chrono::{DateTime, Duration, TimeZone, Utc};
use pulse_core::{ArticleFilter, Category, FacetFilter, RawArticle, Sentiment};
use pulse_storage::ArticleIndex;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 6, 12, 0, 0).unwrap()
}

fn sample_feed() -> Vec<RawArticle> {
    let fetched_at = base_time();
    vec![
        RawArticle::new("Minister hails growth figures", "A great success for the government", fetched_at)
            .with_id("politics-positive")
            .with_source("The Hindu")
            .with_published("Mon, 06 Oct 2025 08:00:00 +0000"),
        RawArticle::new("Stock market crash", "Investors fear a deeper decline", fetched_at)
            .with_id("business-negative")
            .with_source("NDTV")
            .with_published("2025-10-06T09:00:00Z"),
        RawArticle::new("Cricket team seals series win", "", fetched_at)
            .with_id("sports-positive")
            .with_source("ANI")
            .with_published("Unknown"),
        RawArticle::new("Hospital opens new wing", "", fetched_at)
            .with_id("health-neutral")
            .with_source("Indian Express")
            .with_published("not a date"),
        RawArticle::new("Cold wave grips the north", "", fetched_at - Duration::hours(6))
            .with_id("other-neutral")
            .with_source("Hindustan Times"),
    ]
}

fn ids(index: &ArticleIndex, filter: ArticleFilter) -> Vec<String> {
    index.query(&filter).into_iter().map(|a| a.id.clone()).collect()
}

#[test]
fn test_sample_feed_labels() {
    let mut index = ArticleIndex::new();
    index.ingest(sample_feed());

    let labels = |id: &str| {
        let article = index.get(id).unwrap();
        (article.category, article.sentiment)
    };
    assert_eq!(labels("politics-positive"), (Category::Politics, Sentiment::Positive));
    assert_eq!(labels("business-negative"), (Category::Business, Sentiment::Negative));
    assert_eq!(labels("sports-positive"), (Category::Sports, Sentiment::Positive));
    assert_eq!(labels("health-neutral"), (Category::Health, Sentiment::Neutral));
    assert_eq!(labels("other-neutral"), (Category::Other, Sentiment::Neutral));
}

#[test]
fn test_query_orders_by_effective_timestamp() {
    let mut index = ArticleIndex::new();
    index.ingest(sample_feed());

    // the "Unknown" and unparseable dates fall back to fetched_at (12:00),
    // the two tie and keep insertion order
    assert_eq!(
        ids(&index, ArticleFilter::default()),
        vec![
            "sports-positive",
            "health-neutral",
            "business-negative",
            "politics-positive",
            "other-neutral",
        ]
    );
}

#[test]
fn test_equal_timestamps_keep_insertion_order() {
    let mut index = ArticleIndex::new();
    let fetched_at = base_time();
    index.ingest(vec![
        RawArticle::new("first", "", fetched_at).with_id("first"),
        RawArticle::new("second", "", fetched_at).with_id("second"),
    ]);
    index.ingest(vec![RawArticle::new("third", "", fetched_at).with_id("third")]);

    assert_eq!(ids(&index, ArticleFilter::default()), vec!["first", "second", "third"]);
}

#[test]
fn test_filters_combine() {
    let mut index = ArticleIndex::new();
    index.ingest(sample_feed());

    assert_eq!(
        ids(&index, ArticleFilter::sentiment(Sentiment::Positive)),
        vec!["sports-positive", "politics-positive"]
    );
    assert_eq!(
        ids(
            &index,
            ArticleFilter::new(Category::Business.into(), Sentiment::Negative.into())
        ),
        vec!["business-negative"]
    );
    assert!(ids(
        &index,
        ArticleFilter::new(Category::Business.into(), Sentiment::Positive.into())
    )
    .is_empty());
    assert!(ids(&index, ArticleFilter::category(Category::Education)).is_empty());
}

#[test]
fn test_counts_match_query() {
    let mut index = ArticleIndex::new();
    index.ingest(sample_feed());

    for category in Category::ALL {
        assert_eq!(
            index.count_by_category(category.into()),
            index.query(&ArticleFilter::category(category)).len(),
            "category {}",
            category
        );
    }
    for sentiment in Sentiment::ALL {
        assert_eq!(
            index.count_by_sentiment(sentiment.into()),
            index.query(&ArticleFilter::sentiment(sentiment)).len(),
            "sentiment {}",
            sentiment
        );
    }
    assert_eq!(index.count_by_category(FacetFilter::All), 5);
    assert_eq!(index.count_by_sentiment(FacetFilter::All), 5);

    let facets = index.facets();
    assert_eq!(facets.categories.iter().map(|(_, n)| n).sum::<usize>(), facets.total);
    assert_eq!(facets.sentiments.iter().map(|(_, n)| n).sum::<usize>(), facets.total);
    assert_eq!(facets.category(Category::Politics), 1);
    assert_eq!(facets.sentiment(Sentiment::Neutral), 2);
}

#[test]
fn test_reingest_updates_classification() {
    let mut index = ArticleIndex::new();
    index.ingest(sample_feed());

    let fetched_at = base_time();
    let summary = index.ingest(vec![
        RawArticle::new("Film festival opens", "", fetched_at).with_id("other-neutral")
    ]);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.added, 0);

    assert_eq!(index.count_by_category(FacetFilter::All), 5);
    assert_eq!(index.count_by_category(Category::Other.into()), 0);
    assert_eq!(index.count_by_category(Category::Entertainment.into()), 1);
    assert_eq!(
        index.get("other-neutral").map(|a| a.category),
        Some(Category::Entertainment)
    );
}

#[test]
fn test_ingest_is_idempotent() {
    let mut index = ArticleIndex::new();
    index.ingest(sample_feed());
    let first = ids(&index, ArticleFilter::default());
    let first_facets = index.facets();

    index.ingest(sample_feed());
    assert_eq!(ids(&index, ArticleFilter::default()), first);
    assert_eq!(index.facets(), first_facets);
}

#[test]
fn test_query_does_not_mutate() {
    let mut index = ArticleIndex::new();
    index.ingest(sample_feed());

    let filtered = ids(&index, ArticleFilter::category(Category::Sports));
    assert_eq!(filtered, vec!["sports-positive"]);
    assert_eq!(index.len(), 5);
    let insertion_order: Vec<&str> = index.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        insertion_order,
        vec![
            "politics-positive",
            "business-negative",
            "sports-positive",
            "health-neutral",
            "other-neutral",
        ]
    );
}

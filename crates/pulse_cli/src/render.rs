use pulse_core::{Article, Classification, FacetCounts};

/// Date label shown next to an article; unknown publication dates read "Recent".
pub fn date_label(article: &Article) -> String {
    match article.published_at {
        Some(published_at) => published_at.format("%b %d, %Y").to_string(),
        None => "Recent".to_string(),
    }
}

pub fn article_line(article: &Article) -> String {
    format!(
        "{:<12} {:<13} {:<8} [{}] {}",
        date_label(article),
        article.category.as_str(),
        article.sentiment.as_str(),
        article.source,
        article.title
    )
}

pub fn facet_table(facets: &FacetCounts) -> String {
    let mut out = String::from("Categories\n");
    out.push_str(&format!("  {:<14} {}\n", "All", facets.total));
    for (category, count) in &facets.categories {
        out.push_str(&format!("  {:<14} {}\n", category.as_str(), count));
    }
    out.push_str("Sentiment\n");
    out.push_str(&format!("  {:<14} {}\n", "All", facets.total));
    for (sentiment, count) in &facets.sentiments {
        out.push_str(&format!("  {:<14} {}\n", sentiment.as_str(), count));
    }
    out
}

pub fn classification_line(classification: &Classification) -> String {
    format!("{} {}", classification.category, classification.sentiment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pulse_core::{annotate, classify, RawArticle};
    use pulse_storage::ArticleIndex;

    #[test]
    fn test_article_line() {
        let fetched_at = Utc.with_ymd_and_hms(2025, 10, 6, 12, 0, 0).unwrap();
        let article = annotate(
            RawArticle::new("Cricket team seals series win", "", fetched_at)
                .with_source("ANI")
                .with_published("2025-10-05T08:00:00Z"),
        );
        assert_eq!(date_label(&article), "Oct 05, 2025");
        assert_eq!(
            article_line(&article),
            "Oct 05, 2025 Sports        positive [ANI] Cricket team seals series win"
        );

        let undated = annotate(RawArticle::new("Untitled", "", fetched_at).with_published("Unknown"));
        assert_eq!(date_label(&undated), "Recent");
    }

    #[test]
    fn test_facet_table_lists_zero_counts() {
        let index = ArticleIndex::new();
        let table = facet_table(&index.facets());
        assert!(table.contains("  Education      0\n"));
        assert!(table.contains("  neutral        0\n"));
        assert_eq!(table.lines().count(), 2 + 2 + 9 + 3);
    }

    #[test]
    fn test_classification_line() {
        assert_eq!(classification_line(&classify("", "")), "Other neutral");
    }
}

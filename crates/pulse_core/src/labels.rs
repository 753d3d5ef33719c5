//! Derived facet labels and the filters built on them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Sentiment::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidLabel(format!("unknown sentiment: {}", s)))
    }
}

/// Topical category. Declaration order is the matching order used by the
/// classifier, with `Other` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Politics,
    Technology,
    Business,
    Sports,
    Entertainment,
    Health,
    Education,
    International,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Politics,
        Category::Technology,
        Category::Business,
        Category::Sports,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::International,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::International => "International",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidLabel(format!("unknown category: {}", s)))
    }
}

/// Either every value of a facet or exactly one of them. Serialized as the
/// label string, with `"All"` for the unfiltered case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetFilter<T> {
    All,
    Only(T),
}

impl<T> Default for FacetFilter<T> {
    fn default() -> Self {
        FacetFilter::All
    }
}

impl<T: PartialEq> FacetFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(wanted) => wanted == value,
        }
    }
}

impl<T> From<T> for FacetFilter<T> {
    fn from(value: T) -> Self {
        FacetFilter::Only(value)
    }
}

impl<T: FromStr<Err = Error>> FromStr for FacetFilter<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(FacetFilter::All)
        } else {
            s.parse().map(FacetFilter::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for FacetFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetFilter::All => f.write_str("All"),
            FacetFilter::Only(value) => write!(f, "{}", value),
        }
    }
}

impl<T: fmt::Display> Serialize for FacetFilter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr<Err = Error>> Deserialize<'de> for FacetFilter<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleFilter {
    #[serde(default)]
    pub category: FacetFilter<Category>,
    #[serde(default)]
    pub sentiment: FacetFilter<Sentiment>,
}

impl ArticleFilter {
    pub fn new(category: FacetFilter<Category>, sentiment: FacetFilter<Sentiment>) -> Self {
        Self { category, sentiment }
    }

    pub fn category(category: Category) -> Self {
        Self { category: FacetFilter::Only(category), ..Self::default() }
    }

    pub fn sentiment(sentiment: Sentiment) -> Self {
        Self { sentiment: FacetFilter::Only(sentiment), ..Self::default() }
    }
}

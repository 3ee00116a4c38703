use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A quote record from the upstream `/api/quotes` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Quote {
    pub quote_id: i32,
    pub quote: String,
    #[serde(default)]
    pub author: String,
    pub series: Option<String>,
}

/// Keep only quotes whose author contains `author` as a case-insensitive
/// substring. An empty `author` applies no filtering at all, so the input
/// list passes through unchanged.
pub fn filter_by_author(quotes: Vec<Quote>, author: &str) -> Vec<Quote> {
    if author.is_empty() {
        return quotes;
    }
    let needle = author.to_lowercase();
    quotes
        .into_iter()
        .filter(|q| q.author.to_lowercase().contains(&needle))
        .collect()
}

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// An episode record from the upstream `/api/episodes` endpoints.
///
/// Upstream and exposed field names coincide for this type; `episode` is the
/// upstream's episode-number-within-season code, kept as a string because
/// upstream serves it that way.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Episode {
    pub episode_id: i32,
    pub title: String,
    pub season: Option<i32>,
    pub air_date: Option<String>,
    /// Names of characters appearing in the episode.
    #[serde(default)]
    pub characters: Vec<String>,
    pub episode: Option<String>,
    pub series: Option<String>,
}

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A character record from the upstream `/api/characters` endpoints.
///
/// Field renames from the upstream wire format are declared here so the
/// exposed GraphQL schema stays stable even if upstream names differ:
///
/// | Exposed        | Upstream  |
/// |----------------|-----------|
/// | `character_id` | `char_id` |
/// | `image`        | `img`     |
///
/// Exposed field names are kept snake_case (the historical public schema)
/// instead of async-graphql's camelCase default.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Character {
    #[serde(rename = "char_id")]
    pub character_id: i32,
    pub name: String,
    pub birthday: Option<String>,
    #[serde(default)]
    pub occupation: Vec<String>,
    #[serde(rename = "img")]
    pub image: Option<String>,
    pub status: Option<String>,
    pub nickname: Option<String>,
    /// Episode numbers the character appears in (main series).
    #[serde(default)]
    pub appearance: Vec<i32>,
    pub portrayed: Option<String>,
    pub category: Option<String>,
    /// Episode numbers the character appears in (spin-off).
    #[serde(default)]
    pub better_call_saul_appearance: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_upstream_fields_on_deserialize() {
        let character: Character = serde_json::from_value(serde_json::json!({
            "char_id": 1,
            "name": "Walter White",
            "birthday": "09-07-1958",
            "occupation": ["High School Chemistry Teacher"],
            "img": "https://example.test/walter.jpg",
            "status": "Presumed dead",
            "nickname": "Heisenberg",
            "appearance": [1, 2, 3],
            "portrayed": "Bryan Cranston",
            "category": "Breaking Bad",
            "better_call_saul_appearance": []
        }))
        .unwrap();

        assert_eq!(character.character_id, 1);
        assert_eq!(character.image.as_deref(), Some("https://example.test/walter.jpg"));
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let character: Character = serde_json::from_value(serde_json::json!({
            "char_id": 2,
            "name": "Jesse Pinkman"
        }))
        .unwrap();

        assert_eq!(character.character_id, 2);
        assert!(character.nickname.is_none());
        assert!(character.appearance.is_empty());
    }
}

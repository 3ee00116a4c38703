use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A death record from the upstream `/api/deaths` endpoint.
///
/// `number_of_deaths` defaults to 0 because the single-record
/// `/api/random-death` endpoint omits it; the random-death resolver
/// overwrites it with 1 before returning.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Death {
    pub death_id: i32,
    pub death: Option<String>,
    pub cause: Option<String>,
    /// Who was responsible for the death. Used as the grouping key for
    /// death-count aggregation.
    #[serde(default)]
    pub responsible: String,
    pub last_words: Option<String>,
    #[serde(default)]
    pub season: i32,
    #[serde(default)]
    pub episode: i32,
    #[serde(default)]
    pub number_of_deaths: i32,
}

/// Aggregated death count, derived in-process and never fetched upstream.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct DeathCount {
    /// The grouping label: `"overall"`, or the exact `responsible` string of
    /// the first record matched by the name argument.
    pub name: String,
    /// Sum of `number_of_deaths` over the grouped records.
    pub count: i32,
}

/// Sum `number_of_deaths` over the given records.
///
/// With no name (or an empty one), every record counts and the label is
/// `"overall"`. With a name, the first record whose `responsible` field
/// contains the name case-insensitively supplies the label, and the sum
/// runs over all records whose `responsible` field contains that exact
/// label as a plain substring. The second pass is deliberately
/// case-sensitive: the label is already a verbatim upstream string.
///
/// Fails with [`CoreError::NoMatch`] if the initial case-insensitive search
/// finds nothing. This is the one hard-failing lookup in the service.
pub fn death_count(deaths: &[Death], name: Option<&str>) -> Result<DeathCount, CoreError> {
    match name {
        Some(name) if !name.is_empty() => {
            let needle = name.to_lowercase();
            let label = deaths
                .iter()
                .find(|d| d.responsible.to_lowercase().contains(&needle))
                .map(|d| d.responsible.clone())
                .ok_or_else(|| CoreError::NoMatch {
                    entity: "death record",
                    query: name.to_string(),
                })?;

            let count = deaths
                .iter()
                .filter(|d| d.responsible.contains(&label))
                .map(|d| d.number_of_deaths)
                .sum();

            Ok(DeathCount { name: label, count })
        }
        _ => Ok(DeathCount {
            name: "overall".to_string(),
            count: deaths.iter().map(|d| d.number_of_deaths).sum(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn death(id: i32, responsible: &str, number_of_deaths: i32) -> Death {
        Death {
            death_id: id,
            death: None,
            cause: None,
            responsible: responsible.to_string(),
            last_words: None,
            season: 1,
            episode: 1,
            number_of_deaths,
        }
    }

    #[test]
    fn overall_sums_every_record() {
        let deaths = vec![
            death(1, "Walter White", 3),
            death(2, "Jesse Pinkman", 1),
            death(3, "Gus Fring", 2),
        ];

        let result = death_count(&deaths, None).unwrap();
        assert_eq!(result.name, "overall");
        assert_eq!(result.count, 6);
    }

    #[test]
    fn empty_name_behaves_like_no_name() {
        let deaths = vec![death(1, "Walter White", 2)];

        let result = death_count(&deaths, Some("")).unwrap();
        assert_eq!(result.name, "overall");
        assert_eq!(result.count, 2);
    }

    #[test]
    fn by_name_takes_exact_label_from_first_match() {
        let deaths = vec![
            death(1, "Walter White", 1),
            death(2, "Walter White & Jesse Pinkman", 2),
            death(3, "Jesse Pinkman", 1),
        ];

        // Case-insensitive first pass matches record 1; its exact
        // `responsible` string becomes the label, and the plain-substring
        // second pass then also catches record 2.
        let result = death_count(&deaths, Some("walter")).unwrap();
        assert_eq!(result.name, "Walter White");
        assert_eq!(result.count, 3);
    }

    #[test]
    fn second_pass_is_case_sensitive() {
        let deaths = vec![
            death(1, "Gus Fring", 1),
            // Different casing: matched by the first pass only if it comes
            // first, never by the exact-label second pass.
            death(2, "gus fring", 4),
        ];

        let result = death_count(&deaths, Some("GUS")).unwrap();
        assert_eq!(result.name, "Gus Fring");
        assert_eq!(result.count, 1);
    }

    #[test]
    fn no_match_is_a_hard_error() {
        let deaths = vec![death(1, "Walter White", 1)];

        let result = death_count(&deaths, Some("lalo"));
        assert_matches!(result, Err(CoreError::NoMatch { query, .. }) if query == "lalo");
    }

    #[test]
    fn number_of_deaths_defaults_to_zero() {
        // The random-death endpoint omits the field entirely.
        let death: Death = serde_json::from_value(serde_json::json!({
            "death_id": 10,
            "death": "Domingo Molina",
            "cause": "Suffocation",
            "responsible": "Walter White",
            "last_words": "None",
            "season": 1,
            "episode": 3
        }))
        .unwrap();

        assert_eq!(death.number_of_deaths, 0);
    }
}

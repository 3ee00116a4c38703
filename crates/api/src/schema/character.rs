use async_graphql::{Context, Object, Result};
use hermanos_core::character::Character;
use hermanos_upstream::api::BreakingBadApi;

/// Character query fields.
#[derive(Default)]
pub struct CharacterQuery;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl CharacterQuery {
    /// List characters. All four arguments are forwarded upstream as
    /// query-string parameters verbatim, including when unset (sent as
    /// empty strings). Filtering and pagination semantics are entirely
    /// upstream's; this resolver adds no logic.
    async fn characters(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        offset: Option<i32>,
        #[graphql(default)] name: String,
        #[graphql(default)] category: String,
    ) -> Result<Option<Vec<Character>>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        Ok(Some(
            upstream.characters(limit, offset, &category, &name).await?,
        ))
    }

    /// Look up a character by id.
    ///
    /// Upstream has no per-id characters endpoint, so this fetches the
    /// full collection and linear-searches it (documented O(n) fallback).
    /// An unknown id resolves to null, never to an error; only a transport
    /// failure errors.
    async fn character(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Character>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        let characters = upstream.all_characters().await?;
        Ok(characters.into_iter().find(|c| c.character_id == id))
    }

    /// A single random character, picked by upstream.
    async fn random_character(&self, ctx: &Context<'_>) -> Result<Option<Character>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        let characters = upstream.random_character().await?;
        Ok(characters.into_iter().next())
    }
}

use async_graphql::{Context, Object, Result};
use hermanos_core::episode::Episode;
use hermanos_upstream::api::BreakingBadApi;

/// Episode query fields.
#[derive(Default)]
pub struct EpisodeQuery;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl EpisodeQuery {
    /// List episodes, optionally filtered by series. The `series`
    /// parameter is forwarded upstream verbatim (empty when unset).
    async fn episodes(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] series: String,
    ) -> Result<Option<Vec<Episode>>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        Ok(Some(upstream.episodes(&series).await?))
    }

    /// Look up an episode by id via the upstream per-id endpoint.
    /// An unknown id resolves to null, never to an error.
    async fn episode(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Episode>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        let episodes = upstream.episode(id).await?;
        Ok(episodes.into_iter().next())
    }
}

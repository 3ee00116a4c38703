use async_graphql::{Context, Object, Result};
use hermanos_core::death::{self, Death, DeathCount};
use hermanos_upstream::api::BreakingBadApi;

/// Death query fields.
#[derive(Default)]
pub struct DeathQuery;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl DeathQuery {
    /// The full upstream death collection, unmodified.
    async fn deaths(&self, ctx: &Context<'_>) -> Result<Option<Vec<Death>>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        Ok(Some(upstream.deaths().await?))
    }

    /// Aggregate death counts.
    ///
    /// With no name: the sum over every record, labeled `"overall"`. With a
    /// name: the exact-label two-pass aggregation described in
    /// [`hermanos_core::death::death_count`]. A name matching no record is
    /// a field-level error, unlike the soft-fail id lookups.
    async fn death_count(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> Result<Option<DeathCount>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        let deaths = upstream.deaths().await?;
        Ok(Some(death::death_count(&deaths, name.as_deref())?))
    }

    /// A single random death, picked by upstream. The single-record
    /// endpoint omits `number_of_deaths`, so it is always set to exactly 1
    /// here regardless of the upstream payload.
    async fn random_death(&self, ctx: &Context<'_>) -> Result<Option<Death>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        let mut death = upstream.random_death().await?;
        death.number_of_deaths = 1;
        Ok(Some(death))
    }
}

use async_graphql::{Context, Object, Result};
use hermanos_core::quote::{self, Quote};
use hermanos_upstream::api::BreakingBadApi;
use rand::Rng;

/// Quote query fields.
#[derive(Default)]
pub struct QuoteQuery;

#[Object(rename_fields = "snake_case", rename_args = "snake_case")]
impl QuoteQuery {
    /// List quotes for a series, locally filtered by author.
    ///
    /// The `series` parameter is forwarded upstream verbatim (empty when
    /// unset); the `author` filter is applied in-process as a
    /// case-insensitive substring match, with an empty author meaning no
    /// filtering.
    async fn quotes(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] series: String,
        #[graphql(default)] author: String,
    ) -> Result<Option<Vec<Quote>>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        let quotes = upstream.quotes(&series).await?;
        Ok(Some(quote::filter_by_author(quotes, &author)))
    }

    /// Look up a quote by id.
    ///
    /// Upstream has no per-id quotes endpoint, so this fetches the full
    /// collection and linear-searches it (documented O(n) fallback). An
    /// unknown id resolves to null, never to an error.
    async fn quote(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Quote>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        let quotes = upstream.all_quotes().await?;
        Ok(quotes.into_iter().find(|q| q.quote_id == id))
    }

    /// A uniformly random quote, optionally restricted to authors matching
    /// the case-insensitive substring filter. A filter matching nothing
    /// resolves to null, consistent with the other soft-fail lookups.
    async fn random_quote(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] author: String,
    ) -> Result<Option<Quote>> {
        let upstream = ctx.data::<BreakingBadApi>()?;
        let mut quotes = quote::filter_by_author(upstream.all_quotes().await?, &author);
        if quotes.is_empty() {
            return Ok(None);
        }
        let index = rand::rng().random_range(0..quotes.len());
        Ok(Some(quotes.swap_remove(index)))
    }
}

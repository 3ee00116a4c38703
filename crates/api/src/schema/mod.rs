//! GraphQL schema and resolvers.
//!
//! One query object per domain area, merged into [`QueryRoot`]. Every
//! resolver translates its arguments into one upstream REST call (or a
//! fixed sequence of calls) and reshapes the result; none of them cache,
//! retry, or share state.
//!
//! All exposed fields are nullable, matching the historical public schema:
//! an upstream failure surfaces as a field-level error with the field set
//! to null, and sibling fields still resolve.

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use hermanos_upstream::api::BreakingBadApi;

pub mod character;
pub mod death;
pub mod episode;
pub mod quote;

use character::CharacterQuery;
use death::DeathQuery;
use episode::EpisodeQuery;
use quote::QuoteQuery;

/// Root query object, merged from the per-domain query objects.
#[derive(MergedObject, Default)]
pub struct QueryRoot(CharacterQuery, EpisodeQuery, QuoteQuery, DeathQuery);

/// The executable schema type (query-only; no mutations, no subscriptions).
pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the upstream client injected as context data.
pub fn build_schema(upstream: BreakingBadApi) -> ApiSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(upstream)
        .finish()
}

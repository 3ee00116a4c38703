//! Domain model for the Breaking Bad GraphQL wrapper.
//!
//! Every type here is a transient, request-scoped value deserialized from an
//! upstream REST response. Nothing is persisted; the upstream API is the sole
//! source of truth for the current request.
//!
//! The upstream-to-exposed field renames (`char_id` -> `character_id`,
//! `img` -> `image`) are declared as serde attributes on the model structs,
//! so the mapping is a per-type table rather than ad-hoc resolver logic.

pub mod character;
pub mod death;
pub mod episode;
pub mod error;
pub mod quote;

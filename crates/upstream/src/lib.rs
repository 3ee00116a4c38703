//! Typed HTTP client for the upstream Breaking Bad REST API.
//!
//! This crate owns every outbound call the service makes. Each upstream
//! endpoint gets one method on [`api::BreakingBadApi`]; nothing here caches,
//! retries, or reshapes responses beyond JSON deserialization into the
//! `hermanos-core` model types.

pub mod api;

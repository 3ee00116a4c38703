//! GraphQL API server library.
//!
//! Exposes the building blocks (config, router, routes, schema) so
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod router;
pub mod routes;
pub mod schema;

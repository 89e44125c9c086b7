//! # Pals - a tutorial GraphQL API over a tiny social graph
//!
//! Pals serves a fixed in-memory dataset of users and their posts through a
//! single GraphQL endpoint. It exists to demonstrate the schema/resolver
//! contract and unit-conversion semantics end to end; query parsing,
//! validation, execution, and serialization are delegated to `async-graphql`,
//! served over HTTP by `axum`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on the default port (4000)
//! pals
//!
//! # Ask for the current user's height in feet
//! curl -X POST http://localhost:4000 \
//!   -H 'content-type: application/json' \
//!   -d '{"query": "{ me { name height(unit: FOOT) } }"}'
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Server settings and their defaults
//! - [`dataset`]: The seed data and the lookup layer over it
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: Schema, resolvers, scalars, and the HTTP transport
//! - [`model`]: Domain records (User, Post) and measurement units

/// Server settings and their defaults.
pub mod config;

/// The immutable in-memory dataset and lookups over it.
///
/// Built once at startup; resolvers borrow it read-only.
pub mod dataset;

/// Error types and result aliases.
///
/// Defines the `PalsError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum endpoint serving it.
pub mod graphql;

pub mod logging;

/// Domain records for the social graph.
///
/// Includes `User`, `Post`, and the `HeightUnit`/`WeightUnit` conversions.
pub mod model;

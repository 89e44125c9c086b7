//! GraphQL schema, resolvers, and HTTP transport for pals.
//!
//! The execution engine is `async-graphql`: it parses, validates (including
//! the depth limit), executes, and serializes; this module supplies the type
//! graph, the resolvers over the dataset, and the axum endpoint.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server
//! pals --port 4000
//!
//! # Execute a query
//! curl -X POST http://localhost:4000 \
//!   -H 'content-type: application/json' \
//!   -d '{"query": "{ me { name height(unit: METRE) } }"}'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `hello`, `me`, `users`, `user(name)`
//! - **Enums**: `HeightUnit`, `WeightUnit`
//! - **Scalars**: `DateTime`, `EmailAddress`

mod scalars;
mod schema;
mod server;
mod types;

pub use scalars::{DateTime, EmailAddress};
pub use schema::{Identity, PalsSchema, QueryRoot, build_schema};
pub use server::run_server;
pub use types::*;

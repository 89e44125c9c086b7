use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::model::UserId;

use super::types::*;

pub type PalsSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Request-scoped identity, attached to each request by the transport layer
/// before execution begins. Only the `me` field reads it; nothing stores it
/// beyond the request.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: UserId,
}

/// Build the executable schema over the given dataset.
///
/// The dataset goes into the schema's data map, where resolvers borrow it
/// read-only for the lifetime of the schema. The depth limit is the only
/// admission control: over-deep queries are rejected at validation time,
/// counting the root field as level one.
pub fn build_schema(config: &ServerConfig, dataset: Dataset) -> PalsSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(dataset)
        .limit_depth(config.max_depth)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Test greeting.
    async fn hello(&self) -> &'static str {
        "Hello world!"
    }

    /// The user selected by the request identity, or null.
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let identity = ctx.data::<Identity>()?;
        let dataset = ctx.data::<Dataset>()?;
        Ok(dataset
            .find_user_by_id(identity.user_id)
            .cloned()
            .map(User::from))
    }

    /// All users, in dataset order.
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(dataset.users().iter().cloned().map(User::from).collect())
    }

    /// The first user with the given name, or null.
    async fn user(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Option<User>> {
        let dataset = ctx.data::<Dataset>()?;
        Ok(dataset.find_user_by_name(&name).cloned().map(User::from))
    }
}

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::Result;

use super::schema::{Identity, PalsSchema};

#[derive(Clone)]
struct ServerState {
    schema: PalsSchema,
    identity: Identity,
}

async fn graphql_handler(State(state): State<ServerState>, req: GraphQLRequest) -> GraphQLResponse {
    // Identity is rebuilt into every request rather than held anywhere global
    let request = req.into_inner().data(state.identity);
    tracing::debug!(
        operation = request.operation_name.as_deref().unwrap_or("-"),
        "executing query"
    );
    state.schema.execute(request).await.into()
}

async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}

/// Serve the schema over HTTP: GET `/` is the GraphQL Playground, POST `/`
/// executes queries. Runs until the process is stopped.
pub async fn run_server(schema: PalsSchema, config: &ServerConfig) -> Result<()> {
    let state = ServerState {
        schema,
        identity: Identity {
            user_id: config.me_user_id,
        },
    };

    let app = Router::new()
        .route("/", get(playground).post(graphql_handler))
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "GraphQL server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::error::Result;

use super::schema::BookshelfSchema;

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn build_router(schema: BookshelfSchema) -> Router {
    // Permissive CORS: the tutorial front end runs on another origin in dev.
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(CorsLayer::permissive())
        .with_state(schema)
}

/// Serve the schema on `0.0.0.0:<port>` until the process is stopped.
pub async fn run_server(schema: BookshelfSchema, port: u16) -> Result<()> {
    let app = build_router(schema);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port = port, "GraphQL server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

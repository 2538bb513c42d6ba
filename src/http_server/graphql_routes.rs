//! GraphQL HTTP Routes
//!
//! - `POST /graphql` executes a GraphQL request
//! - `GET /graphql` serves GraphiQL when enabled

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};

use crate::graphql::GradebookSchema;

/// Create GraphQL routes
pub fn graphql_routes(schema: GradebookSchema, graphiql: bool) -> Router {
    let route = if graphiql {
        get(graphiql_handler).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new().route("/graphql", route).with_state(schema)
}

async fn graphql_handler(
    State(schema): State<GradebookSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

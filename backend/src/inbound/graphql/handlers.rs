//! Actix handlers exposing the GraphQL schema.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use juniper::http::GraphQLRequest;
use juniper::http::playground::playground_source;

use super::schema::Schema;
use super::state::GraphQlContext;

/// Path the GraphQL endpoint is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Execute a GraphQL request against the schema.
#[post("/graphql")]
pub async fn graphql(
    schema: web::Data<Schema>,
    context: web::Data<GraphQlContext>,
    request: web::Json<GraphQLRequest>,
) -> HttpResponse {
    let response = request.execute(schema.get_ref(), context.get_ref()).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    HttpResponse::build(status).json(response)
}

/// Serve the GraphQL Playground UI.
#[get("/playground")]
pub async fn playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GRAPHQL_PATH, None))
}

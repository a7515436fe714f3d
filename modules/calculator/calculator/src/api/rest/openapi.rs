//! `OpenAPI` document for the calculator REST API

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use super::dto::{CalculateResponse, HealthResponse};
use super::handlers;
use super::problem::Problem;

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator API", description = "Four-function arithmetic over HTTP"),
    paths(handlers::handle_calculate, handlers::health),
    components(schemas(CalculateResponse, HealthResponse, Problem)),
    tags(
        (name = "calculator", description = "Arithmetic operations"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Router serving the generated document at `/openapi.json`.
pub fn openapi_router() -> Router {
    Router::new().route(
        "/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

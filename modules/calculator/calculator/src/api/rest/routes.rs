//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::domain::Service;

use super::handlers;

/// Build the calculator REST routes.
///
/// - `GET /api/calculate` - apply an operation to two operands
/// - `GET /api/health` - health report with server timestamp
/// - `GET /healthz` - plain liveness probe
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/api/calculate", get(handlers::handle_calculate))
        .route("/api/health", get(handlers::health))
        .route("/healthz", get(|| async { "ok" }))
        .layer(Extension(service))
}

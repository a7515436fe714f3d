//! HTTP server: router assembly, middleware stack, and serve loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::routing::get;
use calculator::Service;
use calculator::api::rest::openapi::openapi_router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::{AppConfig, WebConfig};
use crate::{signals, web};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full application router, middleware included.
pub fn build_router(config: &AppConfig) -> Router {
    let service = Arc::new(Service::new());

    let mut router = calculator::router(service).route("/", get(web::index));
    if config.web.enable_docs {
        router = router.merge(openapi_router());
    }

    apply_middleware_stack(router, &config.web)
}

/// Layers are registered innermost first. Runtime order (outermost first):
/// `SetRequestId` -> `PropagateRequestId` -> Trace -> Timeout -> CORS -> Router.
fn apply_middleware_stack(mut router: Router, web: &WebConfig) -> Router {
    if web.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        );
    }

    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        web.request_timeout,
    ));

    router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(|res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                span.record("status", res.status().as_u16());
                span.record("latency_ms", latency.as_millis());
                tracing::debug!("request completed");
            }),
    );

    router = router.layer(PropagateRequestIdLayer::x_request_id());
    router.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Bind, serve until Ctrl+C / SIGTERM, then drain in-flight requests.
///
/// # Errors
/// Returns an error if the bind address is invalid, the socket cannot be
/// bound, or the server fails while running.
pub async fn run_server(config: AppConfig) -> Result<()> {
    let addr = config.bind_socket_addr()?;
    let router = build_router(&config);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, docs = config.web.enable_docs, "HTTP server bound");

    let shutdown = async {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::error!(error = %e, "signal handling failed, shutting down");
        }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

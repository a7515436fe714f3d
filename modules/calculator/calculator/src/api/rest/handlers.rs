//! REST handlers for calculator module

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Query};
use axum::http::Uri;
use calculator_sdk::{CalculatorError, Operation};

use crate::domain::Service;

use super::dto::{CalculateQuery, CalculateResponse, HealthResponse};
use super::error::{calculator_error_to_problem, query_rejection_to_problem};
use super::problem::Problem;

/// Read an operand from the query string; a missing value counts as zero.
fn parse_operand(name: &str, raw: Option<&str>) -> Result<f64, CalculatorError> {
    let Some(raw) = raw else {
        return Ok(0.0);
    };
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalculatorError::InvalidOperand {
            name: name.to_owned(),
            value: raw.to_owned(),
        })
}

fn evaluate(service: Service, query: &CalculateQuery) -> Result<CalculateResponse, CalculatorError> {
    let a = parse_operand("a", query.a.as_deref())?;
    let b = parse_operand("b", query.b.as_deref())?;
    let op = match query.op.as_deref() {
        Some(raw) => raw.parse::<Operation>()?,
        None => Operation::Add,
    };
    let result = service.calculate(op, a, b)?;
    if !result.is_finite() {
        return Err(CalculatorError::ResultOutOfRange(op.to_string()));
    }
    Ok(CalculateResponse {
        result,
        operation: op.to_string(),
        a,
        b,
    })
}

/// Handler for GET /api/calculate
///
/// Decodes `a`, `b` and `op` from the query string and applies the operation.
#[utoipa::path(
    get,
    path = "/api/calculate",
    tag = "calculator",
    params(CalculateQuery),
    responses(
        (status = 200, description = "Result of the operation", body = CalculateResponse),
        (status = 400, description = "Unknown operation, non-numeric operand or undecodable query", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Division by zero or a result outside the finite range", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn handle_calculate(
    Extension(service): Extension<Arc<Service>>,
    uri: Uri,
    query: Result<Query<CalculateQuery>, QueryRejection>,
) -> Result<Json<CalculateResponse>, Problem> {
    let Query(query) = query.map_err(|e| query_rejection_to_problem(&e, uri.path()))?;
    evaluate(*service, &query)
        .map(Json)
        .map_err(|e| calculator_error_to_problem(&e, uri.path()))
}

/// Handler for GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        timestamp: chrono::Local::now().to_rfc3339(),
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt as _;

    use crate::api::rest::problem::APPLICATION_PROBLEM_JSON;
    use crate::api::rest::routes::router;

    fn create_test_router() -> Router {
        router(Arc::new(Service::new()))
    }

    async fn get(uri: &str) -> (StatusCode, Option<String>, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = create_test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn missing_operand_defaults_to_zero() {
        assert_eq!(parse_operand("a", None), Ok(0.0));
    }

    #[test]
    fn operand_is_trimmed() {
        assert_eq!(parse_operand("a", Some(" 2.5 ")), Ok(2.5));
    }

    #[test]
    fn non_finite_operand_is_rejected() {
        assert!(parse_operand("b", Some("inf")).is_err());
        assert!(parse_operand("b", Some("NaN")).is_err());
    }

    #[tokio::test]
    async fn test_calculate_divide_returns_fraction() {
        let (status, _, json) = get("/api/calculate?a=7&b=2&op=divide").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 3.5);
        assert_eq!(json["operation"], "divide");
        assert_eq!(json["a"], 7.0);
        assert_eq!(json["b"], 2.0);
    }

    #[tokio::test]
    async fn test_calculate_defaults_to_zero_plus_zero() {
        let (status, _, json) = get("/api/calculate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 0.0);
        assert_eq!(json["operation"], "add");
    }

    #[tokio::test]
    async fn test_calculate_subtract_and_multiply() {
        let (_, _, json) = get("/api/calculate?a=3&b=5&op=subtract").await;
        assert_eq!(json["result"], -2.0);

        let (_, _, json) = get("/api/calculate?a=-3&b=-4&op=multiply").await;
        assert_eq!(json["result"], 12.0);
    }

    #[tokio::test]
    async fn test_calculate_division_by_zero_returns_problem() {
        let (status, content_type, json) = get("/api/calculate?a=10&b=0&op=divide").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type.as_deref(), Some(APPLICATION_PROBLEM_JSON));
        assert_eq!(json["detail"], "cannot divide by zero");
        assert_eq!(json["code"], "calculator.division_by_zero");
        assert_eq!(json["instance"], "/api/calculate");
        assert_eq!(json["status"], 422);
    }

    #[tokio::test]
    async fn test_calculate_unknown_operation_is_bad_request() {
        let (status, _, json) = get("/api/calculate?a=2&b=3&op=pow").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "calculator.invalid_operation");
        assert_eq!(json["detail"], "invalid operation: pow");
    }

    #[tokio::test]
    async fn test_calculate_non_numeric_operand_is_bad_request() {
        let (status, _, json) = get("/api/calculate?a=abc&b=3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "calculator.invalid_operand");
        assert_eq!(json["detail"], "invalid numeric value for 'a': abc");
    }

    #[tokio::test]
    async fn test_calculate_overflow_returns_problem() {
        let (status, content_type, json) =
            get("/api/calculate?a=1e308&b=1e308&op=multiply").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type.as_deref(), Some(APPLICATION_PROBLEM_JSON));
        assert_eq!(json["code"], "calculator.result_out_of_range");
        assert_eq!(json["detail"], "result of multiply is not a finite number");

        let (status, _, json) = get("/api/calculate?a=1e308&b=1e-308&op=divide").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], "calculator.result_out_of_range");
    }

    #[tokio::test]
    async fn test_calculate_duplicate_key_returns_problem() {
        let (status, content_type, json) = get("/api/calculate?a=1&b=1&a=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some(APPLICATION_PROBLEM_JSON));
        assert_eq!(json["code"], "calculator.invalid_query");
        assert_eq!(json["instance"], "/api/calculate");
        assert!(json["detail"].as_str().is_some_and(|d| d.contains("duplicate")));
    }

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let (status, _, json) = get("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }
}

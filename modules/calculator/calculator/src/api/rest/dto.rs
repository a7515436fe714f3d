//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters of `GET /api/calculate`.
///
/// Values are kept as raw strings so that malformed numbers surface as
/// calculator errors. Query strings that cannot be decoded at all (duplicate
/// keys) are reported as `calculator.invalid_query` Problems by the handler.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalculateQuery {
    /// First operand (defaults to 0)
    pub a: Option<String>,
    /// Second operand (defaults to 0)
    pub b: Option<String>,
    /// One of `add`, `subtract`, `multiply`, `divide` (defaults to `add`)
    pub op: Option<String>,
}

/// Result of a calculation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    /// Outcome of applying the operation
    pub result: f64,
    /// Operation that was applied
    pub operation: String,
    /// First operand as parsed
    pub a: f64,
    /// Second operand as parsed
    pub b: f64,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 server-local timestamp
    pub timestamp: String,
}

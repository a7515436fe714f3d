//! Calculator Module
//!
//! Four-function arithmetic (add, subtract, multiply, divide) with a JSON
//! REST API on top.
//!
//! ## Architecture
//!
//! - `domain/arithmetic.rs` - Pure arithmetic functions
//! - `domain/service.rs` - Stateless service dispatching on `Operation`
//! - `domain/local_client.rs` - `CalculatorClientV1` implementation
//! - `api/rest/` - DTOs, handlers, routes, Problem mapping, `OpenAPI`
//!
//! External consumers should depend on `calculator-sdk` and talk to the
//! service through `CalculatorClientV1`.

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{CalculatorLocalClient, Service};

pub mod api;
pub use api::rest::routes::router;

//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClientV1`)
//! - Operation selector (`Operation`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Operation};
//!
//! let op: Operation = "divide".parse()?;
//! let quotient = client.calculate(op, 7.0, 2.0)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClientV1, CalculatorError};

mod operation;
pub use operation::Operation;

/// Service name constant for the calculator service (used in logs and spans)
pub const SERVICE_NAME: &str = "calculator.v1.CalculatorService";

//! Domain service for calculator
//!
//! Selects the arithmetic function for an [`Operation`] at runtime.

use calculator_sdk::{CalculatorError, Operation};
use tracing::debug;

use super::arithmetic;

/// Domain service that performs arithmetic operations.
///
/// Stateless; shared behind `Arc` by the REST layer and the local client.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply `op` to `a` and `b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] for a division with a zero divisor.
    pub fn calculate(self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        debug!(%op, a, b, "performing calculation");
        match op {
            Operation::Add => Ok(arithmetic::add(a, b)),
            Operation::Subtract => Ok(arithmetic::subtract(a, b)),
            Operation::Multiply => Ok(arithmetic::multiply(a, b)),
            Operation::Divide => arithmetic::divide(a, b),
        }
    }
}

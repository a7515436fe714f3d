//! Local client implementation of `CalculatorClientV1`

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};

use super::service::Service;

/// Local client that delegates to the module's [`Service`].
#[derive(Clone, Default)]
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Create a new local client wrapping the Service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClientV1 for CalculatorLocalClient {
    fn calculate(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.calculate(op, a, b)
    }
}

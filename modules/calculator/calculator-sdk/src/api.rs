//! Calculator API trait and types
//!
//! Contract trait and types for the calculator service.

use crate::operation::Operation;

/// Calculator API trait
///
/// Evaluates a single binary arithmetic operation. Implementations are
/// stateless and may be shared freely across threads.
pub trait CalculatorClientV1: Send + Sync {
    /// Apply `op` to the operands `a` and `b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `op` is
    /// [`Operation::Divide`] and `b` is zero.
    fn calculate(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// Division with a zero divisor
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Operation selector outside of the supported set
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Operand that could not be read as a finite number
    #[error("invalid numeric value for '{name}': {value}")]
    InvalidOperand { name: String, value: String },

    /// Result that overflowed to infinity or is not a number
    #[error("result of {0} is not a finite number")]
    ResultOutOfRange(String),
}

impl CalculatorError {
    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "calculator.division_by_zero",
            Self::InvalidOperation(_) => "calculator.invalid_operation",
            Self::InvalidOperand { .. } => "calculator.invalid_operand",
            Self::ResultOutOfRange(_) => "calculator.result_out_of_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_message() {
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "cannot divide by zero"
        );
    }

    #[test]
    fn invalid_operand_message_names_the_parameter() {
        let err = CalculatorError::InvalidOperand {
            name: "a".to_owned(),
            value: "abc".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid numeric value for 'a': abc");
        assert_eq!(err.code(), "calculator.invalid_operand");
    }

    #[test]
    fn out_of_range_message_names_the_operation() {
        let err = CalculatorError::ResultOutOfRange("multiply".to_owned());
        assert_eq!(err.to_string(), "result of multiply is not a finite number");
        assert_eq!(err.code(), "calculator.result_out_of_range");
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            CalculatorError::DivisionByZero.code(),
            CalculatorError::InvalidOperation("pow".to_owned()).code(),
            CalculatorError::InvalidOperand {
                name: "b".to_owned(),
                value: String::new(),
            }
            .code(),
            CalculatorError::ResultOutOfRange("divide".to_owned()).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

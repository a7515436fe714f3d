//! Pure arithmetic over `f64` operands.
//!
//! Every function is total except [`divide`], which rejects a zero divisor.

use calculator_sdk::CalculatorError;

/// Sum of `a` and `b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference `a - b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of `a` and `b`.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient `a / b`.
///
/// # Errors
/// Returns [`CalculatorError::DivisionByZero`] when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, CalculatorError> {
    if b == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn add_positive_numbers() {
        assert_eq!(add(2.0, 3.0), 5.0);
    }

    #[test]
    fn add_negative_numbers() {
        assert_eq!(add(-2.0, -3.0), -5.0);
    }

    #[test]
    fn add_mixed_numbers() {
        assert_eq!(add(-2.0, 3.0), 1.0);
    }

    #[test]
    fn add_floats() {
        assert_eq!(add(1.5, 2.5), 4.0);
    }

    #[test]
    fn subtract_positive_numbers() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
    }

    #[test]
    fn subtract_negative_result() {
        assert_eq!(subtract(3.0, 5.0), -2.0);
    }

    #[test]
    fn multiply_positive_numbers() {
        assert_eq!(multiply(3.0, 4.0), 12.0);
    }

    #[test]
    fn multiply_by_zero() {
        assert_eq!(multiply(5.0, 0.0), 0.0);
    }

    #[test]
    fn multiply_negative_numbers() {
        assert_eq!(multiply(-3.0, -4.0), 12.0);
    }

    #[test]
    fn divide_positive_numbers() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
    }

    #[test]
    fn divide_keeps_fraction() {
        assert_eq!(divide(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        let err = divide(10.0, 0.0).unwrap_err();
        assert_eq!(err, CalculatorError::DivisionByZero);
        assert_eq!(err.to_string(), "cannot divide by zero");
    }

    #[test]
    fn divide_by_negative_zero_is_rejected() {
        assert_eq!(divide(1.0, -0.0), Err(CalculatorError::DivisionByZero));
    }

    #[test]
    fn zero_dividend_is_fine() {
        assert_eq!(divide(0.0, 4.0), Ok(0.0));
    }
}

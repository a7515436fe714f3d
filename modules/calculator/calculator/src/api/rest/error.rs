use axum::extract::rejection::QueryRejection;
use calculator_sdk::CalculatorError;

use super::problem::{Problem, bad_request, unprocessable};

/// Code for query strings the extractor could not decode at all.
pub const INVALID_QUERY_CODE: &str = "calculator.invalid_query";

/// Map a calculator error to an RFC 9457 Problem.
pub fn calculator_error_to_problem(e: &CalculatorError, instance: &str) -> Problem {
    let problem = match e {
        CalculatorError::DivisionByZero | CalculatorError::ResultOutOfRange(_) => {
            unprocessable(e.to_string())
        }
        CalculatorError::InvalidOperation(_) | CalculatorError::InvalidOperand { .. } => {
            bad_request(e.to_string())
        }
    };
    tracing::debug!(code = e.code(), instance, "calculation rejected: {e}");

    with_current_trace_id(problem.with_code(e.code()).with_instance(instance))
}

/// Map a query extractor rejection (duplicate keys, bad encoding) to a 400 Problem.
pub fn query_rejection_to_problem(rejection: &QueryRejection, instance: &str) -> Problem {
    let detail = rejection.body_text();
    tracing::debug!(code = INVALID_QUERY_CODE, instance, "query rejected: {detail}");

    with_current_trace_id(
        bad_request(detail)
            .with_code(INVALID_QUERY_CODE)
            .with_instance(instance),
    )
}

fn with_current_trace_id(problem: Problem) -> Problem {
    match tracing::Span::current().id() {
        Some(id) => problem.with_trace_id(id.into_u64().to_string()),
        None => problem,
    }
}

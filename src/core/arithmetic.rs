use crate::domain::model::{OperationRequest, Operator};
use crate::utils::error::LineError;

/// Applies the request's operator. Results are never negative.
pub fn evaluate(request: &OperationRequest) -> Result<u64, LineError> {
    let OperationRequest {
        left,
        operator,
        right,
    } = *request;

    match Operator::try_from(operator)? {
        Operator::Add => left.checked_add(right).ok_or(LineError::OutOfRange),
        Operator::Subtract => Ok(left.abs_diff(right)),
        Operator::Multiply => left.checked_mul(right).ok_or(LineError::OutOfRange),
        Operator::Divide => {
            if right == 0 {
                return Err(LineError::DivisionByZero);
            }
            Ok(left / right)
        }
    }
}

use crate::core::roman;
use crate::domain::model::OperationRequest;
use crate::utils::error::{LineError, NumeralError};

/// Numeral decoding rule applied to both operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumeralMode {
    #[default]
    Permissive,
    Strict,
}

/// Roman numerals have no zero symbol; a bare `0` operand stands for it.
const ZERO_LITERAL: &str = "0";

impl NumeralMode {
    fn decode(self, token: &str) -> Result<u64, NumeralError> {
        if token == ZERO_LITERAL {
            return Ok(0);
        }
        match self {
            NumeralMode::Permissive => roman::decode(token),
            NumeralMode::Strict => roman::decode_strict(token),
        }
    }
}

/// Parses a trimmed, non-empty line of the form `<numeral> <op> <numeral>`.
pub fn parse_line(line: &str, mode: NumeralMode) -> Result<OperationRequest, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [left, operator, right] = tokens.as_slice() else {
        return Err(LineError::InvalidInput);
    };

    let mut op_chars = operator.chars();
    let (Some(operator), None) = (op_chars.next(), op_chars.next()) else {
        return Err(LineError::InvalidInput);
    };

    let left = mode.decode(left);
    let right = mode.decode(right);
    match (left, right) {
        (Ok(left), Ok(right)) => Ok(OperationRequest {
            left,
            operator,
            right,
        }),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!("Rejected numeral in '{}': {}", line, e);
            Err(e.into())
        }
    }
}

//! Roman numeral decoding.
//!
//! The decoder only compares each symbol with its predecessor, so it accepts
//! some orderings a classical grammar rejects (`"IXI"` decodes to 10).
//! [`decode_strict`] adds a canonical-form check on top.

use crate::utils::error::NumeralError;

const MAX_REPEAT: usize = 3;

const NUMERALS: [(u64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(symbol: char) -> Option<u64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

pub fn decode(token: &str) -> Result<u64, NumeralError> {
    if token.is_empty() {
        return Err(NumeralError::Empty);
    }

    let mut total: u64 = 0;
    let mut previous: u64 = 0;
    let mut last_symbol: Option<char> = None;
    let mut repeat = 0;

    for symbol in token.chars() {
        let current = symbol_value(symbol).ok_or(NumeralError::InvalidSymbol(symbol))?;

        if last_symbol == Some(symbol) {
            repeat += 1;
            if repeat > MAX_REPEAT {
                return Err(NumeralError::TooManyRepeats(symbol));
            }
        } else {
            repeat = 1;
        }

        // A larger symbol turns the previous addition into a subtraction.
        // Adjacent symbol values differ by a factor of at least 2, so this never underflows.
        if current > previous {
            total += current - 2 * previous;
        } else {
            total += current;
        }

        previous = current;
        last_symbol = Some(symbol);
    }

    Ok(total)
}

/// Like [`decode`], but also requires the canonical spelling of a value in 1..=3999.
pub fn decode_strict(token: &str) -> Result<u64, NumeralError> {
    let value = decode(token)?;
    match to_roman(value) {
        Some(canonical) if canonical == token => Ok(value),
        _ => Err(NumeralError::NonCanonical(value)),
    }
}

/// Canonical Roman spelling for 1..=3999.
pub fn to_roman(mut value: u64) -> Option<String> {
    if !(1..=3999).contains(&value) {
        return None;
    }

    let mut out = String::new();
    for (weight, symbols) in NUMERALS {
        while value >= weight {
            out.push_str(symbols);
            value -= weight;
        }
    }
    Some(out)
}

//! English spelling of non-negative integers, American short scale up to Billion.

use crate::domain::model::ZeroStyle;
use crate::utils::error::LineError;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];
const TENS: [&str; 10] = [
    "", "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];
const SCALES: [&str; 4] = ["", "Thousand", "Million", "Billion"];

/// Smallest value that would need a scale word past Billion.
pub const UPPER_BOUND: u64 = 1_000_000_000_000;

#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSpeller {
    zero: ZeroStyle,
}

impl NumberSpeller {
    pub fn new(zero: ZeroStyle) -> Self {
        Self { zero }
    }

    /// Spells `num` as space-separated words, e.g. `1994` → `"One Thousand Nine Hundred Ninety Four"`.
    pub fn spell(&self, num: u64) -> Result<String, LineError> {
        if num >= UPPER_BOUND {
            return Err(LineError::OutOfRange);
        }
        if num == 0 {
            return Ok(match self.zero {
                ZeroStyle::Word => "Zero".to_string(),
                ZeroStyle::Empty => String::new(),
            });
        }

        // Chunks are collected least significant first, then reversed.
        let mut chunks: Vec<Vec<&'static str>> = Vec::new();
        let mut remaining = num;
        let mut place = 0;
        while remaining > 0 {
            let chunk = (remaining % 1000) as usize;
            if chunk > 0 {
                let mut words = chunk_words(chunk);
                if place > 0 {
                    words.push(SCALES[place]);
                }
                chunks.push(words);
            }
            remaining /= 1000;
            place += 1;
        }

        Ok(chunks.into_iter().rev().flatten().collect::<Vec<_>>().join(" "))
    }
}

fn chunk_words(chunk: usize) -> Vec<&'static str> {
    let hundreds = chunk / 100;
    let tens = (chunk % 100) / 10;
    let ones = chunk % 10;

    let mut words = Vec::with_capacity(4);
    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push("Hundred");
    }
    if tens == 1 && ones > 0 {
        words.push(TEENS[ones]);
    } else {
        if tens > 0 {
            words.push(TENS[tens]);
        }
        if ones > 0 {
            words.push(ONES[ones]);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(num: u64) -> String {
        NumberSpeller::default().spell(num).unwrap()
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(spell(5), "Five");
        assert_eq!(spell(10), "Ten");
        assert_eq!(spell(11), "Eleven");
        assert_eq!(spell(19), "Nineteen");
        assert_eq!(spell(20), "Twenty");
        assert_eq!(spell(42), "Forty Two");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell(100), "One Hundred");
        assert_eq!(spell(110), "One Hundred Ten");
        assert_eq!(spell(115), "One Hundred Fifteen");
        assert_eq!(spell(909), "Nine Hundred Nine");
    }

    #[test]
    fn test_scale_words() {
        assert_eq!(spell(1994), "One Thousand Nine Hundred Ninety Four");
        assert_eq!(spell(1000), "One Thousand");
        assert_eq!(spell(1_000_000), "One Million");
        assert_eq!(spell(1_000_001), "One Million One");
        assert_eq!(spell(2_000_013_000), "Two Billion Thirteen Thousand");
        assert_eq!(
            spell(999_999_999_999),
            "Nine Hundred Ninety Nine Billion Nine Hundred Ninety Nine Million \
             Nine Hundred Ninety Nine Thousand Nine Hundred Ninety Nine"
        );
    }

    #[test]
    fn test_no_stray_spaces() {
        for n in [1, 12, 100, 1000, 1_000_000, 20_000_020, 3_000_000_000] {
            let words = spell(n);
            assert_eq!(words.trim(), words);
            assert!(!words.contains("  "), "double space in {:?}", words);
        }
    }

    #[test]
    fn test_zero_styles() {
        assert_eq!(NumberSpeller::new(ZeroStyle::Word).spell(0).unwrap(), "Zero");
        assert_eq!(NumberSpeller::new(ZeroStyle::Empty).spell(0).unwrap(), "");
    }

    #[test]
    fn test_beyond_billions_is_out_of_range() {
        assert_eq!(
            NumberSpeller::default().spell(UPPER_BOUND),
            Err(LineError::OutOfRange)
        );
    }
}

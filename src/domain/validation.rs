//! Rules applied to the raw amount text before it reaches the engine.

use crate::error::{CalcError, Result};

/// Largest accepted amount, inclusive.
pub const MAX_AMOUNT: f64 = 999_999_999.0;

/// Whether the amount field accepts `text` at all: optional digits, at most one
/// decimal point, optional digits. Anything else is dropped at entry.
pub fn accepts_amount_text(text: &str) -> bool {
    let mut seen_point = false;
    for c in text.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// True for the texts that mean "no amount yet".
pub fn is_blank_amount(text: &str) -> bool {
    text.is_empty() || text == "."
}

/// Validates amount text.
///
/// Returns `Ok(None)` for a blank field, `Ok(Some(amount))` for an amount the
/// engine may be called with.
pub fn validate_amount(text: &str) -> Result<Option<f64>> {
    if is_blank_amount(text) {
        return Ok(None);
    }
    let value = parse_float_prefix(text);
    if value.is_nan() {
        return Err(CalcError::InvalidNumber);
    }
    if value < 0.0 {
        return Err(CalcError::NegativeAmount);
    }
    if value > MAX_AMOUNT {
        return Err(CalcError::AmountTooLarge);
    }
    Ok(Some(value))
}

/// Parses the longest leading float literal of `text`, ignoring leading
/// whitespace. Yields NaN when there is none. `"12abc"` is 12, `"1.2.3"` is 1.2.
pub fn parse_float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return match bytes.first() {
            Some(b'-') => f64::NEG_INFINITY,
            _ => f64::INFINITY,
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_accepts_plain_decimals() {
        for text in ["", ".", "0", "12", "12.", ".5", "12.50", "007"] {
            assert!(accepts_amount_text(text), "{text:?} should be accepted");
        }
    }

    #[test]
    fn test_grammar_rejects_everything_else() {
        for text in ["-5", "1.2.3", "1e3", "abc", "12a", " 12", "1,000", "+1"] {
            assert!(!accepts_amount_text(text), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_blank_amounts() {
        assert_eq!(validate_amount("").unwrap(), None);
        assert_eq!(validate_amount(".").unwrap(), None);
    }

    #[test]
    fn test_valid_amounts() {
        assert_eq!(validate_amount("50").unwrap(), Some(50.0));
        assert_eq!(validate_amount("12.").unwrap(), Some(12.0));
        assert_eq!(validate_amount(".5").unwrap(), Some(0.5));
        assert_eq!(validate_amount("0").unwrap(), Some(0.0));
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        assert_eq!(validate_amount("999999999").unwrap(), Some(MAX_AMOUNT));
        assert!(matches!(
            validate_amount("1000000000"),
            Err(CalcError::AmountTooLarge)
        ));
        assert!(matches!(
            validate_amount("999999999.01"),
            Err(CalcError::AmountTooLarge)
        ));
    }

    #[test]
    fn test_negative_amount() {
        let result = validate_amount("-5");
        assert!(matches!(result, Err(CalcError::NegativeAmount)));
        assert_eq!(result.unwrap_err().to_string(), "Amount cannot be negative");
    }

    #[test]
    fn test_non_numeric_amount() {
        let result = validate_amount("abc");
        assert!(matches!(result, Err(CalcError::InvalidNumber)));
        assert_eq!(result.unwrap_err().to_string(), "Please enter a valid number");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12abc"), 12.0);
        assert_eq!(parse_float_prefix("1.2.3"), 1.2);
        assert_eq!(parse_float_prefix("  -4.5"), -4.5);
        assert_eq!(parse_float_prefix("+3"), 3.0);
        assert_eq!(parse_float_prefix("1e3x"), 1000.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix("x1").is_nan());
    }
}

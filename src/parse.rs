//! Number Parsing
//!
//! Best-effort integer parsing for form inputs.

use crate::error::ParseIntError;

/// Parse the leading integer of `input`.
///
/// Leading whitespace is skipped and one optional sign is accepted. Parsing
/// stops at the first non-digit, so `"12abc"` and `"12.9"` both give 12.
pub fn parse_int(input: &str) -> Result<i64, ParseIntError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(ParseIntError::Empty);
    }

    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ParseIntError::NoDigits(input.to_string()));
    }

    // Parse with the sign attached so i64::MIN stays representable
    let digits = &rest[..digits_len];
    let signed = if negative { format!("-{}", digits) } else { digits.to_string() };
    signed
        .parse::<i64>()
        .map_err(|_| ParseIntError::OutOfRange(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_int("0"), Ok(0));
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("-7"), Ok(-7));
        assert_eq!(parse_int("+7"), Ok(7));
    }

    #[test]
    fn test_leading_prefix_wins() {
        assert_eq!(parse_int("  12abc"), Ok(12));
        assert_eq!(parse_int("12.9"), Ok(12));
        assert_eq!(parse_int("-3e5"), Ok(-3));
    }

    #[test]
    fn test_failures() {
        assert_eq!(parse_int(""), Err(ParseIntError::Empty));
        assert_eq!(parse_int("   "), Err(ParseIntError::Empty));
        assert_eq!(parse_int("abc"), Err(ParseIntError::NoDigits("abc".to_string())));
        assert_eq!(parse_int("-"), Err(ParseIntError::NoDigits("-".to_string())));
        assert_eq!(parse_int(".5"), Err(ParseIntError::NoDigits(".5".to_string())));
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(parse_int("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(parse_int("9223372036854775807"), Ok(i64::MAX));
        assert!(matches!(parse_int("9223372036854775808"), Err(ParseIntError::OutOfRange(_))));
    }
}

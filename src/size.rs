//! Validation of the word-count argument.

/// Parse the `size` argument: a count of words in the signed 64-bit range.
///
/// Negative values and anything that does not parse as an integer are
/// rejected with `"<text> is not a valid size"`. The returned count is always
/// within `0..=i64::MAX`.
pub fn parse_size(text: &str) -> Result<u64, String> {
    match text.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n as u64),
        _ => Err(format!("{} is not a valid size", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_and_positive() {
        assert_eq!(parse_size("0"), Ok(0));
        assert_eq!(parse_size("3"), Ok(3));
        assert_eq!(parse_size("9223372036854775807"), Ok(i64::MAX as u64));
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(parse_size("-5"), Err("-5 is not a valid size".to_string()));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(parse_size("abc"), Err("abc is not a valid size".to_string()));
        assert!(parse_size("").is_err());
        assert!(parse_size("1.5").is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(parse_size("9223372036854775808").is_err());
    }
}

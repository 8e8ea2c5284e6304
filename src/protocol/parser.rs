//! Strict Parameter Parser
//!
//! Parameters arrive as command-line text and must be a complete base-10
//! integer. Anything else is rejected with a typed [`ParseError`] instead of
//! being coerced to some default.
//!
//! ## Accepted Input
//!
//! - An optional leading `+` or `-`
//! - One or more ASCII digits
//! - Nothing else: no whitespace, no trailing characters, no radix prefix
//!
//! The result is an `i64`; values that don't fit are reported as
//! [`ParseError::Overflow`].

use std::num::IntErrorKind;
use thiserror::Error;

/// Errors that can occur while parsing a parameter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input text is empty
    #[error("empty parameter")]
    Empty,

    /// The input contains something other than a sign and digits
    #[error("not a base-10 integer: {0:?}")]
    InvalidDigit(String),

    /// The value does not fit in a 64-bit signed integer
    #[error("integer out of representable range: {0}")]
    Overflow(String),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a parameter as a base-10 signed integer.
///
/// # Example
/// ```
/// use control_ship::protocol::{parse_parameter, ParseError};
///
/// assert_eq!(parse_parameter("-40"), Ok(-40));
/// assert_eq!(parse_parameter(""), Err(ParseError::Empty));
/// assert!(parse_parameter("12x").is_err());
/// ```
pub fn parse_parameter(text: &str) -> ParseResult<i64> {
    text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::Empty => ParseError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseError::Overflow(text.to_string())
        }
        _ => ParseError::InvalidDigit(text.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_parameter("100"), Ok(100));
        assert_eq!(parse_parameter("+5"), Ok(5));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_parameter("-1"), Ok(-1));
        assert_eq!(parse_parameter("-40"), Ok(-40));
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(parse_parameter("0"), Ok(0));
        assert_eq!(parse_parameter("-0"), Ok(0));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_parameter(""), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(
            parse_parameter("abc"),
            Err(ParseError::InvalidDigit("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_trailing_characters() {
        assert_eq!(
            parse_parameter("12x"),
            Err(ParseError::InvalidDigit("12x".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(matches!(
            parse_parameter(" 5"),
            Err(ParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            parse_parameter("5\n"),
            Err(ParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_parse_lone_sign() {
        assert!(matches!(parse_parameter("-"), Err(ParseError::InvalidDigit(_))));
        assert!(matches!(parse_parameter("+"), Err(ParseError::InvalidDigit(_))));
    }

    #[test]
    fn test_parse_rejects_hex() {
        assert!(matches!(
            parse_parameter("0x10"),
            Err(ParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse_parameter("9223372036854775808"),
            Err(ParseError::Overflow("9223372036854775808".to_string()))
        );
        assert!(matches!(
            parse_parameter("-9223372036854775809"),
            Err(ParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_parse_limits() {
        assert_eq!(parse_parameter("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_parameter("-9223372036854775808"), Ok(i64::MIN));
    }
}

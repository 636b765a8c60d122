//! Integer identifiers assigned by the persistence layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an [`Apartment`](crate::apartment::Apartment).
///
/// Values are allocated by the database on insert and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApartmentId(i64);

impl ApartmentId {
    /// Wrap a raw database identifier.
    #[must_use]
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw database identifier.
    #[must_use]
    pub fn as_raw(self) -> i64 {
        self.0
    }

    /// Parse the leading base-10 integer of `input`.
    ///
    /// Leading whitespace and a single `+`/`-` sign are accepted, parsing
    /// stops at the first non-digit, and anything after it is ignored, so
    /// `"12abc"` yields `12` and `"1.9"` yields `1`. Returns `None` when no
    /// digit follows the optional sign or the value overflows `i64`; such an
    /// id can never match a stored record.
    #[must_use]
    pub fn parse_leading(input: &str) -> Option<Self> {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }

        let digits = &rest[..digits_len];
        let value = if negative {
            format!("-{digits}").parse::<i64>().ok()?
        } else {
            digits.parse::<i64>().ok()?
        };
        Some(Self(value))
    }
}

impl From<i64> for ApartmentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ApartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Option<i64> {
        ApartmentId::parse_leading(input).map(ApartmentId::as_raw)
    }

    #[test]
    fn should_parse_plain_decimal() {
        assert_eq!(parse("42"), Some(42));
    }

    #[test]
    fn should_ignore_trailing_garbage() {
        assert_eq!(parse("12abc"), Some(12));
        assert_eq!(parse("1.9"), Some(1));
    }

    #[test]
    fn should_accept_leading_whitespace_and_sign() {
        assert_eq!(parse("  7"), Some(7));
        assert_eq!(parse("-3"), Some(-3));
        assert_eq!(parse("+5"), Some(5));
    }

    #[test]
    fn should_return_none_when_no_leading_digits() {
        assert_eq!(parse("abc"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("-"), None);
        assert_eq!(parse("x12"), None);
    }

    #[test]
    fn should_return_none_on_overflow() {
        assert_eq!(parse("99999999999999999999"), None);
    }

    #[test]
    fn should_parse_i64_bounds() {
        assert_eq!(parse("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn should_serialize_as_bare_number() {
        let json = serde_json::to_string(&ApartmentId::from_raw(9)).unwrap();
        assert_eq!(json, "9");
    }

    #[test]
    fn should_display_inner_value() {
        assert_eq!(ApartmentId::from(15).to_string(), "15");
    }
}

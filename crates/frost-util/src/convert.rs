//! Coercion of loosely typed values.
//!
//! Every function takes anything `Display` and works on its string form, so
//! numbers, strings and booleans can be passed interchangeably.

use std::fmt::Display;

use crate::error::ConvertError;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// `true` iff the string form is `"true"`, ignoring ASCII case.
pub fn to_boolean(value: impl Display) -> bool {
    value.to_string().eq_ignore_ascii_case("true")
}

/// Parse the trimmed string form as an `i32`.
pub fn to_integer(value: impl Display) -> Result<i32, ConvertError> {
    let input = value.to_string();
    input
        .trim()
        .parse()
        .map_err(|source| ConvertError::InvalidInteger { input, source })
}

/// Parse the trimmed string form as an `f64`.
pub fn to_double(value: impl Display) -> Result<f64, ConvertError> {
    let input = value.to_string();
    input
        .trim()
        .parse()
        .map_err(|source| ConvertError::InvalidDouble { input, source })
}

/// Seconds in `amount` seconds.
pub fn to_seconds(amount: impl Display) -> Result<i64, ConvertError> {
    Ok(i64::from(to_integer(amount)?))
}

/// Seconds in `amount` minutes.
pub fn to_minutes(amount: impl Display) -> Result<i64, ConvertError> {
    Ok(to_seconds(amount)? * SECONDS_PER_MINUTE)
}

/// Seconds in `amount` hours.
pub fn to_hours(amount: impl Display) -> Result<i64, ConvertError> {
    Ok(to_seconds(amount)? * SECONDS_PER_HOUR)
}

/// Seconds in `amount` days.
pub fn to_days(amount: impl Display) -> Result<i64, ConvertError> {
    Ok(to_seconds(amount)? * SECONDS_PER_DAY)
}

/// Parse a short duration such as `"30s"`, `"5m"`, `"2h"` or `"1d"` into
/// seconds.
///
/// Digits and letters are collected separately, so `"1 0 m"` is ten minutes.
/// The first letter selects the unit.
pub fn to_time(input: &str) -> Result<i64, ConvertError> {
    let invalid = |reason: &str| ConvertError::InvalidTime {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(invalid("no amount given"));
    }
    let amount: i64 = digits.parse().map_err(|_| invalid("amount out of range"))?;

    let unit = input
        .chars()
        .find(char::is_ascii_alphabetic)
        .ok_or_else(|| invalid("no unit given"))?;
    let scale = match unit.to_ascii_lowercase() {
        's' => 1,
        'm' => SECONDS_PER_MINUTE,
        'h' => SECONDS_PER_HOUR,
        'd' => SECONDS_PER_DAY,
        _ => return Err(invalid("unknown unit")),
    };

    amount
        .checked_mul(scale)
        .ok_or_else(|| invalid("amount out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans() {
        assert!(to_boolean("true"));
        assert!(to_boolean("TRUE"));
        assert!(to_boolean(true));
        assert!(!to_boolean("yes"));
        assert!(!to_boolean(1));
        assert!(!to_boolean(""));
    }

    #[test]
    fn integers_and_doubles() {
        assert_eq!(to_integer("42").unwrap(), 42);
        assert_eq!(to_integer(" -7 ").unwrap(), -7);
        assert_eq!(to_integer(12).unwrap(), 12);
        assert!(matches!(
            to_integer("4.2"),
            Err(ConvertError::InvalidInteger { .. })
        ));
        assert_eq!(to_double("2.5").unwrap(), 2.5);
        assert!(matches!(
            to_double("two"),
            Err(ConvertError::InvalidDouble { .. })
        ));
    }

    #[test]
    fn unit_multipliers() {
        assert_eq!(to_seconds(5).unwrap(), 5);
        assert_eq!(to_minutes(2).unwrap(), 120);
        assert_eq!(to_hours("3").unwrap(), 10_800);
        assert_eq!(to_days(1).unwrap(), 86_400);
    }

    #[test]
    fn parse_time_strings() {
        assert_eq!(to_time("30s").unwrap(), 30);
        assert_eq!(to_time("5m").unwrap(), 300);
        assert_eq!(to_time("5 Minutes").unwrap(), 300);
        assert_eq!(to_time("2H").unwrap(), 7_200);
        assert_eq!(to_time("1d").unwrap(), 86_400);
    }

    #[test]
    fn reject_bad_time_strings() {
        assert!(to_time("m").is_err());
        assert!(to_time("10").is_err());
        assert!(to_time("10y").is_err());
        assert!(to_time("99999999999999999999s").is_err());
    }
}

//! Boolean combinators and precondition checks.

use std::fmt::Display;

use crate::convert::to_boolean;
use crate::error::ValidationError;

/// `true` if every condition holds (vacuously true when empty).
pub fn all_true(conditions: &[bool]) -> bool {
    conditions.iter().all(|&c| c)
}

/// `true` if no condition holds (vacuously true when empty).
pub fn all_false(conditions: &[bool]) -> bool {
    conditions.iter().all(|&c| !c)
}

/// `true` if at least one condition holds.
pub fn any_true(conditions: &[bool]) -> bool {
    conditions.iter().any(|&c| c)
}

/// `true` if at least one condition does not hold.
pub fn any_false(conditions: &[bool]) -> bool {
    conditions.iter().any(|&c| !c)
}

/// Unwrap `value` or fail with `message`.
pub fn not_null<T>(value: Option<T>, message: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(message))
}

pub fn ensure(condition: bool, message: &str) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::new(message))
    }
}

/// Fails unless the string form of `value` is `"true"` (ASCII case-insensitive).
pub fn is_true(value: impl Display, message: Option<&str>) -> Result<(), ValidationError> {
    ensure(to_boolean(value), message.unwrap_or("The object is not true!"))
}

/// Fails if the string form of `value` is `"true"` (ASCII case-insensitive).
pub fn is_false(value: impl Display, message: Option<&str>) -> Result<(), ValidationError> {
    ensure(!to_boolean(value), message.unwrap_or("The object is true!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn combinators() {
        assert!(all_true(&[true, true]));
        assert!(!all_true(&[true, false]));
        assert!(all_false(&[false, false]));
        assert!(!all_false(&[false, true]));
        assert!(any_true(&[false, true]));
        assert!(!any_true(&[false, false]));
        assert!(any_false(&[true, false]));
        assert!(!any_false(&[true, true]));
    }

    #[test]
    fn empty_conditions() {
        assert!(all_true(&[]));
        assert!(all_false(&[]));
        assert!(!any_true(&[]));
        assert!(!any_false(&[]));
    }

    #[test]
    fn not_null_and_ensure() {
        assert_eq!(not_null(Some(3), "missing").unwrap(), 3);
        let err = not_null::<i32>(None, "missing").unwrap_err();
        assert_eq!(err.message, "missing");

        assert!(ensure(true, "unused").is_ok());
        assert_eq!(ensure(false, "broken").unwrap_err().message, "broken");
    }

    #[test]
    fn truthiness_checks() {
        assert!(is_true("TRUE", None).is_ok());
        assert_eq!(
            is_true("nope", None).unwrap_err().message,
            "The object is not true!"
        );
        assert!(is_false(false, None).is_ok());
        assert_eq!(
            is_false(true, Some("flag must be off")).unwrap_err().message,
            "flag must be off"
        );
    }

    proptest! {
        #[test]
        fn combinators_are_complementary(conditions in proptest::collection::vec(any::<bool>(), 0..16)) {
            prop_assert_eq!(all_true(&conditions), !any_false(&conditions));
            prop_assert_eq!(all_false(&conditions), !any_true(&conditions));
        }
    }
}

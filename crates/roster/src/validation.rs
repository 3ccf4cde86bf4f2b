//! Per-field rules.
//!
//! Each rule returns the accepted value so callers can assign it directly.

use camp_core::{DomainError, DomainResult};

pub const MIN_AGE: i64 = 8;
pub const MAX_AGE: i64 = 18;
pub const MIN_HOUR: i64 = 0;
pub const MAX_HOUR: i64 = 23;

pub const NAME_REQUIRED: &str = "Camper must have a name";
pub const AGE_OUT_OF_RANGE: &str = "Age must be between 8 and 18";
pub const INVALID_HOUR: &str = "Not a valid hour";

/// Camper.name: required and non-empty.
pub fn validate_name(name: &str) -> DomainResult<&str> {
    if name.is_empty() {
        return Err(DomainError::validation(NAME_REQUIRED));
    }
    Ok(name)
}

/// Camper.age: inclusive range [8, 18].
pub fn validate_age(age: i64) -> DomainResult<i64> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(DomainError::validation(AGE_OUT_OF_RANGE));
    }
    Ok(age)
}

/// Signup.time: an hour of the day, [0, 23].
pub fn validate_time(time: i64) -> DomainResult<i64> {
    if !(MIN_HOUR..=MAX_HOUR).contains(&time) {
        return Err(DomainError::validation(INVALID_HOUR));
    }
    Ok(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            validate_name("").unwrap_err(),
            DomainError::validation(NAME_REQUIRED)
        );
        assert_eq!(validate_name("Alex").unwrap(), "Alex");
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert_eq!(validate_age(8).unwrap(), 8);
        assert_eq!(validate_age(18).unwrap(), 18);
        assert!(validate_age(7).is_err());
        assert!(validate_age(19).is_err());
    }

    #[test]
    fn hour_bounds_are_inclusive() {
        assert_eq!(validate_time(0).unwrap(), 0);
        assert_eq!(validate_time(23).unwrap(), 23);
        assert_eq!(
            validate_time(24).unwrap_err().to_string(),
            INVALID_HOUR
        );
        assert!(validate_time(-1).is_err());
    }

    proptest! {
        #[test]
        fn age_rule_matches_range(age in -1_000i64..1_000i64) {
            prop_assert_eq!(validate_age(age).is_ok(), (MIN_AGE..=MAX_AGE).contains(&age));
        }

        #[test]
        fn time_rule_matches_range(time in any::<i64>()) {
            prop_assert_eq!(validate_time(time).is_ok(), (0..=23).contains(&time));
        }
    }
}

//! Numeric validation functions
//!
//! Bounds are inclusive. Incomparable values (`NaN`) fail every bound.

use std::fmt::Display;

pub fn validate_min<T: PartialOrd + Display>(value: &T, min: &T) -> Result<(), String> {
    match value.partial_cmp(min) {
        Some(ordering) if ordering.is_ge() => Ok(()),
        _ => Err(format!("Must be at least {}", min)),
    }
}

pub fn validate_max<T: PartialOrd + Display>(value: &T, max: &T) -> Result<(), String> {
    match value.partial_cmp(max) {
        Some(ordering) if ordering.is_le() => Ok(()),
        _ => Err(format!("Must be at most {}", max)),
    }
}

pub fn validate_range<T: PartialOrd + Display>(value: &T, min: &T, max: &T) -> Result<(), String> {
    validate_min(value, min)
        .and_then(|()| validate_max(value, max))
        .map_err(|_| format!("Must be between {} and {}", min, max))
}

/// Validates value is strictly greater than zero
///
/// Zero is taken from `Default`, which is `0` for every primitive number.
/// `NaN` is not positive.
pub fn validate_positive<T: PartialOrd + Default>(value: &T) -> Result<(), String> {
    if *value > T::default() {
        Ok(())
    } else {
        Err("Value must be positive".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(21, true)]
    #[case(18, true)]
    #[case(17, false)]
    fn test_adult_age(#[case] age: u32, #[case] ok: bool) {
        assert_eq!(validate_min(&age, &18).is_ok(), ok);
    }

    #[test]
    fn test_max_messages() {
        assert!(validate_max(&99.5, &100.0).is_ok());
        assert_eq!(
            validate_max(&120, &100),
            Err("Must be at most 100".to_string())
        );
    }

    #[test]
    fn test_range_edges_inclusive() {
        assert!(validate_range(&1, &1, &5).is_ok());
        assert!(validate_range(&5, &1, &5).is_ok());
        assert_eq!(
            validate_range(&-3, &1, &5),
            Err("Must be between 1 and 5".to_string())
        );
    }

    #[test]
    fn test_nan_fails_bounds() {
        assert!(validate_min(&f64::NAN, &0.0).is_err());
        assert!(validate_max(&f64::NAN, &0.0).is_err());
    }

    #[test]
    fn test_positive_validation() {
        assert!(validate_positive(&30).is_ok());
        assert!(validate_positive(&0.5).is_ok());
        assert!(validate_positive(&0).is_err());
        assert!(validate_positive(&f64::NAN).is_err());
        assert_eq!(
            validate_positive(&-1),
            Err("Value must be positive".to_string())
        );
    }
}

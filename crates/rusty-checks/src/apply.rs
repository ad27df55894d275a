//! Run one check sequence against one value

use crate::check::Check;
use crate::error::CheckError;
use crate::field::ValidatedField;
use tracing::trace;

/// Runs every check in `checks` against `value` and collects the failures.
///
/// No check is skipped after an earlier one fails. The returned field is
/// valid only when every check passed; an empty sequence is trivially
/// valid. This never fails as a whole: a check that cannot evaluate
/// reports an ordinary [`CheckError`].
pub fn apply_validators<T>(checks: &[Check<T>], value: T) -> ValidatedField<T> {
    let errors: Vec<CheckError> = checks
        .iter()
        .enumerate()
        .filter_map(|(index, check)| match check.run(&value) {
            Ok(()) => None,
            Err(error) => {
                trace!(index, %error, "check failed");
                Some(error)
            }
        })
        .collect();

    trace!(checks = checks.len(), failed = errors.len(), "applied checks");

    ValidatedField::from_errors(value, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks;

    #[test]
    fn test_empty_sequence_is_valid() {
        let result = apply_validators::<i32>(&[], 7);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.value(), &7);
    }

    #[test]
    fn test_no_short_circuit() {
        let seq = vec![
            checks::longer_than::<String>(8),
            checks::alphabetic(),
            Check::predicate(|s: &String| s.starts_with('x'), "Must start with x"),
        ];

        let result = apply_validators(&seq, "h3".to_string());

        assert!(!result.is_valid());
        assert_eq!(
            result.messages(),
            vec![
                "Must be longer than 8 characters",
                "Must be an alphabetic string",
                "Must start with x",
            ]
        );
    }
}

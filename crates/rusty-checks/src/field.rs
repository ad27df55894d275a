//! Per-field validation results

use crate::error::CheckError;

/// The outcome of running a check sequence against one value.
///
/// `is_valid()` is true exactly when `errors()` is empty. Errors appear in
/// the order their checks were declared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidatedField<T> {
    value: T,
    valid: bool,
    errors: Vec<CheckError>,
}

impl<T> ValidatedField<T> {
    /// Builds a result from a value and the errors its checks produced.
    /// Validity is derived from `errors`.
    pub fn from_errors(value: T, errors: Vec<CheckError>) -> Self {
        Self {
            value,
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A result with no errors
    pub fn valid(value: T) -> Self {
        Self::from_errors(value, Vec::new())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[CheckError] {
        &self.errors
    }

    /// Error messages in declaration order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(CheckError::message).collect()
    }

    /// `Ok(value)` when valid, otherwise the collected errors.
    pub fn into_result(self) -> Result<T, Vec<CheckError>> {
        if self.valid {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }
}

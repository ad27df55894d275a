//! The `Check` handle and check sequences

use crate::error::CheckError;
use std::fmt;
use std::sync::Arc;

/// Outcome of running one check
pub type CheckResult = Result<(), CheckError>;

/// An ordered sequence of checks for one field.
///
/// Every check in the sequence runs; none is skipped after a failure.
pub type Checks<T> = Vec<Check<T>>;

/// A pure pass/fail function over a value of type `T`.
///
/// Checks are stateless and cheap to clone (the function sits behind an
/// `Arc`), so one check can appear in many sequences and be shared across
/// threads.
pub struct Check<T> {
    run: Arc<dyn Fn(&T) -> CheckResult + Send + Sync>,
}

impl<T: 'static> Check<T> {
    /// Wraps any function returning `Result<(), E>` where `E` converts into
    /// a [`CheckError`]. Plain `Result<(), String>` validators fit directly.
    ///
    /// ```
    /// use rusty_checks::Check;
    ///
    /// let even = Check::new(|n: &i32| {
    ///     if n % 2 == 0 { Ok(()) } else { Err("Must be even") }
    /// });
    /// assert!(even.run(&4).is_ok());
    /// assert_eq!(even.run(&3).unwrap_err(), "Must be even");
    /// ```
    pub fn new<F, E>(f: F) -> Self
    where
        F: Fn(&T) -> Result<(), E> + Send + Sync + 'static,
        E: Into<CheckError>,
    {
        Self {
            run: Arc::new(move |value: &T| f(value).map_err(Into::into)),
        }
    }

    /// Builds a check from a boolean predicate and the message reported
    /// when it returns `false`.
    pub fn predicate<F>(f: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::new(move |value: &T| {
            if f(value) {
                Ok(())
            } else {
                Err(CheckError::new(message.as_str()))
            }
        })
    }
}

impl<T> Check<T> {
    pub fn run(&self, value: &T) -> CheckResult {
        (self.run)(value)
    }
}

impl<T> Clone for Check<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").finish_non_exhaustive()
    }
}

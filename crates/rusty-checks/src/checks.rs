//! Built-in check constructors
//!
//! Each constructor wraps one of the plain functions in
//! [`rusty_checks_validation`] as a [`Check`]. String checks accept any
//! `T: AsRef<str>`, so they work for `String`, `&'static str`, `Box<str>`
//! and friends.
//!
//! ```
//! use rusty_checks::{apply_validators, checks};
//!
//! let password = vec![checks::longer_than::<String>(8), checks::alphabetic()];
//! let result = apply_validators(&password, "hellowor8d".to_string());
//!
//! assert_eq!(result.messages(), vec!["Must be an alphabetic string"]);
//! ```

use crate::check::Check;
use rusty_checks_validation as validation;
use std::fmt::Display;

/// Fails on empty or whitespace-only strings
pub fn required<T: AsRef<str> + 'static>() -> Check<T> {
    Check::new(|value: &T| validation::validate_required(value.as_ref()))
}

pub fn min_length<T: AsRef<str> + 'static>(min: usize) -> Check<T> {
    Check::new(move |value: &T| validation::validate_min_length(value.as_ref(), min))
}

pub fn max_length<T: AsRef<str> + 'static>(max: usize) -> Check<T> {
    Check::new(move |value: &T| validation::validate_max_length(value.as_ref(), max))
}

pub fn length<T: AsRef<str> + 'static>(min: usize, max: usize) -> Check<T> {
    Check::new(move |value: &T| validation::validate_length(value.as_ref(), min, max))
}

/// Passes when the value has strictly more than `len` characters
pub fn longer_than<T: AsRef<str> + 'static>(len: usize) -> Check<T> {
    Check::new(move |value: &T| validation::validate_longer_than(value.as_ref(), len))
}

/// Passes for non-empty ASCII-letter strings
pub fn alphabetic<T: AsRef<str> + 'static>() -> Check<T> {
    Check::new(|value: &T| validation::validate_alphabetic(value.as_ref()))
}

/// Passes when the value equals one of `allowed`
pub fn one_of<T, S>(allowed: impl IntoIterator<Item = S>) -> Check<T>
where
    T: AsRef<str> + 'static,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    Check::new(move |value: &T| validation::validate_one_of(value.as_ref(), &allowed))
}

pub fn email<T: AsRef<str> + 'static>() -> Check<T> {
    Check::new(|value: &T| validation::validate_email(value.as_ref()))
}

pub fn no_public_domain<T: AsRef<str> + 'static>() -> Check<T> {
    Check::new(|value: &T| validation::validate_no_public_domain(value.as_ref()))
}

/// Passes when the whole value matches `pattern`, otherwise fails with
/// `message`.
///
/// A malformed pattern does not panic. The check fails on every value with
/// a message naming the pattern and the parse error.
#[cfg(feature = "regex-validation")]
pub fn pattern<T: AsRef<str> + 'static>(pattern: &str, message: impl Into<String>) -> Check<T> {
    let pattern = pattern.to_string();
    let message = message.into();
    Check::new(move |value: &T| validation::validate_pattern(value.as_ref(), &pattern, &message))
}

#[cfg(feature = "regex-validation")]
pub fn url<T: AsRef<str> + 'static>() -> Check<T> {
    Check::new(|value: &T| validation::validate_url(value.as_ref()))
}

/// Passes for values strictly greater than `T::default()` (zero for numbers)
pub fn positive<T: PartialOrd + Default + 'static>() -> Check<T> {
    Check::new(|value: &T| validation::validate_positive(value))
}

pub fn min<T>(min: T) -> Check<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Check::new(move |value: &T| validation::validate_min(value, &min))
}

pub fn max<T>(max: T) -> Check<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Check::new(move |value: &T| validation::validate_max(value, &max))
}

pub fn range<T>(min: T, max: T) -> Check<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    Check::new(move |value: &T| validation::validate_range(value, &min, &max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_checks_accept_str_slices() {
        let check = min_length::<&'static str>(3);
        assert!(check.run(&"abc").is_ok());
        assert!(check.run(&"ab").is_err());
    }

    #[test]
    fn test_numeric_checks() {
        assert!(positive::<i64>().run(&1).is_ok());
        assert_eq!(positive::<i64>().run(&0).unwrap_err(), "Value must be positive");
        assert!(min(18).run(&17).is_err());
        assert!(max(120).run(&120).is_ok());
        assert_eq!(range(1.0, 5.0).run(&6.5).unwrap_err(), "Must be between 1 and 5");
    }

    #[test]
    fn test_email_checks() {
        assert!(email::<String>().run(&"ada@example.com".to_string()).is_ok());
        assert!(no_public_domain::<String>().run(&"ada@gmail.com".to_string()).is_err());
    }

    #[test]
    fn test_one_of_check() {
        let role = one_of::<String, _>(["admin", "user"]);
        assert!(role.run(&"user".to_string()).is_ok());
        assert_eq!(
            role.run(&"root".to_string()).unwrap_err(),
            "Must be one of: admin, user"
        );
    }

    #[cfg(feature = "regex-validation")]
    #[test]
    fn test_url_check() {
        let homepage = url::<String>();
        assert!(homepage.run(&"https://example.com/about".to_string()).is_ok());
        assert_eq!(
            homepage.run(&"example.com".to_string()).unwrap_err(),
            "Must be a valid URL"
        );
    }

    #[cfg(feature = "regex-validation")]
    #[test]
    fn test_pattern_check() {
        let zip = pattern::<String>(r"^\d{5}$", "Must be a 5 digit code");
        assert!(zip.run(&"12345".to_string()).is_ok());
        assert_eq!(zip.run(&"1234".to_string()).unwrap_err(), "Must be a 5 digit code");

        let broken = pattern::<String>("(", "unused");
        let err = broken.run(&"anything".to_string()).unwrap_err();
        assert!(err.message().starts_with("Invalid pattern `(`"), "{}", err);
    }
}

//! Regex pattern validation
//!
//! Compiled patterns are cached process-wide so a check built once and run
//! many times compiles its pattern only once.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

static REGEX_CACHE: Lazy<Mutex<HashMap<String, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

static URL_REGEX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*\.[^\s]+$").ok());

/// Compiles `pattern`, reusing a cached copy when one exists.
///
/// The error is the regex crate's own description of why the pattern is
/// malformed.
pub fn compile_pattern(pattern: &str) -> Result<Regex, String> {
    // A panic while holding the lock leaves the map itself intact.
    let mut cache = REGEX_CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }

    let regex = Regex::new(pattern).map_err(|e| e.to_string())?;
    cache.insert(pattern.to_string(), regex.clone());
    Ok(regex)
}

/// Validates `value` against `pattern`, failing with `message` on mismatch.
///
/// A malformed pattern is reported as a failure describing the pattern
/// error instead of `message`.
pub fn validate_pattern(value: &str, pattern: &str, message: &str) -> Result<(), String> {
    let regex = compile_pattern(pattern)
        .map_err(|e| format!("Invalid pattern `{}`: {}", pattern, e))?;

    if regex.is_match(value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Validate URL format (http and https only)
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.as_ref().is_some_and(|regex| regex.is_match(url))
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err("Must be a valid URL".to_string())
    }
}

//! String validation functions
//!
//! Lengths are counted in characters, not bytes.

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates that a value is present (not empty or whitespace only)
pub fn validate_required(s: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        Err("This field is required".to_string())
    } else {
        Ok(())
    }
}

/// Validates string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = char_len(s);
    if len >= min && len <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {} characters", min, max))
    }
}

/// Validates the string is strictly longer than `len` characters
pub fn validate_longer_than(s: &str, len: usize) -> Result<(), String> {
    if char_len(s) > len {
        Ok(())
    } else {
        Err(format!("Must be longer than {} characters", len))
    }
}

/// Validates the string is made of ASCII letters only. Empty strings fail.
pub fn validate_alphabetic(s: &str) -> Result<(), String> {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err("Must be an alphabetic string".to_string())
    }
}

/// Enum/value restriction
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|a| a.as_ref() == value)
}

pub fn validate_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> Result<(), String> {
    if is_one_of(value, allowed) {
        Ok(())
    } else {
        let names: Vec<&str> = allowed.iter().map(AsRef::as_ref).collect();
        Err(format!("Must be one of: {}", names.join(", ")))
    }
}

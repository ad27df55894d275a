//! Email validation functions

/// Common free email providers
pub const PUBLIC_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "mail.com",
    "protonmail.com",
    "yandex.com",
    "zoho.com",
];

/// Structural email check
///
/// Requires exactly one `@`, a non-empty local part of at most 64 characters,
/// and a dotted domain that does not start or end with `.` or `-`, has no
/// empty labels and a top-level label of two or more characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'));
    if !local_ok {
        return false;
    }

    if domain.len() > 255
        || domain.starts_with(&['.', '-'][..])
        || domain.ends_with(&['.', '-'][..])
        || !domain.chars().all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }

    labels.last().is_some_and(|tld| tld.chars().count() >= 2)
}

fn domain_of(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}

/// Checks if email domain is a public domain (gmail, yahoo, etc.)
pub fn is_public_domain(email: &str) -> bool {
    domain_of(email)
        .is_some_and(|domain| PUBLIC_DOMAINS.iter().any(|d| d.eq_ignore_ascii_case(domain)))
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err("Must be a valid email address".to_string())
    }
}

pub fn validate_no_public_domain(email: &str) -> Result<(), String> {
    if is_public_domain(email) {
        Err("Public email domains are not allowed".to_string())
    } else {
        Ok(())
    }
}

//! Rusty Checks Validation
//!
//! Plain validation functions. Each `validate_*` function returns
//! `Ok(())` on success or `Err(message)` with a human-readable message;
//! matchers such as [`contains`] return a plain `bool`.
//!
//! These are the building blocks behind the `rusty_checks::checks`
//! constructors, but they can be called directly too.

pub mod email;
pub mod numeric;
#[cfg(feature = "regex-validation")]
pub mod pattern;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
#[cfg(feature = "regex-validation")]
pub use pattern::*;
pub use string::*;

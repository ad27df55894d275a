//! # rusty-checks
//!
//! Declarative field validation. A [`Check`] is a pure function over a value
//! that passes or fails with a message. Checks are grouped into ordered
//! sequences, bound to field keys, and run against records to produce a
//! [`ValidatedField`] per field.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use rusty_checks::{bind_validators, checks};
//!
//! let validate = bind_validators(HashMap::from([
//!     ("age", vec![checks::positive::<i32>()]),
//! ]));
//!
//! let results = validate(&HashMap::from([("age", -1)]));
//! let age = &results["age"];
//!
//! assert!(!age.is_valid());
//! assert_eq!(age.messages(), vec!["Value must be positive"]);
//! ```
//!
//! ## Features
//!
//! - **`serde`** (default) - `Serialize` for results and errors
//! - **`regex-validation`** (default) - [`checks::pattern`] and [`checks::url`]
//!
//! ## Architecture
//!
//! - [`check`] - the `Check` handle and check sequences
//! - [`apply`] - run one sequence against one value
//! - [`bind`] - bind sequences to keys and run them against records
//! - [`checks`] - built-in check constructors
//! - [`maps`] - generic map/filter/reduce/some/every helpers
//! - [`validation`] - the plain validator functions behind [`checks`]

pub mod apply;
pub mod bind;
pub mod check;
pub mod checks;
pub mod error;
pub mod field;
pub mod report;

pub use apply::apply_validators;
pub use bind::{bind_validators, BoundValidators};
pub use check::{Check, CheckResult, Checks};
pub use error::CheckError;
pub use field::ValidatedField;
pub use report::{all_valid, ValidationReport};

pub use rusty_checks_maps as maps;
pub use rusty_checks_validation as validation;

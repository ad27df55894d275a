//! Bind check sequences to field keys
//!
//! Binding captures a `field -> checks` mapping once and returns something
//! reusable that validates whole records (`field -> value` mappings).
//!
//! Only fields present both in the bound mapping and in the record show up
//! in the output. A configured field missing from the record is skipped
//! silently by [`BoundValidators::validate`]; use
//! [`BoundValidators::validate_report`] when missing fields must count as
//! failures.

use crate::apply::apply_validators;
use crate::check::Checks;
use crate::field::ValidatedField;
use crate::report::ValidationReport;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;
use tracing::debug;

/// A reusable record validator built from a `field -> checks` mapping.
///
/// Cloning is cheap; clones share the same mapping. The mapping is never
/// modified after binding.
pub struct BoundValidators<K, T> {
    checks_by_field: Arc<HashMap<K, Checks<T>>>,
}

impl<K, T> BoundValidators<K, T>
where
    K: Eq + Hash + Clone,
    T: Clone,
{
    pub fn new(checks_by_field: HashMap<K, Checks<T>>) -> Self {
        Self {
            checks_by_field: Arc::new(checks_by_field),
        }
    }

    /// Validates one record.
    ///
    /// The output holds one [`ValidatedField`] for every key that is both
    /// bound and present in `data`.
    pub fn validate<S: BuildHasher>(
        &self,
        data: &HashMap<K, T, S>,
    ) -> HashMap<K, ValidatedField<T>> {
        let results: HashMap<K, ValidatedField<T>> = self
            .checks_by_field
            .iter()
            .filter_map(|(field, checks)| {
                let value = data.get(field)?;
                Some((field.clone(), apply_validators(checks, value.clone())))
            })
            .collect();

        debug!(
            configured = self.checks_by_field.len(),
            validated = results.len(),
            skipped = self.checks_by_field.len() - results.len(),
            failing = results.values().filter(|r| !r.is_valid()).count(),
            "validated record"
        );

        results
    }

    /// Validates one record and also lists bound fields absent from it.
    pub fn validate_report<S: BuildHasher>(
        &self,
        data: &HashMap<K, T, S>,
    ) -> ValidationReport<K, T> {
        let missing: Vec<K> = self
            .checks_by_field
            .keys()
            .filter(|field| !data.contains_key(*field))
            .cloned()
            .collect();

        ValidationReport::new(self.validate(data), missing)
    }

    /// The bound field keys, in no particular order
    pub fn fields(&self) -> impl Iterator<Item = &K> {
        self.checks_by_field.keys()
    }

    pub fn len(&self) -> usize {
        self.checks_by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks_by_field.is_empty()
    }
}

impl<K, T> Clone for BoundValidators<K, T> {
    fn clone(&self) -> Self {
        Self {
            checks_by_field: Arc::clone(&self.checks_by_field),
        }
    }
}

impl<K, T> std::fmt::Debug for BoundValidators<K, T>
where
    K: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundValidators")
            .field("fields", &self.checks_by_field.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Captures `checks_by_field` and returns a function that validates records.
///
/// ```
/// use std::collections::HashMap;
/// use rusty_checks::{bind_validators, checks};
///
/// let validate = bind_validators(HashMap::from([
///     ("name", vec![checks::required::<String>()]),
/// ]));
///
/// let record = HashMap::from([("name", "Ada".to_string())]);
/// assert!(validate(&record)["name"].is_valid());
/// ```
pub fn bind_validators<K, T>(
    checks_by_field: HashMap<K, Checks<T>>,
) -> impl Fn(&HashMap<K, T>) -> HashMap<K, ValidatedField<T>>
where
    K: Eq + Hash + Clone,
    T: Clone,
{
    let bound = BoundValidators::new(checks_by_field);
    move |data: &HashMap<K, T>| bound.validate(data)
}

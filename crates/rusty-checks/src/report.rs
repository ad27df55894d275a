//! Whole-record validation outcomes

use crate::error::CheckError;
use crate::field::ValidatedField;
use rusty_checks_maps::every;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// True when every produced field result is valid.
///
/// This says nothing about fields that were bound but absent from the
/// record, since those produce no result. See [`ValidationReport`].
pub fn all_valid<K, T, S>(results: &HashMap<K, ValidatedField<T>, S>) -> bool
where
    K: Eq + Hash,
    S: BuildHasher,
{
    every(results, ValidatedField::is_valid)
}

/// Field results for one record plus the bound fields it did not supply.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport<K, T> {
    fields: HashMap<K, ValidatedField<T>>,
    missing: Vec<K>,
}

impl<K: Eq + Hash, T> ValidationReport<K, T> {
    pub fn new(fields: HashMap<K, ValidatedField<T>>, missing: Vec<K>) -> Self {
        Self { fields, missing }
    }

    /// Valid only when nothing is missing and every field passed.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty() && all_valid(&self.fields)
    }

    pub fn fields(&self) -> &HashMap<K, ValidatedField<T>> {
        &self.fields
    }

    pub fn field(&self, key: &K) -> Option<&ValidatedField<T>> {
        self.fields.get(key)
    }

    /// Bound fields absent from the record, in no particular order
    pub fn missing(&self) -> &[K] {
        &self.missing
    }

    /// Fields whose checks failed
    pub fn invalid_fields(&self) -> impl Iterator<Item = (&K, &ValidatedField<T>)> {
        self.fields.iter().filter(|(_, field)| !field.is_valid())
    }

    /// Every failure keyed by field. Missing fields get a single
    /// "This field is required" error.
    pub fn errors(&self) -> HashMap<&K, Vec<CheckError>> {
        self.invalid_fields()
            .map(|(key, field)| (key, field.errors().to_vec()))
            .chain(
                self.missing
                    .iter()
                    .map(|key| (key, vec![CheckError::new("This field is required")])),
            )
            .collect()
    }

    pub fn into_fields(self) -> HashMap<K, ValidatedField<T>> {
        self.fields
    }
}

impl<K: Eq + Hash, T: PartialEq> PartialEq for ValidationReport<K, T> {
    /// Missing keys are compared as sets since their order is unspecified.
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
            && self.missing.len() == other.missing.len()
            && self.missing.iter().all(|key| other.missing.contains(key))
    }
}

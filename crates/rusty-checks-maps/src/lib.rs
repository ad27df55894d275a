//! Rusty Checks Maps
//!
//! Higher-order helpers over key-value collections: [`map`], [`filter`],
//! [`reduce`], [`some`] and [`every`].
//!
//! Every helper takes a borrowed collection (anything iterating as
//! `(&K, &V)`, so `&HashMap` and `&BTreeMap` both work) and never mutates it.
//! Helpers that build a new mapping collect into whatever
//! `FromIterator<(K, _)>` the caller asks for.
//!
//! Iteration order is the collection's own. For a `HashMap` that order is
//! unspecified, so a [`reduce`] whose combining function is not commutative
//! gives run-dependent output. Use a `BTreeMap` when order matters.
//!
//! ```
//! use std::collections::HashMap;
//! use rusty_checks_maps::{map, every};
//!
//! let words = HashMap::from([("a", "test"), ("b", "example")]);
//! let upper: HashMap<_, _> = map(&words, |w| w.to_uppercase());
//!
//! assert_eq!(upper["a"], "TEST");
//! assert!(every(&upper, |w| w.chars().all(|c| c.is_ascii_uppercase())));
//! ```

/// Returns a new mapping with the same keys, each value replaced by `f(value)`.
pub fn map<'a, K, V, U, C, F>(entries: impl IntoIterator<Item = (&'a K, &'a V)>, mut f: F) -> C
where
    K: Clone + 'a,
    V: 'a,
    F: FnMut(&V) -> U,
    C: FromIterator<(K, U)>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), f(value)))
        .collect()
}

/// Returns a new mapping holding only the entries whose value satisfies `f`.
pub fn filter<'a, K, V, C, F>(entries: impl IntoIterator<Item = (&'a K, &'a V)>, mut f: F) -> C
where
    K: Clone + 'a,
    V: Clone + 'a,
    F: FnMut(&V) -> bool,
    C: FromIterator<(K, V)>,
{
    entries
        .into_iter()
        .filter(|(_, value)| f(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Folds every value into an accumulator starting from `init`.
///
/// An empty collection returns `init` untouched.
pub fn reduce<'a, K, V, A, F>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    mut f: F,
    init: A,
) -> A
where
    K: 'a,
    V: 'a,
    F: FnMut(A, &V) -> A,
{
    entries
        .into_iter()
        .fold(init, |acc, (_, value)| f(acc, value))
}

/// True when at least one value satisfies `f`. False for an empty collection.
pub fn some<'a, K, V, F>(entries: impl IntoIterator<Item = (&'a K, &'a V)>, mut f: F) -> bool
where
    K: 'a,
    V: 'a,
    F: FnMut(&V) -> bool,
{
    entries.into_iter().any(|(_, value)| f(value))
}

/// True when every value satisfies `f`. True for an empty collection.
///
/// Stops at the first value that fails.
pub fn every<'a, K, V, F>(entries: impl IntoIterator<Item = (&'a K, &'a V)>, mut f: F) -> bool
where
    K: 'a,
    V: 'a,
    F: FnMut(&V) -> bool,
{
    entries.into_iter().all(|(_, value)| f(value))
}

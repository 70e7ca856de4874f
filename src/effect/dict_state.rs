//! Dictionary-backed monoid state.
//!
//! `DictState` is a string-keyed mapping whose monoid operation is a
//! right-biased key union: every key of the right operand is written over
//! the left one, so on a conflict the later mapping wins. The union is
//! shallow; nested values are replaced, never merged. The identity is the
//! empty mapping.
//!
//! Keys keep their first insertion position, which makes the union
//! deterministic when iterated or printed.

use std::fmt;
use std::ops::{Add, Deref};

use indexmap::IndexMap;

use super::context::ContextMonad;
use crate::typeclass::{Monoid, Semigroup};

/// A context monad whose state is a [`DictState`].
pub type DictStateMonad<T, V> = ContextMonad<T, DictState<V>>;

/// A mapping from string keys to values, combined by right-biased union.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::DictState;
/// use monadic::typeclass::{Monoid, Semigroup};
///
/// let earlier = DictState::from_iter([("a", 1), ("shared", 1)]);
/// let later = DictState::from_iter([("b", 2), ("shared", 2)]);
///
/// let merged = earlier + later;
/// assert_eq!(merged, DictState::from_iter([("a", 1), ("shared", 2), ("b", 2)]));
/// assert_eq!(DictState::zero().combine(merged.clone()), merged);
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DictState<V> {
    entries: IndexMap<String, V>,
}

impl<V> DictState<V> {
    /// Creates an empty state.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a value, returning the value previously stored under `key`.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Consumes the state and returns the underlying mapping.
    pub fn into_inner(self) -> IndexMap<String, V> {
        self.entries
    }
}

impl<V> Default for DictState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Deref for DictState<V> {
    type Target = IndexMap<String, V>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<V: fmt::Debug> fmt::Debug for DictState<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for DictState<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        Self {
            entries: iterator
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl<V> IntoIterator for DictState<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V> From<IndexMap<String, V>> for DictState<V> {
    fn from(entries: IndexMap<String, V>) -> Self {
        Self { entries }
    }
}

impl<V> Semigroup for DictState<V> {
    /// Right-biased union: keys of `other` override keys of `self`.
    fn combine(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl<V: PartialEq> Monoid for DictState<V> {
    fn zero() -> Self {
        Self::new()
    }
}

impl<V> Add for DictState<V> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl<V: Clone> Add for &DictState<V> {
    type Output = DictState<V>;

    fn add(self, other: Self) -> DictState<V> {
        self.combine_ref(other)
    }
}

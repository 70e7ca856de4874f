//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an equality and a distinguished identity
//! element `zero` such that for all `a`:
//!
//! - `zero.combine(a) == a` (left identity)
//! - `a.combine(zero) == a` (right identity)
//!
//! `zero` belongs to the type, not to any particular value; the caller of
//! a custom instance is responsible for making it obey the identity laws.
//!
//! Monoids are what the context monad accumulates its state in.
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::zero(), "");
//! assert_eq!(String::zero().combine(String::from("hello")), "hello");
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// Equality is part of the contract so that the identity laws, and the
/// `is_zero` test, can be stated.
pub trait Monoid: Semigroup + PartialEq + Sized {
    /// Returns the identity element.
    fn zero() -> Self;

    /// Combines every element of an iterator, starting from `zero`.
    ///
    /// An empty iterator yields `zero`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Self::zero(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns `true` if this value equals the identity element.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Monoid for String {
    fn zero() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Monoid for Vec<T> {
    fn zero() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn zero() -> Self {}
}

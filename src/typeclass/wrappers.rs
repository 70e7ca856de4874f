//! Numeric wrapper types for different algebraic operations.
//!
//! The same number can be a monoid in more than one way. These newtypes
//! pick one:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//!
//! Both are convenient states for a context monad that counts or scales.

use std::ops::{Add, Mul};

use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A wrapper whose monoid operation is addition.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
/// assert_eq!(Sum::<i32>::zero(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Add<Output = A> + Default + PartialEq> Monoid for Sum<A> {
    fn zero() -> Self {
        Self(A::default())
    }
}

/// A wrapper whose monoid operation is multiplication.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{Monoid, Product};
///
/// let factors = vec![Product::new(2), Product::new(3), Product::new(4)];
/// assert_eq!(Product::combine_all(factors), Product::new(24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn zero() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid! {
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
}

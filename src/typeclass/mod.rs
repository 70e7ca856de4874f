//! Type class traits for functional programming abstractions.
//!
//! This module provides the capability set every wrapped-value container
//! implements to compose with the generic machinery of the crate:
//!
//! - [`Functor`]: Mapping over the payload
//! - [`Applicative`]: Injecting values and applying wrapped functions
//! - [`Flatten`]: Collapsing one level of nesting
//! - [`Monad`]: Sequencing computations (`bind = fmap + flatten`)
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate
//! them, so `Functor` and `Monad` can be stated once for every container.
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::{Monoid, Semigroup, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::zero().combine(value.clone()), value);
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::{Flatten, Monad};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};

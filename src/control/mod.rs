//! Control structures for functional programming.
//!
//! - [`Maybe`]: An optional value whose absence propagates through
//!   `fmap`/`bind` chains instead of being raised
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn checked_divide(dividend: i32, divisor: i32) -> Maybe<i32> {
//!     if divisor == 0 { Maybe::nothing() } else { Maybe::just(dividend / divisor) }
//! }
//!
//! let result = Maybe::just(100)
//!     .bind(|n| checked_divide(n, 5))
//!     .bind(|n| checked_divide(n, 2));
//! assert_eq!(result, Maybe::just(10));
//!
//! let failed = Maybe::just(100)
//!     .bind(|n| checked_divide(n, 0))
//!     .bind(|n| checked_divide(n, 2));
//! assert!(failed.is_nothing());
//! ```

mod maybe;

pub use maybe::Maybe;

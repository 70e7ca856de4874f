//! Function lifting utilities.
//!
//! - [`Wrap`]: A decorator factory that turns a plain function into one
//!   returning a monadic value
//! - [`Wrapped`]: The lifted function, carrying the original's name
//!
//! The post-processing and injection steps are pluggable through
//! [`ProcessResults`] and [`LiftResult`].
//!
//! # Examples
//!
//! ```
//! use monadic::compose::Wrap;
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn increment(value: i32) -> i32 { value + 1 }
//!
//! let lifted = Wrap::<Maybe<i32>>::new().decorate(increment);
//! let result = Maybe::just(1).bind(|n| lifted.call(n)).bind(|n| lifted.call(n));
//! assert_eq!(result, Maybe::just(3));
//! ```

mod wrap;

pub use wrap::{
    DefaultLift, LiftResult, LiftWith, ProcessResults, ProcessWith, Unprocessed, Wrap, Wrapped,
};

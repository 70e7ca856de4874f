//! Context-carrying computations.
//!
//! - [`ContextMonad`]: A value paired with state accumulated through a
//!   [`Monoid`](crate::typeclass::Monoid)
//! - [`DictState`]: A mapping state combined by right-biased key union
//! - [`DictStateMonad`]: A context monad over `DictState`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{ContextMonad, DictState, DictStateMonad};
//! use monadic::typeclass::Monad;
//!
//! fn record(key: &str, value: i32) -> DictStateMonad<i32, i32> {
//!     ContextMonad::new(value, DictState::from_iter([(key, value)]))
//! }
//!
//! let total = record("first", 1)
//!     .bind(|a| record("second", 2).bind(move |b| record("total", a + b)));
//!
//! assert_eq!(*total.value(), 3);
//! assert_eq!(
//!     total.state(),
//!     &DictState::from_iter([("first", 1), ("second", 2), ("total", 3)])
//! );
//! ```

mod context;
mod dict_state;

pub use context::ContextMonad;
pub use dict_state::{DictState, DictStateMonad};

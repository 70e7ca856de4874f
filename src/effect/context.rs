//! Context Monad - a value carried together with accumulated state.
//!
//! A `ContextMonad<T, S>` pairs a value of type `T` with a state of type
//! `S`. The state must be a [`Monoid`]: a fresh `unit` starts from
//! `S::zero()`, and every time nested contexts are collapsed their states
//! are combined, outer state first.
//!
//! Mapping only touches the value. The state is carried, never read, by
//! `fmap`; it changes only when `bind`/`flatten` fold in the state of an
//! inner context.
//!
//! # Laws
//!
//! - Left Identity: `unit(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(unit) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! The last two hold because the monoid is associative and `zero` is its
//! identity.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::ContextMonad;
//! use monadic::typeclass::{Functor, Monad};
//!
//! fn log(message: &str) -> ContextMonad<(), Vec<String>> {
//!     ContextMonad::with_state(vec![message.to_string()])
//! }
//!
//! let computation = log("start")
//!     .then(ContextMonad::from(20))
//!     .bind(|n| log("doubling").fmap(move |()| n * 2));
//!
//! assert_eq!(*computation.value(), 40);
//! assert_eq!(computation.state(), &vec!["start".to_string(), "doubling".to_string()]);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Flatten, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// A value paired with monoidal state.
///
/// # Type Parameters
///
/// - `T`: The value type
/// - `S`: The state type (a `Monoid` for everything beyond construction)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextMonad<T, S> {
    /// The carried value.
    value: T,
    /// The accumulated state.
    state: S,
}

impl<T, S> ContextMonad<T, S> {
    /// Creates a context from a value and an explicit state.
    #[inline]
    pub const fn new(value: T, state: S) -> Self {
        Self { value, state }
    }

    /// Returns a reference to the carried value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns a reference to the accumulated state.
    #[inline]
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Splits the context into its value and state.
    #[inline]
    pub fn into_parts(self) -> (T, S) {
        (self.value, self.state)
    }

    /// Consumes the context and returns only the value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the context and returns only the state.
    #[inline]
    pub fn into_state(self) -> S {
        self.state
    }

    /// Starts a [`Wrap`](crate::compose::Wrap) that lifts functions into this context.
    #[cfg(feature = "compose")]
    pub const fn wrap() -> crate::compose::Wrap<Self> {
        crate::compose::Wrap::new()
    }
}

impl<S> ContextMonad<(), S> {
    /// Creates a context that only contributes state.
    ///
    /// Sequenced with `then`/`bind`, its state is folded into the result.
    #[inline]
    pub const fn with_state(state: S) -> Self {
        Self { value: (), state }
    }
}

/// Injects a value with the monoid's identity as its state.
impl<T, S: Monoid> From<T> for ContextMonad<T, S> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value, S::zero())
    }
}

impl<T: fmt::Debug, S: fmt::Debug> fmt::Display for ContextMonad<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "State(value={:?}, context={:?})",
            self.value, self.state
        )
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, S> TypeConstructor for ContextMonad<T, S> {
    type Inner = T;
    type WithType<B> = ContextMonad<B, S>;
}

impl<T, S: Clone> Functor for ContextMonad<T, S> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> ContextMonad<B, S>
    where
        F: FnOnce(T) -> B,
    {
        ContextMonad::new(function(self.value), self.state)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> ContextMonad<B, S>
    where
        F: FnOnce(&T) -> B,
    {
        ContextMonad::new(function(&self.value), self.state.clone())
    }
}

impl<T, S: Monoid + Clone> Applicative for ContextMonad<T, S> {
    #[inline]
    fn unit<B>(value: B) -> ContextMonad<B, S> {
        ContextMonad::new(value, S::zero())
    }

    #[inline]
    fn apply<B, Output>(self, other: ContextMonad<B, S>) -> ContextMonad<Output, S>
    where
        T: FnOnce(B) -> Output,
    {
        self.bind(|function| other.fmap(function))
    }

    #[inline]
    fn map2<B, C, F>(self, other: ContextMonad<B, S>, function: F) -> ContextMonad<C, S>
    where
        F: FnOnce(T, B) -> C,
    {
        self.bind(|first| other.fmap(|second| function(first, second)))
    }
}

impl<T, S: Semigroup> Flatten for ContextMonad<ContextMonad<T, S>, S> {
    type Output = ContextMonad<T, S>;

    /// Collapses one level, combining the outer state with the inner one.
    #[inline]
    fn flatten(self) -> ContextMonad<T, S> {
        let ContextMonad {
            value: inner,
            state: outer_state,
        } = self;
        ContextMonad::new(inner.value, outer_state.combine(inner.state))
    }
}

impl<T, S: Monoid + Clone> Monad for ContextMonad<T, S> {}

//! Monad type class - singleton contexts that collapse when nested.
//!
//! The point of view taken here is that a monad is a **singleton
//! container**: nesting one instance inside another is redundant, so the
//! basic ingredient is [`Flatten`], which collapses one level of nesting.
//! `bind` then comes for free as "map, then flatten".
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! unit(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! ## Flatten Identity
//!
//! Re-wrapping an already flat value and flattening returns it unchanged:
//!
//! ```text
//! unit(m).flatten() == m
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Flatten, Monad};
//!
//! let nested: Maybe<Maybe<i32>> = Maybe::just(Maybe::just(5));
//! assert_eq!(nested.flatten(), Maybe::just(5));
//!
//! fn reciprocal(n: f64) -> Maybe<f64> {
//!     if n == 0.0 { Maybe::nothing() } else { Maybe::just(1.0 / n) }
//! }
//! assert_eq!(Maybe::just(4.0).bind(reciprocal), Maybe::just(0.25));
//! assert!(Maybe::just(0.0).bind(reciprocal).is_nothing());
//! ```

use super::applicative::Applicative;

/// Collapses one level of nesting of the same container type.
///
/// For stateful containers the state of every unwrapped layer is
/// accumulated, outer state first.
///
/// `flatten` consumes the receiver: the value is moved in, collapsed and
/// handed back. `flattened` leaves the receiver untouched by cloning it
/// first.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Flatten;
///
/// let deep: Maybe<Maybe<Maybe<i32>>> = Maybe::just(Maybe::just(Maybe::just(1)));
/// assert_eq!(deep.flattened().flatten(), Maybe::just(1));
/// // `deep` is still available after `flattened`
/// assert!(deep.is_just());
/// ```
pub trait Flatten {
    /// The container with one level of nesting removed.
    type Output;

    /// Removes one level of nesting, consuming `self`.
    fn flatten(self) -> Self::Output;

    /// Returns a flattened copy, leaving `self` untouched.
    #[inline]
    fn flattened(&self) -> Self::Output
    where
        Self: Clone,
    {
        self.clone().flatten()
    }
}

/// A type class for types that support sequencing of computations.
///
/// `bind` is provided in terms of `fmap` and [`Flatten`]; implementations
/// only have to supply the flattening of their nested form.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::{ContextMonad, DictState};
/// use monadic::typeclass::Monad;
///
/// let first: ContextMonad<i32, DictState<i32>> =
///     ContextMonad::new(1, DictState::from_iter([("a", 1)]));
/// let chained = first.bind(|n| ContextMonad::new(n + 1, DictState::from_iter([("b", 2)])));
///
/// assert_eq!(*chained.value(), 2);
/// assert_eq!(chained.state(), &DictState::from_iter([("a", 1), ("b", 2)]));
/// ```
pub trait Monad: Applicative {
    /// Applies a monadic function to the payload and flattens the result.
    ///
    /// In Haskell, this is `>>=`. The function returns a wrapped value, so
    /// mapping it produces one level of nesting that is then collapsed.
    #[inline]
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
        Self::WithType<Self::WithType<B>>: Flatten<Output = Self::WithType<B>>,
    {
        self.fmap(function).flatten()
    }

    /// Sequences two monadic computations, discarding the first value.
    ///
    /// The context of `self` is kept: an absent `Maybe` stays absent and a
    /// context monad contributes its state.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<Self::WithType<B>>: Flatten<Output = Self::WithType<B>>,
    {
        self.bind(|_| next)
    }
}

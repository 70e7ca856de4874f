//! Applicative type class - injecting values and applying wrapped functions.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `unit`: inject a raw value into the container (Haskell's `pure`)
//! - `apply`: apply a wrapped function to a wrapped value
//! - `map2`/`product`: combine two wrapped values
//!
//! For every type in this crate that is also a [`Monad`](super::Monad),
//! `apply` and `map2` are induced from `bind` rather than written again:
//! unwrapping the function, unwrapping the argument and re-injecting the
//! result is exactly `function.bind(|f| value.fmap(f))`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! unit(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! unit(f).apply(unit(x)) == unit(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(unit(y)) == unit(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::unit(42);
//! assert_eq!(x, Maybe::just(42));
//!
//! let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::just(3));
//! ```

use super::functor::Functor;

/// A type class for types that support injecting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Applicative;
///
/// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
/// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
/// ```
pub trait Applicative: Functor {
    /// Injects a raw value into the applicative context.
    ///
    /// This is the default constructor of the context: `Just` for `Maybe`,
    /// the monoid's zero state for `ContextMonad`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let x: Maybe<&str> = <Maybe<()>>::unit("hello");
    /// assert_eq!(x, Maybe::just("hello"));
    /// ```
    fn unit<B>(value: B) -> Self::WithType<B>;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Available when `Self` wraps a function type.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let missing: Maybe<i32> = Maybe::nothing();
    /// assert!(Maybe::just(1).map2(missing, |a, b| a + b).is_nothing());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

//! Functor type class - mapping over the payload of a container.
//!
//! A `Functor` lifts a transformation on the wrapped value to a
//! transformation on the whole container. Only the payload is touched:
//! whatever context the container carries (absence for `Maybe`, accumulated
//! state for `ContextMonad`) flows through unchanged.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Functor;
//!
//! let present: Maybe<i32> = Maybe::just(5);
//! assert_eq!(present.fmap(|n| n + 1), Maybe::just(6));
//!
//! // Nothing short-circuits without calling the function
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert!(absent.fmap(|n: i32| -> i32 { panic!("never called: {n}") }).is_nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// Implementations must not inspect or alter anything but the payload, and
/// an absorbing variant (such as `Maybe::Nothing`) must be returned without
/// invoking the function.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Functor;
///
/// let x: Maybe<i32> = Maybe::just(5);
/// let y: Maybe<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::just("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available afterwards, or when the
    /// inner type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Functor;
    ///
    /// let x: Maybe<String> = Maybe::just("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::just(5));
    /// assert_eq!(x, Maybe::just("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// The context (absence, accumulated state) is kept.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

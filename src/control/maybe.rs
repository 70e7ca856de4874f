//! Maybe - the optional-value monad.
//!
//! A `Maybe<T>` either holds a present value (`Just`) or is `Nothing`.
//! `Nothing` is an absorbing element: `fmap`, `bind` and `apply` return it
//! without calling the supplied function, so absence propagates silently
//! through a chain of computations instead of being raised.
//!
//! `Nothing` is a variant of the enum, not a value of `T`. It is therefore
//! unique per `Maybe<T>` type and cannot be confused with any payload, even
//! when `T` has values that compare equal to each other in surprising ways.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Functor, Monad};
//!
//! fn parse(text: &str) -> Maybe<i32> {
//!     text.parse::<i32>().ok().into()
//! }
//!
//! assert_eq!(parse("41").fmap(|n| n + 1), Maybe::just(42));
//! assert!(parse("x").bind(|n| Maybe::just(n * 2)).is_nothing());
//! assert_eq!(Maybe::<i32>::nothing().to_string(), "Nothing");
//! assert_eq!(Maybe::just("a").to_string(), "Just(\"a\")");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Flatten, Functor, Monad, TypeConstructor};

/// An optional value with monadic composition.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let present = Maybe::just(5);
/// assert_eq!(present.value(), Ok(&5));
///
/// // Reading the value of an absent Maybe yields another absent Maybe.
/// let absent: Maybe<i32> = Maybe::nothing();
/// assert_eq!(absent.value(), Err(Maybe::Nothing));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absent value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Creates a present `Maybe`.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates an absent `Maybe`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` if this is the absent value.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        !self.is_nothing()
    }

    /// Reads the payload.
    ///
    /// Like `slice::binary_search`, both arms of the `Result` are ordinary
    /// answers: `Ok` carries the present payload, `Err` carries a fresh
    /// absent `Maybe`. Reading the value of `Nothing` is not a failure, it
    /// simply gives back `Nothing`.
    #[inline]
    pub const fn value(&self) -> Result<&T, Self> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(Self::Nothing),
        }
    }

    /// Borrows the payload, keeping the `Maybe` structure.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the payload, or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Starts a [`Wrap`](crate::compose::Wrap) that lifts functions into `Maybe<T>`.
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let parse = Maybe::<i32>::wrap().decorate(|text: &str| text.parse::<i32>().ok());
    /// assert_eq!(parse.call("7"), Maybe::just(7));
    /// assert!(parse.call("seven").is_nothing());
    /// ```
    #[cfg(feature = "compose")]
    pub const fn wrap() -> crate::compose::Wrap<Self> {
        crate::compose::Wrap::new()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Just(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value:?})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().fmap(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn unit<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.bind(|function| other.fmap(function))
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.bind(|first| other.fmap(|second| function(first, second)))
    }
}

impl<T> Flatten for Maybe<Maybe<T>> {
    type Output = Maybe<T>;

    #[inline]
    fn flatten(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Monad for Maybe<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn just_is_present() {
        let present = Maybe::just(5);
        assert!(present.is_just());
        assert!(!present.is_nothing());
    }

    #[rstest]
    fn nothing_is_absent() {
        let absent: Maybe<i32> = Maybe::nothing();
        assert!(absent.is_nothing());
        assert_eq!(absent, Maybe::default());
    }

    #[rstest]
    fn value_of_nothing_is_nothing_again() {
        let absent: Maybe<String> = Maybe::nothing();
        let read = absent.value();
        assert_eq!(read, Err(Maybe::Nothing));
        assert!(read.unwrap_err().is_nothing());
    }

    #[rstest]
    fn value_of_just_is_payload() {
        assert_eq!(Maybe::just("text").value(), Ok(&"text"));
    }

    #[rstest]
    fn nothing_payload_is_not_confused_with_option_none() {
        // A present `None` is a value, not absence.
        let present_none: Maybe<Option<i32>> = Maybe::just(None);
        assert!(present_none.is_just());
    }

    #[rstest]
    fn fmap_skips_function_on_nothing() {
        let absent: Maybe<i32> = Maybe::nothing();
        let mut called = false;
        let result = absent.fmap(|n| {
            called = true;
            n + 1
        });
        assert!(result.is_nothing());
        assert!(!called);
    }

    #[rstest]
    fn fmap_ref_keeps_original() {
        let present = Maybe::just(String::from("abc"));
        assert_eq!(present.fmap_ref(String::len), Maybe::just(3));
        assert_eq!(present, Maybe::just(String::from("abc")));
    }

    #[rstest]
    #[case(Maybe::just(Maybe::just(1)), Maybe::just(1))]
    #[case(Maybe::just(Maybe::Nothing), Maybe::Nothing)]
    #[case(Maybe::Nothing, Maybe::Nothing)]
    fn flatten_collapses_one_level(#[case] nested: Maybe<Maybe<i32>>, #[case] expected: Maybe<i32>) {
        assert_eq!(nested.flatten(), expected);
    }

    #[rstest]
    fn flattened_leaves_original_untouched() {
        let nested = Maybe::just(Maybe::just(String::from("x")));
        let flat = nested.flattened();
        assert_eq!(flat, Maybe::just(String::from("x")));
        assert_eq!(nested, Maybe::just(Maybe::just(String::from("x"))));
    }

    #[rstest]
    fn bind_chains_and_short_circuits() {
        let halve = |n: i32| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() };
        assert_eq!(Maybe::just(8).bind(halve).bind(halve), Maybe::just(2));
        assert!(Maybe::just(6).bind(halve).bind(halve).is_nothing());
    }

    #[rstest]
    fn then_keeps_absence_of_first() {
        let absent: Maybe<i32> = Maybe::nothing();
        assert!(absent.then(Maybe::just("next")).is_nothing());
        assert_eq!(Maybe::just(1).then(Maybe::just("next")), Maybe::just("next"));
    }

    #[rstest]
    fn apply_unwraps_both_sides() {
        let function: Maybe<fn(i32) -> i32> = Maybe::just(|n| n * 3);
        assert_eq!(function.apply(Maybe::just(4)), Maybe::just(12));

        let missing_function: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert!(missing_function.apply(Maybe::just(4)).is_nothing());

        let function: Maybe<fn(i32) -> i32> = Maybe::just(|n| n * 3);
        assert!(function.apply(Maybe::<i32>::nothing()).is_nothing());
    }

    #[rstest]
    fn product_pairs_values() {
        assert_eq!(Maybe::just(1).product(Maybe::just('a')), Maybe::just((1, 'a')));
    }

    #[rstest]
    fn from_wrapped_value_does_not_double_wrap() {
        let inner = Maybe::just(7);
        let lifted: Maybe<i32> = Maybe::from(inner);
        assert_eq!(lifted, Maybe::just(7));
    }

    #[rstest]
    fn option_round_trip() {
        let maybe: Maybe<i32> = Some(3).into();
        assert_eq!(maybe, Maybe::just(3));
        assert_eq!(maybe.into_option(), Some(3));
        assert_eq!(Maybe::<i32>::from(None), Maybe::Nothing);
    }

    #[rstest]
    #[case(Maybe::just(5), "Just(5)")]
    #[case(Maybe::Nothing, "Nothing")]
    fn display(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(maybe.to_string(), expected);
    }

    #[rstest]
    fn unwrap_or_defaults_only_when_absent() {
        assert_eq!(Maybe::just(1).unwrap_or(0), 1);
        assert_eq!(Maybe::nothing().unwrap_or(0), 0);
    }
}

//! Lifting plain functions into a monadic context.
//!
//! [`Wrap`] is a decorator factory. Configured with an optional result
//! post-processor and an optional lifting function, it turns a plain
//! function `A -> R` into a [`Wrapped`] function `A -> M`:
//!
//! 1. call the original function,
//! 2. pass the raw result through `process_results` (if configured),
//! 3. inject it with `lift_with` (by default `Into<M>`, i.e. `unit` for
//!    raw values and a pass-through for values that are already `M`).
//!
//! Functions of several arguments are lifted as functions of a tuple.
//! The wrapped function keeps the original's name as its introspection
//! metadata.
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::Wrap;
//! use monadic::control::Maybe;
//!
//! fn checked_root(value: f64) -> Option<f64> {
//!     (value >= 0.0).then(|| value.sqrt())
//! }
//!
//! let root = Wrap::<Maybe<f64>>::new().decorate(checked_root);
//! assert_eq!(root.call(9.0), Maybe::just(3.0));
//! assert!(root.call(-1.0).is_nothing());
//! assert!(root.name().ends_with("checked_root"));
//! ```

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

/// Marker: the raw result is passed on unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unprocessed;

/// Marker holding the function that post-processes raw results.
#[derive(Debug, Clone, Copy)]
pub struct ProcessWith<G>(G);

/// Marker: results are injected through `Into`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLift;

/// Marker holding a custom lifting function.
#[derive(Debug, Clone, Copy)]
pub struct LiftWith<L>(L);

/// The post-processing step of a wrapped function.
pub trait ProcessResults<R, O> {
    /// Transforms the raw result of the original function.
    fn process(&self, raw: R) -> O;
}

impl<R> ProcessResults<R, R> for Unprocessed {
    #[inline]
    fn process(&self, raw: R) -> R {
        raw
    }
}

impl<R, O, G> ProcessResults<R, O> for ProcessWith<G>
where
    G: Fn(R) -> O,
{
    #[inline]
    fn process(&self, raw: R) -> O {
        (self.0)(raw)
    }
}

/// The injection step of a wrapped function.
pub trait LiftResult<O, M> {
    /// Injects the processed result into the target context.
    fn lift(&self, value: O) -> M;
}

impl<O, M> LiftResult<O, M> for DefaultLift
where
    O: Into<M>,
{
    #[inline]
    fn lift(&self, value: O) -> M {
        value.into()
    }
}

impl<O, M, L> LiftResult<O, M> for LiftWith<L>
where
    L: Fn(O) -> M,
{
    #[inline]
    fn lift(&self, value: O) -> M {
        (self.0)(value)
    }
}

/// A decorator factory producing functions that return `M`.
///
/// Each of `process_results` and `lift_with` can be configured once.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::Wrap;
/// use monadic::effect::ContextMonad;
/// use monadic::typeclass::Sum;
///
/// let counted = Wrap::<ContextMonad<usize, Sum<u32>>>::new()
///     .process_results(|text: String| text.len())
///     .lift_with(|length: usize| ContextMonad::new(length, Sum::new(1)))
///     .decorate(|name: &str| format!("hello, {name}"));
///
/// assert_eq!(counted.call("world"), ContextMonad::new(12, Sum::new(1)));
/// ```
pub struct Wrap<M, P = Unprocessed, L = DefaultLift> {
    process_results: P,
    lift_with: L,
    target: PhantomData<fn() -> M>,
}

impl<M> Wrap<M> {
    /// Creates a factory that lifts with `Into<M>` and no post-processing.
    #[inline]
    pub const fn new() -> Self {
        Self {
            process_results: Unprocessed,
            lift_with: DefaultLift,
            target: PhantomData,
        }
    }
}

impl<M> Default for Wrap<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, L> Wrap<M, Unprocessed, L> {
    /// Post-processes every raw result before it is lifted.
    pub fn process_results<G>(self, process_results: G) -> Wrap<M, ProcessWith<G>, L> {
        Wrap {
            process_results: ProcessWith(process_results),
            lift_with: self.lift_with,
            target: PhantomData,
        }
    }
}

impl<M, P> Wrap<M, P, DefaultLift> {
    /// Replaces the default `Into<M>` injection.
    pub fn lift_with<L>(self, lift_with: L) -> Wrap<M, P, LiftWith<L>> {
        Wrap {
            process_results: self.process_results,
            lift_with: LiftWith(lift_with),
            target: PhantomData,
        }
    }
}

impl<M, P, L> Wrap<M, P, L> {
    /// Lifts `function`, recording its name.
    pub fn decorate<F>(self, function: F) -> Wrapped<M, F, P, L> {
        Wrapped {
            name: type_name::<F>(),
            function,
            process_results: self.process_results,
            lift_with: self.lift_with,
            target: PhantomData,
        }
    }
}

/// A function lifted into the context `M`.
pub struct Wrapped<M, F, P = Unprocessed, L = DefaultLift> {
    name: &'static str,
    function: F,
    process_results: P,
    lift_with: L,
    target: PhantomData<fn() -> M>,
}

impl<M, F, P, L> Wrapped<M, F, P, L> {
    /// The name of the original function.
    ///
    /// For closures this is the name of the enclosing item followed by
    /// `{{closure}}`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Calls the original function and lifts its result.
    pub fn call<A, R, O>(&self, arguments: A) -> M
    where
        F: Fn(A) -> R,
        P: ProcessResults<R, O>,
        L: LiftResult<O, M>,
    {
        tracing::trace!(function = self.name, "calling wrapped function");
        let raw = (self.function)(arguments);
        self.lift_with.lift(self.process_results.process(raw))
    }

    /// Converts into a plain closure.
    pub fn into_fn<A, R, O>(self) -> impl Fn(A) -> M
    where
        F: Fn(A) -> R,
        P: ProcessResults<R, O>,
        L: LiftResult<O, M>,
    {
        move |arguments| self.call(arguments)
    }
}

impl<M, F: Clone, P: Clone, L: Clone> Clone for Wrapped<M, F, P, L> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            function: self.function.clone(),
            process_results: self.process_results.clone(),
            lift_with: self.lift_with.clone(),
            target: PhantomData,
        }
    }
}

impl<M, F, P, L> fmt::Debug for Wrapped<M, F, P, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Wrapped")
            .field("name", &self.name)
            .field("target", &type_name::<M>())
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "control", feature = "effect"))]
mod tests {
    use super::*;
    use crate::control::Maybe;
    use crate::effect::{ContextMonad, DictState};
    use crate::typeclass::{Monad, Sum};
    use rstest::rstest;

    fn double(value: i32) -> i32 {
        value * 2
    }

    fn add((left, right): (i32, i32)) -> i32 {
        left + right
    }

    #[rstest]
    fn default_lift_injects_raw_result() {
        let lifted = Wrap::<Maybe<i32>>::new().decorate(double);
        assert_eq!(lifted.call(21), Maybe::just(42));
    }

    #[rstest]
    fn already_wrapped_result_is_not_wrapped_twice() {
        let lifted = Wrap::<Maybe<i32>>::new()
            .decorate(|value: i32| if value > 0 { Maybe::just(value) } else { Maybe::nothing() });
        assert_eq!(lifted.call(1), Maybe::just(1));
        assert!(lifted.call(0).is_nothing());
    }

    #[rstest]
    fn process_results_runs_before_lifting() {
        let lifted = Wrap::<Maybe<String>>::new()
            .process_results(|value: i32| format!("#{value}"))
            .decorate(double);
        assert_eq!(lifted.call(4), Maybe::just("#8".to_string()));
    }

    #[rstest]
    fn lift_with_replaces_injection() {
        let lifted = Wrap::<ContextMonad<i32, DictState<i32>>>::new()
            .lift_with(|value: i32| ContextMonad::new(value, DictState::from_iter([("seen", value)])))
            .decorate(double);
        let result = lifted.call(5);
        assert_eq!(*result.value(), 10);
        assert_eq!(result.state().get("seen"), Some(&10));
    }

    #[rstest]
    fn process_and_lift_compose_in_order() {
        let lifted = Wrap::<ContextMonad<i32, Sum<i32>>>::new()
            .process_results(|value: i32| value + 1)
            .lift_with(|value: i32| ContextMonad::new(value, Sum::new(value)))
            .decorate(double);
        assert_eq!(lifted.call(3), ContextMonad::new(7, Sum::new(7)));
    }

    #[rstest]
    fn tuple_arguments_lift_multi_argument_functions() {
        let lifted = Wrap::<Maybe<i32>>::new().decorate(add);
        assert_eq!(lifted.call((2, 3)), Maybe::just(5));
    }

    #[rstest]
    fn name_preserves_original_function() {
        let lifted = Wrap::<Maybe<i32>>::new().decorate(double);
        assert!(lifted.name().ends_with("double"));
        assert!(format!("{lifted:?}").contains("double"));
    }

    #[rstest]
    fn wrapped_functions_compose_with_bind() {
        let lifted = Wrap::<Maybe<i32>>::new().decorate(double).into_fn::<i32, _, _>();
        let result = Maybe::just(1).bind(&lifted).bind(&lifted);
        assert_eq!(result, Maybe::just(4));
    }

    #[rstest]
    fn context_default_lift_uses_zero_state() {
        let lifted = Wrap::<ContextMonad<i32, Sum<i32>>>::new().decorate(double);
        assert_eq!(lifted.call(2), ContextMonad::new(4, Sum::new(0)));
    }
}

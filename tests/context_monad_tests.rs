//! Integration tests for the context monad and its dictionary state.

#![cfg(feature = "effect")]

use monadic::effect::{ContextMonad, DictState, DictStateMonad};
use monadic::typeclass::{Applicative, Flatten, Functor, Monad, Monoid};
use rstest::rstest;

fn record(key: &str, value: i32) -> DictStateMonad<(), i32> {
    ContextMonad::with_state(DictState::from_iter([(key, value)]))
}

fn step(total: i32, amount: i32) -> DictStateMonad<i32, i32> {
    record("last", amount).then(ContextMonad::from(total + amount))
}

#[rstest]
fn bind_chain_accumulates_dictionary() {
    let result = DictStateMonad::<i32, i32>::from(0)
        .bind(|total| step(total, 3))
        .bind(|total| step(total, 4))
        .bind(|total| record("done", 1).replace(total));

    assert_eq!(*result.value(), 7);
    assert_eq!(result.state().keys().collect::<Vec<_>>(), ["last", "done"]);
    assert_eq!(result.state().get("last"), Some(&4));
}

#[rstest]
fn unit_has_empty_state() {
    let context = <DictStateMonad<(), i32>>::unit("v");
    assert!(context.state().is_zero());
}

#[rstest]
fn nested_states_merge_outer_first() {
    let inner: DictStateMonad<&str, i32> =
        ContextMonad::new("value", DictState::from_iter([("shared", 2), ("inner", 0)]));
    let outer = ContextMonad::new(inner, DictState::from_iter([("shared", 1), ("outer", 0)]));

    let flat = outer.flatten();
    assert_eq!(*flat.value(), "value");
    assert_eq!(flat.state().get("shared"), Some(&2));
    assert_eq!(flat.state().keys().collect::<Vec<_>>(), ["shared", "outer", "inner"]);
}

#[rstest]
fn dict_state_addition_is_right_biased() {
    let left = DictState::from_iter([("a", 1), ("b", 2)]);
    let right = DictState::from_iter([("b", 3), ("c", 4)]);

    let merged = &left + &right;
    assert_eq!(merged, DictState::from_iter([("a", 1), ("b", 3), ("c", 4)]));
    assert_eq!(left.len(), 2);
    assert_eq!(left + right, merged);
}

#[rstest]
fn map2_runs_left_state_then_right() {
    let left: ContextMonad<i32, Vec<&str>> = ContextMonad::new(2, vec!["left"]);
    let right = ContextMonad::new(5, vec!["right"]);
    let product = left.product(right);
    assert_eq!(product, ContextMonad::new((2, 5), vec!["left", "right"]));
}

#[rstest]
fn display_matches_state_format() {
    let context = ContextMonad::new("x", DictState::from_iter([("k", 1)]));
    assert_eq!(context.to_string(), "State(value=\"x\", context={\"k\": 1})");
}

#[rstest]
fn into_parts_splits() {
    let (value, state) = step(1, 1).into_parts();
    assert_eq!(value, 2);
    assert_eq!(state.into_inner().into_iter().collect::<Vec<_>>(), [("last".to_string(), 1)]);
}

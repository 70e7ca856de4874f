//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot
//! abstract over `Maybe<_>` or `ContextMonad<_, S>` as type constructors
//! directly. `TypeConstructor` works around this with a GAT: every wrapped
//! type names the type it wraps (`Inner`) and how to re-apply the same
//! constructor to another type (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let nothing: Maybe<String> = rewrap(Maybe::just(42));
//! assert!(nothing.is_nothing());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The payload type this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result a valid
    /// type constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

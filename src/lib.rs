//! # monadic
//!
//! Composable context-carrying computations and a path-addressable
//! dictionary tree.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Flatten, Semigroup, Monoid
//! - **Maybe**: an optional-value monad whose `Nothing` absorbs every mapping
//! - **Context Monad**: a value paired with state accumulated through a Monoid
//! - **Function Lifting**: `Wrap` turns plain functions into monadic ones
//! - **Dictionary Tree**: ordered nested maps addressed with POSIX-style paths
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, Monoid, etc.)
//! - `control`: The `Maybe` monad
//! - `effect`: The context monad and its dictionary state
//! - `compose`: Function lifting with `Wrap`
//! - `tree`: `DictTree` and path resolution
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let halved: Maybe<i32> = Maybe::just(10).bind(|n| {
//!     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
//! });
//! assert_eq!(halved, Maybe::just(5));
//!
//! let tree: DictTree<i32> = DictTree::new();
//! tree.set_at_path("/a/b", TreeValue::Leaf(42), true).unwrap();
//! assert_eq!(tree.get_at_path("/a/b", false).unwrap(), Some(TreeValue::Leaf(42)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "tree")]
pub mod tree;

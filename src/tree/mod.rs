//! Path-addressable hierarchical dictionaries.
//!
//! A [`DictTree`] is a node in a tree of insertion-ordered string-keyed
//! mappings. Values are either leaves or child nodes, and every child node
//! knows its parent, so a tree can be navigated in both directions:
//!
//! - [`DictTree::parent`], [`DictTree::root`] and [`DictTree::up`] climb,
//! - [`DictTree::down`] and [`DictTree::children`] descend,
//! - [`DictTree::get_at_path`], [`DictTree::set_at_path`] and
//!   [`DictTree::update_path`] address values with POSIX-style paths.
//!
//! Paths starting with `/` are resolved from the root, everything else from
//! the node the call is made on. A `..` segment moves to the parent.
//!
//! # Examples
//!
//! ```rust
//! use monadic::tree::{DictTree, TreeError, TreeValue};
//!
//! let root: DictTree<String> = DictTree::new();
//! root.set_at_path("/users/alice/email", TreeValue::Leaf("a@example.com".into()), true)?;
//!
//! let alice = root.down(["users", "alice"]).and_then(TreeValue::into_node);
//! let alice = alice.ok_or(TreeError::InvalidPath {
//!     path: "/users/alice".into(),
//!     reason: "expected a node",
//! })?;
//!
//! assert_eq!(
//!     alice.get_at_path("../../users/alice/email", false)?,
//!     Some(TreeValue::Leaf("a@example.com".to_string()))
//! );
//! assert!(alice.up(-1).ptr_eq(&root));
//! # Ok::<(), TreeError>(())
//! ```

mod error;
mod node;
mod path;
mod walk;

pub use error::{TreeError, TreeResult};
pub use node::{Children, DictTree, TreeValue};
pub use path::{PARENT_SEGMENT, TreePath};
pub use walk::{LeafFactory, PathWalk, Updater, WalkMode};

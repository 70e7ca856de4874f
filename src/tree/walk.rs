//! Path resolution over a [`DictTree`].
//!
//! [`PathWalk`] is the single resolver behind every path-based operation.
//! It yields the start node and then the value reached after each path
//! segment, so callers can stop early, inspect intermediate nodes, or just
//! take the last item.

use std::fmt;
use std::iter::FusedIterator;

use super::error::{TreeError, TreeResult};
use super::node::{DictTree, TreeValue};
use super::path::{PARENT_SEGMENT, TreePath};

/// Produces the value created for a missing final segment.
pub type LeafFactory<'a, V> = Box<dyn FnOnce() -> TreeValue<V> + 'a>;

/// How a walk treats missing keys.
///
/// # Examples
///
/// ```rust
/// use monadic::tree::{DictTree, TreeValue, WalkMode};
///
/// let root: DictTree<u8> = DictTree::new();
/// let visited = root
///     .walk_path("/a/b", WalkMode::create_with(|| TreeValue::Leaf(0)))
///     .count();
///
/// assert_eq!(visited, 3);
/// assert_eq!(root.get_at_path("/a/b", false), Ok(Some(TreeValue::Leaf(0))));
/// ```
pub struct WalkMode<'a, V> {
    ensure_exists: bool,
    leaf_factory: Option<LeafFactory<'a, V>>,
}

impl<'a, V> WalkMode<'a, V> {
    /// Fails on the first missing key.
    pub const fn lookup() -> Self {
        Self {
            ensure_exists: false,
            leaf_factory: None,
        }
    }

    /// Creates missing keys as empty child nodes.
    pub const fn create() -> Self {
        Self {
            ensure_exists: true,
            leaf_factory: None,
        }
    }

    /// Creates missing intermediate keys as nodes and a missing final key
    /// with `factory`.
    pub fn create_with(factory: impl FnOnce() -> TreeValue<V> + 'a) -> Self {
        Self {
            ensure_exists: true,
            leaf_factory: Some(Box::new(factory)),
        }
    }

    /// Picks [`WalkMode::create`] or [`WalkMode::lookup`].
    pub const fn ensure(ensure_exists: bool) -> Self {
        if ensure_exists {
            Self::create()
        } else {
            Self::lookup()
        }
    }

    /// Returns `true` if missing keys are created.
    pub const fn ensures_exists(&self) -> bool {
        self.ensure_exists
    }
}

impl<V> fmt::Debug for WalkMode<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WalkMode")
            .field("ensure_exists", &self.ensure_exists)
            .field("leaf_factory", &self.leaf_factory.is_some())
            .finish()
    }
}

/// Lazy, step-by-step resolution of a [`TreePath`].
///
/// Created by [`DictTree::walk_path`]. The first item is the start node
/// (the root for absolute paths). Every following item is the value reached
/// after one more segment: `Ok(None)` when a `..` climbs above the root or
/// a lookup misses, and `Err` when the walk cannot go on. The iterator is
/// fused after an error.
pub struct PathWalk<'a, V> {
    path: TreePath,
    index: usize,
    current: Option<TreeValue<V>>,
    started: bool,
    finished: bool,
    mode: WalkMode<'a, V>,
}

impl<V: Clone> PathWalk<'_, V> {
    fn step(&mut self, segment: &str) -> TreeResult<Option<TreeValue<V>>> {
        let is_last = self.index + 1 == self.path.segments().len();
        match self.current.take() {
            None => Err(TreeError::MissingChild {
                path: self.path.prefix(self.index).to_string(),
                key: segment.to_string(),
            }),
            Some(TreeValue::Leaf(_)) => Err(TreeError::PathThroughLeaf {
                path: self.path.prefix(self.index).to_string(),
            }),
            Some(TreeValue::Node(node)) if segment == PARENT_SEGMENT => {
                Ok(node.parent().map(TreeValue::Node))
            }
            Some(TreeValue::Node(node)) => match node.get(segment) {
                Some(value) => Ok(Some(value)),
                None if self.mode.ensure_exists => Ok(Some(self.create(&node, segment, is_last))),
                None => Ok(None),
            },
        }
    }

    fn create(&mut self, node: &DictTree<V>, segment: &str, is_last: bool) -> TreeValue<V> {
        tracing::debug!(
            path = %self.path.prefix(self.index),
            key = segment,
            "creating missing tree entry"
        );
        let factory = if is_last {
            self.mode.leaf_factory.take()
        } else {
            None
        };
        match factory {
            Some(factory) => node.insert_at(factory(), segment),
            None => TreeValue::Node(node.attach(segment)),
        }
    }
}

impl<V: Clone> Iterator for PathWalk<'_, V> {
    type Item = TreeResult<Option<TreeValue<V>>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok(self.current.clone()));
        }
        let Some(segment) = self.path.segments().get(self.index).cloned() else {
            self.finished = true;
            return None;
        };
        let result = self.step(&segment);
        self.index += 1;
        match result {
            Ok(value) => {
                self.current.clone_from(&value);
                Some(Ok(value))
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<V: Clone> FusedIterator for PathWalk<'_, V> {}

impl<V> fmt::Debug for PathWalk<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PathWalk")
            .field("path", &self.path.to_string())
            .field("index", &self.index)
            .field("finished", &self.finished)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// The new content for [`DictTree::update_path`].
pub enum Updater<'a, V> {
    /// Store this value.
    Value(TreeValue<V>),
    /// Compute the value from the one currently at the path.
    ///
    /// Returning `None` stores nothing, which suits closures that change a
    /// node in place through its handle.
    Apply(Box<dyn FnOnce(TreeValue<V>) -> Option<TreeValue<V>> + 'a>),
}

impl<'a, V> Updater<'a, V> {
    /// Stores `value` unconditionally.
    pub const fn value(value: TreeValue<V>) -> Self {
        Self::Value(value)
    }

    /// Derives the stored value from the current one.
    pub fn apply(function: impl FnOnce(TreeValue<V>) -> Option<TreeValue<V>> + 'a) -> Self {
        Self::Apply(Box::new(function))
    }
}

impl<V: fmt::Debug> fmt::Debug for Updater<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Apply(_) => formatter.write_str("Apply(..)"),
        }
    }
}

impl<V: Clone> DictTree<V> {
    /// Walks `path` lazily from this node, or from the root for absolute paths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::tree::{DictTree, TreeValue, WalkMode};
    ///
    /// let root: DictTree<i32> = DictTree::new();
    /// root.attach("a").insert("b", TreeValue::Leaf(1));
    ///
    /// let steps: Vec<_> = root.walk_path("a/b", WalkMode::lookup()).collect();
    /// assert_eq!(steps.len(), 3);
    /// assert_eq!(steps[2], Ok(Some(TreeValue::Leaf(1))));
    /// ```
    pub fn walk_path<'a>(&self, path: impl Into<TreePath>, mode: WalkMode<'a, V>) -> PathWalk<'a, V> {
        let path = path.into();
        let start = if path.is_absolute() {
            self.root()
        } else {
            self.clone()
        };
        PathWalk {
            path,
            index: 0,
            current: Some(TreeValue::Node(start)),
            started: false,
            finished: false,
            mode,
        }
    }

    /// Resolves `path` to the value it names.
    ///
    /// Returns `Ok(None)` if a lookup misses on the final segment, or if a
    /// trailing `..` climbs above the root. With `ensure_exists`, missing
    /// keys are created as empty nodes.
    ///
    /// # Errors
    ///
    /// - [`TreeError::MissingChild`] when an intermediate key is missing
    ///   and `ensure_exists` is `false`.
    /// - [`TreeError::PathThroughLeaf`] when a leaf is reached with
    ///   segments left.
    pub fn get_at_path(&self, path: impl Into<TreePath>, ensure_exists: bool) -> TreeResult<Option<TreeValue<V>>> {
        self.resolve(path.into(), WalkMode::ensure(ensure_exists))
    }

    /// Resolves `path`, creating missing intermediate nodes and a missing
    /// final entry with `leaf_factory`.
    ///
    /// # Errors
    ///
    /// [`TreeError::PathThroughLeaf`] when a leaf is reached with segments
    /// left, and [`TreeError::MissingChild`] when a `..` above the root is
    /// followed by more segments.
    pub fn get_or_create_at_path(
        &self,
        path: impl Into<TreePath>,
        leaf_factory: impl FnOnce() -> TreeValue<V>,
    ) -> TreeResult<Option<TreeValue<V>>> {
        self.resolve(path.into(), WalkMode::create_with(leaf_factory))
    }

    fn resolve(&self, path: TreePath, mode: WalkMode<'_, V>) -> TreeResult<Option<TreeValue<V>>> {
        let mut last = None;
        for step in self.walk_path(path, mode) {
            last = step?;
        }
        Ok(last)
    }

    /// Stores `value` at `path`.
    ///
    /// The parent path is resolved first. With `ensure_parents_exist`,
    /// missing ancestors are created as empty nodes. Assigning a node
    /// re-parents it.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidPath`] when the path has no final key (the
    ///   root, `.`) or ends with `..`.
    /// - [`TreeError::MissingChild`] when an ancestor is missing.
    /// - [`TreeError::PathThroughLeaf`] when an ancestor is a leaf.
    pub fn set_at_path(
        &self,
        path: impl Into<TreePath>,
        value: TreeValue<V>,
        ensure_parents_exist: bool,
    ) -> TreeResult<()> {
        let path = path.into();
        let key = match path.name() {
            None => {
                return Err(TreeError::InvalidPath {
                    path: path.to_string(),
                    reason: "no final key to assign",
                });
            }
            Some(PARENT_SEGMENT) => {
                return Err(TreeError::InvalidPath {
                    path: path.to_string(),
                    reason: "cannot assign through `..`",
                });
            }
            Some(key) => key.to_string(),
        };
        let parent_path = path.parent();
        match self.resolve(parent_path.clone(), WalkMode::ensure(ensure_parents_exist))? {
            Some(TreeValue::Node(parent)) => {
                parent.insert(key, value);
                Ok(())
            }
            Some(TreeValue::Leaf(_)) => Err(TreeError::PathThroughLeaf {
                path: parent_path.to_string(),
            }),
            None => Err(TreeError::MissingChild {
                path: parent_path.parent().to_string(),
                key: parent_path.name().unwrap_or(PARENT_SEGMENT).to_string(),
            }),
        }
    }

    /// Replaces the value at `path`, creating it first if needed.
    ///
    /// The current value is resolved in creating mode, with `leaf_factory`
    /// producing a missing final entry (an empty node when `None`). An
    /// [`Updater::Value`] is stored as is. An [`Updater::Apply`] receives the
    /// current value and its result is stored unless it is `None`. Returns
    /// the stored value.
    ///
    /// # Errors
    ///
    /// Anything [`DictTree::get_or_create_at_path`] or
    /// [`DictTree::set_at_path`] returns, and [`TreeError::InvalidPath`]
    /// when the path resolves above the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::tree::{DictTree, TreeValue, Updater};
    ///
    /// let root: DictTree<u32> = DictTree::new();
    /// let increment = || {
    ///     Updater::apply(|current: TreeValue<u32>| {
    ///         Some(TreeValue::Leaf(current.into_leaf().unwrap_or(0) + 1))
    ///     })
    /// };
    ///
    /// root.update_path("/counters/hits", increment(), Some(Box::new(|| TreeValue::Leaf(0))))?;
    /// root.update_path("/counters/hits", increment(), None)?;
    ///
    /// assert_eq!(root.get_at_path("/counters/hits", false)?, Some(TreeValue::Leaf(2)));
    /// # Ok::<(), monadic::tree::TreeError>(())
    /// ```
    pub fn update_path<'a>(
        &self,
        path: impl Into<TreePath>,
        updater: Updater<'a, V>,
        leaf_factory: Option<LeafFactory<'a, V>>,
    ) -> TreeResult<Option<TreeValue<V>>> {
        let path = path.into();
        let mode = match leaf_factory {
            Some(factory) => WalkMode::create_with(factory),
            None => WalkMode::create(),
        };
        let Some(current) = self.resolve(path.clone(), mode)? else {
            return Err(TreeError::InvalidPath {
                path: path.to_string(),
                reason: "resolves above the root",
            });
        };
        let updated = match updater {
            Updater::Value(value) => Some(value),
            Updater::Apply(function) => function(current),
        };
        if let Some(value) = &updated {
            self.set_at_path(path, value.clone(), false)?;
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn leaf(value: i32) -> TreeValue<i32> {
        TreeValue::Leaf(value)
    }

    /// `/a/b = 1`, `/a/c = {}`, `/d = 2`
    #[fixture]
    fn tree() -> DictTree<i32> {
        let root = DictTree::new();
        let a = root.attach("a");
        a.insert("b", leaf(1));
        a.attach("c");
        root.insert("d", leaf(2));
        root
    }

    #[rstest]
    fn set_then_get_with_creation() {
        let root: DictTree<i32> = DictTree::new();
        root.set_at_path("/a/b", leaf(42), true).unwrap();
        assert_eq!(root.get_at_path("/a/b", false), Ok(Some(leaf(42))));
        assert!(root.get("a").is_some_and(|value| value.is_node()));
    }

    #[rstest]
    fn get_missing_intermediate_reports_prefix_and_key() {
        let root: DictTree<i32> = DictTree::new();
        let error = root.get_at_path("/missing/x", false).unwrap_err();
        assert_eq!(
            error,
            TreeError::MissingChild {
                path: "/missing".to_string(),
                key: "x".to_string(),
            }
        );
        assert!(error.to_string().contains("missing"));
    }

    #[rstest]
    fn get_missing_final_key_is_none(tree: DictTree<i32>) {
        assert_eq!(tree.get_at_path("/a/zzz", false), Ok(None));
    }

    #[rstest]
    fn get_with_ensure_creates_nodes(tree: DictTree<i32>) {
        let created = tree.get_at_path("/a/new/deeper", true).unwrap();
        assert!(created.is_some_and(|value| value.is_node()));
        assert!(tree.down(["a", "new", "deeper"]).is_some());
    }

    #[rstest]
    fn get_through_leaf_fails(tree: DictTree<i32>) {
        assert_eq!(
            tree.get_at_path("/a/b/c", false),
            Err(TreeError::PathThroughLeaf {
                path: "/a/b".to_string()
            })
        );
    }

    #[rstest]
    fn parent_segment_moves_up(tree: DictTree<i32>) {
        assert_eq!(tree.get_at_path("/a/../d", false), Ok(Some(leaf(2))));
        assert_eq!(tree.get_at_path("/a/c/../b", false), Ok(Some(leaf(1))));
    }

    #[rstest]
    fn parent_segment_above_root_is_none(tree: DictTree<i32>) {
        assert_eq!(tree.get_at_path("/..", false), Ok(None));
        assert!(matches!(
            tree.get_at_path("/../a", true),
            Err(TreeError::MissingChild { .. })
        ));
    }

    #[rstest]
    fn relative_paths_start_at_self(tree: DictTree<i32>) {
        let a = tree.get("a").and_then(TreeValue::into_node).unwrap();
        assert_eq!(a.get_at_path("b", false), Ok(Some(leaf(1))));
        assert_eq!(a.get_at_path("/d", false), Ok(Some(leaf(2))));
        assert_eq!(a.get_at_path("../d", false), Ok(Some(leaf(2))));
    }

    #[rstest]
    fn empty_path_is_start_node(tree: DictTree<i32>) {
        let resolved = tree.get_at_path("", false).unwrap();
        assert!(resolved.and_then(TreeValue::into_node).is_some_and(|node| node.ptr_eq(&tree)));
        let root = tree.get_at_path("/", false).unwrap();
        assert!(root.and_then(TreeValue::into_node).is_some_and(|node| node.ptr_eq(&tree)));
    }

    #[rstest]
    fn walk_yields_start_then_each_step(tree: DictTree<i32>) {
        let steps: Vec<_> = tree.walk_path("/a/b", WalkMode::lookup()).collect();
        assert_eq!(steps.len(), 3);
        assert!(matches!(&steps[0], Ok(Some(TreeValue::Node(node))) if node.ptr_eq(&tree)));
        assert!(matches!(&steps[1], Ok(Some(TreeValue::Node(_)))));
        assert_eq!(steps[2], Ok(Some(leaf(1))));
    }

    #[rstest]
    fn walk_is_lazy(tree: DictTree<i32>) {
        let mut walk = tree.walk_path("/x/y/z", WalkMode::create());
        walk.next();
        walk.next();
        assert!(tree.contains_key("x"));
        assert!(tree.down(["x", "y"]).is_none());
    }

    #[rstest]
    fn walk_stops_after_error(tree: DictTree<i32>) {
        let mut walk = tree.walk_path("/nope/deeper/still", WalkMode::lookup());
        assert!(matches!(walk.next(), Some(Ok(Some(_)))));
        assert_eq!(walk.next(), Some(Ok(None)));
        assert!(matches!(walk.next(), Some(Err(TreeError::MissingChild { .. }))));
        assert_eq!(walk.next(), None);
    }

    #[rstest]
    fn leaf_factory_only_applies_to_final_segment(tree: DictTree<i32>) {
        let value = tree.get_or_create_at_path("/p/q", || leaf(9)).unwrap();
        assert_eq!(value, Some(leaf(9)));
        assert!(tree.get("p").is_some_and(|value| value.is_node()));
    }

    #[rstest]
    fn leaf_factory_is_not_called_for_existing_entries(tree: DictTree<i32>) {
        let value = tree
            .get_or_create_at_path("/a/b", || panic!("entry already exists"))
            .unwrap();
        assert_eq!(value, Some(leaf(1)));
    }

    #[rstest]
    fn set_without_creation_needs_parents(tree: DictTree<i32>) {
        assert_eq!(
            tree.set_at_path("/nope/k", leaf(0), false),
            Err(TreeError::MissingChild {
                path: "/".to_string(),
                key: "nope".to_string(),
            })
        );
        assert!(!tree.contains_key("nope"));
    }

    #[rstest]
    fn set_into_leaf_fails(tree: DictTree<i32>) {
        assert_eq!(
            tree.set_at_path("/d/k", leaf(0), true),
            Err(TreeError::PathThroughLeaf {
                path: "/d".to_string()
            })
        );
    }

    #[rstest]
    #[case("/")]
    #[case(".")]
    #[case("/a/..")]
    fn set_rejects_paths_without_key(tree: DictTree<i32>, #[case] path: &str) {
        assert!(matches!(
            tree.set_at_path(path, leaf(0), true),
            Err(TreeError::InvalidPath { .. })
        ));
    }

    #[rstest]
    fn set_node_reparents_it(tree: DictTree<i32>) {
        let node = DictTree::from_entries([("z", leaf(5))]);
        tree.set_at_path("/a/c/n", TreeValue::Node(node.clone()), false).unwrap();
        let c = tree.down(["a", "c"]).and_then(TreeValue::into_node).unwrap();
        assert!(node.parent().is_some_and(|parent| parent.ptr_eq(&c)));
        assert_eq!(tree.get_at_path("/a/c/n/z", false), Ok(Some(leaf(5))));
    }

    #[rstest]
    fn update_with_value_overwrites(tree: DictTree<i32>) {
        let stored = tree.update_path("/a/b", Updater::value(leaf(10)), None).unwrap();
        assert_eq!(stored, Some(leaf(10)));
        assert_eq!(tree.get_at_path("/a/b", false), Ok(Some(leaf(10))));
    }

    #[rstest]
    fn update_with_function_reads_current(tree: DictTree<i32>) {
        let doubled = Updater::apply(|current: TreeValue<i32>| {
            current.into_leaf().map(|value| TreeValue::Leaf(value * 2))
        });
        tree.update_path("/d", doubled, None).unwrap();
        assert_eq!(tree.get_at_path("/d", false), Ok(Some(leaf(4))));
    }

    #[rstest]
    fn update_function_returning_none_stores_nothing(tree: DictTree<i32>) {
        let result = tree
            .update_path("/d", Updater::apply(|_| None), None)
            .unwrap();
        assert_eq!(result, None);
        assert_eq!(tree.get_at_path("/d", false), Ok(Some(leaf(2))));
    }

    #[rstest]
    fn update_function_can_mutate_node_in_place(tree: DictTree<i32>) {
        let add_entry = Updater::apply(|current: TreeValue<i32>| {
            if let TreeValue::Node(node) = current {
                node.insert("added", leaf(3));
            }
            None
        });

        assert_eq!(tree.update_path("/a/c", add_entry, None), Ok(None));
        assert_eq!(tree.get_at_path("/a/c/added", false), Ok(Some(leaf(3))));
        assert!(tree.down(["a", "c"]).is_some_and(|value| value.is_node()));
    }

    #[rstest]
    fn update_creates_missing_entry_with_factory() {
        let root: DictTree<i32> = DictTree::new();
        let increment = Updater::apply(|current: TreeValue<i32>| {
            current.into_leaf().map(|value| TreeValue::Leaf(value + 1))
        });
        root.update_path("/x/count", increment, Some(Box::new(|| leaf(0))))
            .unwrap();
        assert_eq!(root.get_at_path("/x/count", false), Ok(Some(leaf(1))));
    }

    #[rstest]
    fn update_above_root_is_invalid(tree: DictTree<i32>) {
        assert!(matches!(
            tree.update_path("/..", Updater::value(leaf(0)), None),
            Err(TreeError::InvalidPath { .. })
        ));
    }

    #[rstest]
    fn walk_mode_debug_hides_factory() {
        let mode: WalkMode<'_, i32> = WalkMode::create_with(|| TreeValue::Leaf(1));
        assert!(mode.ensures_exists());
        assert_eq!(
            format!("{mode:?}"),
            "WalkMode { ensure_exists: true, leaf_factory: true }"
        );
    }
}

//! The tree node handle and its navigation operations.

use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

type NodeRef<V> = Rc<RefCell<Node<V>>>;
type ParentRef<V> = Weak<RefCell<Node<V>>>;

struct Node<V> {
    entries: IndexMap<String, TreeValue<V>>,
    parent: ParentRef<V>,
}

impl<V> Node<V> {
    fn detached(entries: IndexMap<String, TreeValue<V>>) -> Self {
        Self {
            entries,
            parent: Weak::new(),
        }
    }
}

/// A value stored under a key in a [`DictTree`].
///
/// Node-valued entries make up the tree structure. Everything else is a leaf.
#[derive(Clone, PartialEq)]
pub enum TreeValue<V> {
    /// A terminal value.
    Leaf(V),
    /// A child node.
    Node(DictTree<V>),
}

impl<V> TreeValue<V> {
    /// Returns `true` for [`TreeValue::Leaf`].
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` for [`TreeValue::Node`].
    #[inline]
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Borrows the leaf value.
    #[inline]
    pub const fn as_leaf(&self) -> Option<&V> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    /// Borrows the child node.
    #[inline]
    pub const fn as_node(&self) -> Option<&DictTree<V>> {
        match self {
            Self::Node(node) => Some(node),
            Self::Leaf(_) => None,
        }
    }

    /// Takes the leaf value.
    #[inline]
    pub fn into_leaf(self) -> Option<V> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    /// Takes the child node.
    #[inline]
    pub fn into_node(self) -> Option<DictTree<V>> {
        match self {
            Self::Node(node) => Some(node),
            Self::Leaf(_) => None,
        }
    }
}

impl<V> From<DictTree<V>> for TreeValue<V> {
    #[inline]
    fn from(node: DictTree<V>) -> Self {
        Self::Node(node)
    }
}

impl<V: fmt::Debug> fmt::Debug for TreeValue<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        DebugValue {
            value: self,
            ancestors: &Ancestors::new(),
        }
        .fmt(formatter)
    }
}

/// A shared handle to a node of a path-addressable tree.
///
/// A node is an insertion-ordered mapping from string keys to
/// [`TreeValue`]s. Assigning a child node into a node makes that node the
/// child's parent; the back-reference is weak, so dropping the last handle
/// to a subtree releases it even while a child still points up.
///
/// Cloning a `DictTree` clones the *handle*. Both clones see the same node.
/// Equality compares contents, not identity; use [`DictTree::ptr_eq`] for
/// identity.
///
/// Handles are single-threaded: `DictTree` is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use monadic::tree::{DictTree, TreeValue};
///
/// let root: DictTree<&str> = DictTree::new();
/// let config = root.attach("config");
/// config.insert("name", TreeValue::Leaf("demo"));
///
/// assert!(config.parent().is_some_and(|parent| parent.ptr_eq(&root)));
/// assert_eq!(
///     root.down(["config", "name"]),
///     Some(TreeValue::Leaf("demo"))
/// );
/// ```
pub struct DictTree<V> {
    node: NodeRef<V>,
}

static_assertions::assert_not_impl_any!(DictTree<i32>: Send, Sync);

impl<V> DictTree<V> {
    /// Creates an empty root node.
    pub fn new() -> Self {
        Self::from_node(Node::detached(IndexMap::new()))
    }

    /// Creates a root node holding `entries`.
    ///
    /// Node-valued entries get the new node as their parent.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TreeValue<V>)>,
    {
        let tree = Self::new();
        for (key, value) in entries {
            tree.insert(key, value);
        }
        tree
    }

    fn from_node(node: Node<V>) -> Self {
        Self {
            node: Rc::new(RefCell::new(node)),
        }
    }

    fn downgrade(&self) -> ParentRef<V> {
        Rc::downgrade(&self.node)
    }

    /// Returns `true` if both handles refer to the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// The node's parent, if it has one that is still alive.
    pub fn parent(&self) -> Option<Self> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| Self { node })
    }

    /// Returns `true` if the node has no parent.
    ///
    /// A node whose parent is itself also counts as a root.
    pub fn is_root(&self) -> bool {
        self.parent().is_none_or(|parent| parent.ptr_eq(self))
    }

    /// Follows parent links until reaching a root.
    pub fn root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            if parent.ptr_eq(&current) {
                break;
            }
            current = parent;
        }
        current
    }

    /// Follows `levels` parent links.
    ///
    /// Stops early at a root. A negative count goes all the way to the root.
    pub fn up(&self, levels: isize) -> Self {
        let Ok(levels) = usize::try_from(levels) else {
            return self.root();
        };
        let mut current = self.clone();
        for _ in 0..levels {
            match current.parent() {
                Some(parent) if !parent.ptr_eq(&current) => current = parent,
                _ => break,
            }
        }
        current
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.node.borrow().entries.len()
    }

    /// Returns `true` if the node has no entries.
    pub fn is_empty(&self) -> bool {
        self.node.borrow().entries.is_empty()
    }

    /// Returns `true` if `key` is a direct entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.node.borrow().entries.contains_key(key)
    }

    /// The direct keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.node.borrow().entries.keys().cloned().collect()
    }

    /// Assigns `value` under `key`, returning the previous value.
    ///
    /// A node-valued `value` is re-parented to this node. The node it came
    /// from keeps its own entry for it.
    pub fn insert(&self, key: impl Into<String>, value: TreeValue<V>) -> Option<TreeValue<V>> {
        let key = key.into();
        if let TreeValue::Node(child) = &value {
            self.adopt(&key, child);
        }
        self.node.borrow_mut().entries.insert(key, value)
    }

    fn adopt(&self, key: &str, child: &Self) {
        if let Some(previous) = child.parent() {
            if !previous.ptr_eq(self) && !previous.ptr_eq(child) && previous.holds(child) {
                tracing::warn!(
                    key,
                    "re-parenting a node that is still registered under its previous parent"
                );
            }
        }
        tracing::trace!(key, "setting parent of child node");
        child.node.borrow_mut().parent = self.downgrade();
    }

    fn holds(&self, child: &Self) -> bool {
        self.node
            .borrow()
            .entries
            .values()
            .any(|value| value.as_node().is_some_and(|node| node.ptr_eq(child)))
    }

    /// Removes the entry under `key`, preserving the order of the others.
    ///
    /// A removed child node whose parent is this node becomes a root.
    pub fn remove(&self, key: &str) -> Option<TreeValue<V>> {
        let removed = self.node.borrow_mut().entries.shift_remove(key);
        if let Some(TreeValue::Node(child)) = &removed {
            let is_own_child = child.parent().is_some_and(|parent| parent.ptr_eq(self));
            if is_own_child && !child.ptr_eq(self) {
                child.node.borrow_mut().parent = Weak::new();
            }
        }
        removed
    }

    /// Creates an empty child node under `key`.
    ///
    /// Replaces any existing entry under `key`.
    pub fn attach(&self, key: impl Into<String>) -> Self {
        self.attach_with(key, std::iter::empty::<(String, TreeValue<V>)>())
    }

    /// Creates a child node holding `entries` under `key`.
    pub fn attach_with<K, I>(&self, key: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TreeValue<V>)>,
    {
        let child = Self::from_entries(entries);
        self.insert(key, TreeValue::Node(child.clone()));
        child
    }

    /// Iterates over the child nodes in insertion order.
    ///
    /// Leaves are skipped. Each call starts a fresh iteration.
    pub fn children(&self) -> Children<V> {
        Children {
            tree: self.clone(),
            index: 0,
        }
    }
}

impl<V: Clone> DictTree<V> {
    /// Inserts `value` under `key` and returns `value`.
    pub fn insert_at(&self, value: TreeValue<V>, key: impl Into<String>) -> TreeValue<V> {
        self.insert(key, value.clone());
        value
    }

    /// Returns a clone of the entry under `key`.
    ///
    /// Node entries are cloned as handles.
    pub fn get(&self, key: &str) -> Option<TreeValue<V>> {
        self.node.borrow().entries.get(key).cloned()
    }

    /// Descends through `keys` one level at a time.
    ///
    /// Returns this node for an empty key list and `None` as soon as a key
    /// is missing. Reaching a leaf ends the descent early and returns the
    /// leaf, even if keys remain.
    pub fn down<I>(&self, keys: I) -> Option<TreeValue<V>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut current = self.clone();
        for key in keys {
            match current.get(key.as_ref())? {
                TreeValue::Node(node) => current = node,
                leaf @ TreeValue::Leaf(_) => return Some(leaf),
            }
        }
        Some(TreeValue::Node(current))
    }
}

impl<V> Clone for DictTree<V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<V> Default for DictTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for DictTree<V> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within(other, &mut Vec::new())
    }
}

impl<V: PartialEq> DictTree<V> {
    /// Compares entries as maps. A pair of nodes already being compared
    /// further up the recursion counts as equal.
    fn eq_within(&self, other: &Self, pairs: &mut Vec<(Self, Self)>) -> bool {
        if self.ptr_eq(other)
            || pairs
                .iter()
                .any(|(left, right)| left.ptr_eq(self) && right.ptr_eq(other))
        {
            return true;
        }
        let left = self.node.borrow();
        let right = other.node.borrow();
        if left.entries.len() != right.entries.len() {
            return false;
        }
        pairs.push((self.clone(), other.clone()));
        let equal = left.entries.iter().all(|(key, mine)| {
            right.entries.get(key).is_some_and(|theirs| match (mine, theirs) {
                (TreeValue::Leaf(mine), TreeValue::Leaf(theirs)) => mine == theirs,
                (TreeValue::Node(mine), TreeValue::Node(theirs)) => mine.eq_within(theirs, pairs),
                _ => false,
            })
        });
        pairs.pop();
        equal
    }
}

/// Formats the entries only. Parent links are not followed, and a node
/// that contains itself further down is shown as `{...}`.
impl<V: fmt::Debug> fmt::Debug for DictTree<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        DebugTree {
            tree: self,
            ancestors: &Ancestors::new(),
        }
        .fmt(formatter)
    }
}

/// The nodes on the current path of a recursive traversal.
struct Ancestors<V> {
    stack: RefCell<Vec<DictTree<V>>>,
}

impl<V> Ancestors<V> {
    const fn new() -> Self {
        Self {
            stack: RefCell::new(Vec::new()),
        }
    }

    fn contains(&self, tree: &DictTree<V>) -> bool {
        self.stack.borrow().iter().any(|node| node.ptr_eq(tree))
    }

    fn enter(&self, tree: &DictTree<V>) -> AncestorGuard<'_, V> {
        self.stack.borrow_mut().push(tree.clone());
        AncestorGuard { ancestors: self }
    }
}

/// Pops the entered node when dropped.
struct AncestorGuard<'a, V> {
    ancestors: &'a Ancestors<V>,
}

impl<V> Drop for AncestorGuard<'_, V> {
    fn drop(&mut self) {
        self.ancestors.stack.borrow_mut().pop();
    }
}

struct DebugTree<'a, V> {
    tree: &'a DictTree<V>,
    ancestors: &'a Ancestors<V>,
}

impl<V: fmt::Debug> fmt::Debug for DebugTree<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ancestors.contains(self.tree) {
            return formatter.write_str("{...}");
        }
        let _guard = self.ancestors.enter(self.tree);
        let node = self.tree.node.borrow();
        formatter
            .debug_map()
            .entries(node.entries.iter().map(|(key, value)| {
                (
                    key,
                    DebugValue {
                        value,
                        ancestors: self.ancestors,
                    },
                )
            }))
            .finish()
    }
}

struct DebugValue<'a, V> {
    value: &'a TreeValue<V>,
    ancestors: &'a Ancestors<V>,
}

impl<V: fmt::Debug> fmt::Debug for DebugValue<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TreeValue::Leaf(value) => formatter.debug_tuple("Leaf").field(value).finish(),
            TreeValue::Node(tree) => formatter
                .debug_tuple("Node")
                .field(&DebugTree {
                    tree,
                    ancestors: self.ancestors,
                })
                .finish(),
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, TreeValue<V>)> for DictTree<V> {
    fn from_iter<I: IntoIterator<Item = (K, TreeValue<V>)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Iterator over the child nodes of a [`DictTree`].
///
/// Created by [`DictTree::children`]. The iterator reads the node on every
/// step, so entries added behind the cursor while iterating are seen.
pub struct Children<V> {
    tree: DictTree<V>,
    index: usize,
}

impl<V> Iterator for Children<V> {
    type Item = (String, DictTree<V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = {
                let node = self.tree.node.borrow();
                node.entries
                    .get_index(self.index)
                    .map(|(key, value)| (key.clone(), value.as_node().cloned()))
            };
            self.index += 1;
            match entry? {
                (key, Some(child)) => return Some((key, child)),
                (_, None) => {}
            }
        }
    }
}

impl<V> FusedIterator for Children<V> {}

impl<V> fmt::Debug for Children<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Children")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::ser::{Error, Serialize, SerializeMap, Serializer};

    use super::{Ancestors, DictTree, TreeValue};

    impl<V: Serialize> Serialize for TreeValue<V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SerializeValue {
                value: self,
                ancestors: &Ancestors::new(),
            }
            .serialize(serializer)
        }
    }

    /// Serializes as a nested map. Parent links are not serialized.
    ///
    /// Fails if a node contains itself further down.
    impl<V: Serialize> Serialize for DictTree<V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SerializeTree {
                tree: self,
                ancestors: &Ancestors::new(),
            }
            .serialize(serializer)
        }
    }

    struct SerializeTree<'a, V> {
        tree: &'a DictTree<V>,
        ancestors: &'a Ancestors<V>,
    }

    impl<V: Serialize> Serialize for SerializeTree<'_, V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.ancestors.contains(self.tree) {
                return Err(S::Error::custom("tree node contains itself"));
            }
            let _guard = self.ancestors.enter(self.tree);
            let node = self.tree.node.borrow();
            let mut map = serializer.serialize_map(Some(node.entries.len()))?;
            for (key, value) in &node.entries {
                map.serialize_entry(
                    key,
                    &SerializeValue {
                        value,
                        ancestors: self.ancestors,
                    },
                )?;
            }
            map.end()
        }
    }

    struct SerializeValue<'a, V> {
        value: &'a TreeValue<V>,
        ancestors: &'a Ancestors<V>,
    }

    impl<V: Serialize> Serialize for SerializeValue<'_, V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.value {
                TreeValue::Leaf(value) => value.serialize(serializer),
                TreeValue::Node(tree) => SerializeTree {
                    tree,
                    ancestors: self.ancestors,
                }
                .serialize(serializer),
            }
        }
    }
}

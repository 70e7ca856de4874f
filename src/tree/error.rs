//! Error types for path resolution in a [`DictTree`](super::DictTree).

/// Errors raised while resolving or assigning through a tree path.
///
/// Every variant names the offending path prefix so the caller can tell
/// which step of the walk failed.
///
/// # Examples
///
/// ```rust
/// use monadic::tree::TreeError;
///
/// let error = TreeError::MissingChild {
///     path: "/missing".to_string(),
///     key: "x".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "child node at path /missing has no child with key x"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A key required by the walk does not exist and creation was not requested.
    #[error("child node at path {path} has no child with key {key}")]
    MissingChild {
        /// The prefix that was resolved before the missing key.
        path: String,
        /// The key that could not be found.
        key: String,
    },

    /// The walk reached a leaf while path segments remained.
    #[error("node at path {path} is a leaf")]
    PathThroughLeaf {
        /// The location of the leaf.
        path: String,
    },

    /// The path cannot name the slot the operation needs.
    #[error("path {path} is not usable here: {reason}")]
    InvalidPath {
        /// The rejected path.
        path: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Result alias for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

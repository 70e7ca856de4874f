//! POSIX-style tree paths.
//!
//! A path is a root flag plus an ordered list of segments. Parsing follows
//! POSIX path syntax:
//!
//! - a leading `/` makes the path absolute,
//! - `/` separates segments and repeated separators collapse,
//! - `.` segments are dropped,
//! - `..` is kept as a segment and means "go to the parent".
//!
//! The empty relative path is displayed as `.`.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// The segment that moves to the parent node.
pub const PARENT_SEGMENT: &str = "..";

/// A parsed tree path.
///
/// # Examples
///
/// ```rust
/// use monadic::tree::TreePath;
///
/// let path = TreePath::parse("/a//b/./c/");
/// assert!(path.is_absolute());
/// assert_eq!(path.segments(), ["a", "b", "c"]);
/// assert_eq!(path.to_string(), "/a/b/c");
/// assert_eq!(path.parent().to_string(), "/a/b");
/// assert_eq!(path.name(), Some("c"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TreePath {
    absolute: bool,
    segments: SmallVec<[String; 8]>,
}

impl TreePath {
    /// Parses a path string.
    pub fn parse(path: &str) -> Self {
        Self {
            absolute: path.starts_with('/'),
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty() && *segment != ".")
                .map(str::to_string)
                .collect(),
        }
    }

    /// Returns `true` if the path starts at the root.
    #[inline]
    pub const fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// The segments after the root marker, in walking order.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment, if any.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The path without its final segment.
    ///
    /// The parent of the root is the root, the parent of `.` is `.`.
    pub fn parent(&self) -> Self {
        self.prefix(self.segments.len().saturating_sub(1))
    }

    /// The path made of the first `length` segments.
    pub fn prefix(&self, length: usize) -> Self {
        Self {
            absolute: self.absolute,
            segments: self.segments.iter().take(length).cloned().collect(),
        }
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            formatter.write_str("/")?;
        } else if self.segments.is_empty() {
            return formatter.write_str(".");
        }
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                formatter.write_str("/")?;
            }
            formatter.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for TreePath {
    type Err = std::convert::Infallible;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(path))
    }
}

impl From<&str> for TreePath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<&String> for TreePath {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<String> for TreePath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&TreePath> for TreePath {
    fn from(path: &TreePath) -> Self {
        path.clone()
    }
}

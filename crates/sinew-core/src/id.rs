//! Stable node identity for the link graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, value-comparable identifier for a graph node.
///
/// A `NodeId` names a logical node in the build dependency graph and is
/// the sole deduplication key in every traversal: two occurrences of the
/// same id are treated as the same node regardless of how they were
/// reached or which wrapper instance carries them. Ids are assigned by
/// the surrounding build tool (typically build target labels); this crate
/// never parses or interprets them, it only compares and hashes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an id from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id's string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

//! Node identifiers shared by graphs, deliveries, and routes.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identifier of a graph node (a distribution center or a destination city).
///
/// Backed by a shared string, so cloning is a reference-count bump. The
/// ordering is lexicographic; shortest-path frontiers use it to break ties
/// between candidates with equal distance.
///
/// # Examples
///
/// ```
/// use u_fleet::models::NodeId;
///
/// let a = NodeId::new("Curitiba");
/// let b: NodeId = "Natal".into();
/// assert!(a < b);
/// assert_eq!(a.as_str(), "Curitiba");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Creates a node identifier from a name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the node name.
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
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

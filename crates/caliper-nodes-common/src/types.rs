//! Domain primitive types used across the caliper-nodes workspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CaliperNodesError, Result};

/// Number of nodes to list in a container block. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NodeCount(u32);

impl NodeCount {
    /// Creates a node count.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn new(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(CaliperNodesError::Config {
                message: "node count must be at least 1".into(),
            });
        }
        Ok(Self(count))
    }

    /// Returns the raw count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Iterates over the node indices `1..=count`.
    pub fn indices(self) -> impl Iterator<Item = u32> {
        1..=self.0
    }
}

impl TryFrom<u32> for NodeCount {
    type Error = CaliperNodesError;

    fn try_from(count: u32) -> Result<Self> {
        Self::new(count)
    }
}

impl From<NodeCount> for u32 {
    fn from(count: NodeCount) -> Self {
        count.0
    }
}

impl FromStr for NodeCount {
    type Err = CaliperNodesError;

    fn from_str(s: &str) -> Result<Self> {
        let count = s.trim().parse::<u32>().map_err(|e| CaliperNodesError::Config {
            message: format!("invalid node count {s:?}: {e}"),
        })?;
        Self::new(count)
    }
}

impl fmt::Display for NodeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to one node container, e.g. `/node-besu3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerRef<'a> {
    prefix: &'a str,
    index: u32,
}

impl<'a> ContainerRef<'a> {
    /// Creates a reference from a prefix and a 1-based node index.
    #[must_use]
    pub const fn new(prefix: &'a str, index: u32) -> Self {
        Self { prefix, index }
    }
}

impl fmt::Display for ContainerRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.index)
    }
}

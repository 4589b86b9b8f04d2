//! Literal anchors and indentation of the Caliper monitor block.

/// Indentation of the `containers:` and `stats:` anchor lines.
pub const ANCHOR_INDENT: usize = 8;

/// Indentation of each `- /node-besu<i>` entry line.
pub const ENTRY_INDENT: usize = 10;

/// Key opening the container list.
pub const CONTAINERS_ANCHOR: &str = "containers:";

/// Sibling key closing the container list.
pub const STATS_ANCHOR: &str = "stats:";

/// Prefix of every generated container reference.
pub const CONTAINER_PREFIX: &str = "/node-besu";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "update-yaml-nodes";

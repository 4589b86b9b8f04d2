//! Layout model describing the block the rewriter edits.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANCHOR_INDENT, CONTAINERS_ANCHOR, CONTAINER_PREFIX, ENTRY_INDENT, STATS_ANCHOR,
};
use crate::error::{CaliperNodesError, Result};

/// Shape of a container block: anchors, indentation, and reference prefix.
///
/// The default reproduces the Caliper monitor layout:
///
/// ```text
///         containers:
///           - /node-besu1
///         stats:
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockLayout {
    /// Spaces before the opening and closing anchors.
    pub anchor_indent: usize,
    /// Spaces before each list entry.
    pub entry_indent: usize,
    /// Key opening the list (including the trailing colon).
    pub open_anchor: String,
    /// Key that must immediately follow the list.
    pub close_anchor: String,
    /// Prefix of each container reference; the node index is appended.
    pub container_prefix: String,
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            anchor_indent: ANCHOR_INDENT,
            entry_indent: ENTRY_INDENT,
            open_anchor: CONTAINERS_ANCHOR.to_owned(),
            close_anchor: STATS_ANCHOR.to_owned(),
            container_prefix: CONTAINER_PREFIX.to_owned(),
        }
    }
}

impl BlockLayout {
    /// Checks that anchors and prefix are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if an anchor or the prefix is empty or spans lines.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("open_anchor", &self.open_anchor),
            ("close_anchor", &self.close_anchor),
            ("container_prefix", &self.container_prefix),
        ] {
            if value.is_empty() {
                return Err(CaliperNodesError::Config {
                    message: format!("{field} must not be empty"),
                });
            }
            if value.contains('\n') {
                return Err(CaliperNodesError::Config {
                    message: format!("{field} must be a single line: {value:?}"),
                });
            }
        }
        Ok(())
    }

    /// Opening anchor line with its indentation and newline.
    #[must_use]
    pub fn open_line(&self) -> String {
        format!("{}{}\n", " ".repeat(self.anchor_indent), self.open_anchor)
    }

    /// Closing anchor with its indentation (no newline).
    #[must_use]
    pub fn close_line(&self) -> String {
        format!("{}{}", " ".repeat(self.anchor_indent), self.close_anchor)
    }

    /// Text preceding the node index on every entry line.
    #[must_use]
    pub fn entry_lead(&self) -> String {
        format!("{}- {}", " ".repeat(self.entry_indent), self.container_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_caliper_indentation() {
        let layout = BlockLayout::default();
        assert_eq!(layout.open_line(), "        containers:\n");
        assert_eq!(layout.close_line(), "        stats:");
        assert_eq!(layout.entry_lead(), "          - /node-besu");
    }

    #[test]
    fn default_layout_is_valid() {
        assert!(BlockLayout::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_prefix() {
        let layout = BlockLayout {
            container_prefix: String::new(),
            ..BlockLayout::default()
        };
        let msg = layout.validate().unwrap_err().to_string();
        assert!(msg.contains("container_prefix"), "got: {msg}");
    }

    #[test]
    fn validate_rejects_multiline_anchor() {
        let layout = BlockLayout {
            close_anchor: "stats:\nextra".into(),
            ..BlockLayout::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let layout: BlockLayout =
            serde_json::from_str(r#"{"entry_indent": 4}"#).expect("partial layout parses");
        assert_eq!(layout.entry_indent, 4);
        assert_eq!(layout.anchor_indent, ANCHOR_INDENT);
        assert_eq!(layout.open_anchor, CONTAINERS_ANCHOR);
    }
}

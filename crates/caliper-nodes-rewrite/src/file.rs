//! In-place update of a configuration file.
//!
//! The file is read whole, rewritten in memory, and written back over the
//! original. No backup is kept and the write is not atomic.

use std::path::Path;

use caliper_nodes_common::config::BlockLayout;
use caliper_nodes_common::error::{CaliperNodesError, Result};
use caliper_nodes_common::types::NodeCount;

use crate::block::{RewriteMode, RewriteReport, Rewriter};

impl Rewriter {
    /// Rewrites the container blocks of the file at `path` to list `count` nodes.
    ///
    /// In [`RewriteMode::Lenient`] the file is written back even when no block
    /// matched. In [`RewriteMode::Strict`] the file is left untouched unless it
    /// holds exactly one block.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, or if strict
    /// mode finds other than one block.
    pub fn update_file(&self, path: &Path, count: NodeCount) -> Result<RewriteReport> {
        tracing::info!(path = %path.display(), nodes = count.get(), "updating container list");

        let content = std::fs::read_to_string(path).map_err(|e| CaliperNodesError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if self.mode() == RewriteMode::Strict {
            let found = self.count_blocks(&content);
            if found != 1 {
                return Err(CaliperNodesError::BlockCount {
                    path: path.to_path_buf(),
                    expected: 1,
                    found,
                });
            }
        }

        let (output, report) = self.rewrite(&content, count);

        match report.blocks {
            0 => {
                tracing::warn!(path = %path.display(), "no container block found; content unchanged");
            }
            1 => {}
            found => {
                tracing::warn!(path = %path.display(), blocks = found, "rewrote several container blocks");
            }
        }

        std::fs::write(path, output).map_err(|e| CaliperNodesError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(
            path = %path.display(),
            blocks = report.blocks,
            changed = report.changed,
            "container list written"
        );
        Ok(report)
    }
}

/// Rewrites `path` with the default Caliper layout in lenient mode.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn update_file(path: &Path, count: NodeCount) -> Result<RewriteReport> {
    Rewriter::new(BlockLayout::default())?.update_file(path, count)
}

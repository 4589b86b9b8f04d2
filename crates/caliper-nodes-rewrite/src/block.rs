//! Container block matching and substitution.
//!
//! A block is the opening anchor line, one or more entry lines, and the
//! closing anchor:
//!
//! ```text
//!         containers:
//!           - /node-besu1
//!           - /node-besu2
//!         stats:
//! ```
//!
//! Only the entry lines are replaced. Everything else, including the text
//! after the closing anchor on its line, is left untouched.

use caliper_nodes_common::config::BlockLayout;
use caliper_nodes_common::error::{CaliperNodesError, Result};
use caliper_nodes_common::types::{ContainerRef, NodeCount};
use regex::{Captures, Regex};

/// How to treat files that do not contain exactly one block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RewriteMode {
    /// Rewrite every block found; zero blocks leaves the content as is.
    #[default]
    Lenient,
    /// Fail unless exactly one block is found.
    Strict,
}

/// Outcome of a single rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteReport {
    /// Number of blocks matched and rewritten.
    pub blocks: usize,
    /// Number of entries written into each block.
    pub nodes: NodeCount,
    /// Whether the output differs from the input.
    pub changed: bool,
}

/// Renders the entry lines for `count` nodes, each terminated by a newline.
#[must_use]
pub fn render_entries(layout: &BlockLayout, count: NodeCount) -> String {
    let lead = " ".repeat(layout.entry_indent);
    count
        .indices()
        .map(|index| {
            let reference = ContainerRef::new(&layout.container_prefix, index);
            format!("{lead}- {reference}\n")
        })
        .collect()
}

/// Compiled matcher for one block layout.
#[derive(Debug, Clone)]
pub struct Rewriter {
    layout: BlockLayout,
    pattern: Regex,
    mode: RewriteMode,
}

impl Rewriter {
    /// Compiles the block pattern for `layout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid or the pattern fails to compile.
    pub fn new(layout: BlockLayout) -> Result<Self> {
        layout.validate()?;
        let source = format!(
            r"({open})((?:{lead}\d+\n)+)({close})",
            open = regex::escape(&layout.open_line()),
            lead = regex::escape(&layout.entry_lead()),
            close = regex::escape(&layout.close_line()),
        );
        tracing::debug!(pattern = %source, "compiling block pattern");
        let pattern = Regex::new(&source).map_err(|e| CaliperNodesError::Config {
            message: format!("block pattern does not compile: {e}"),
        })?;
        Ok(Self {
            layout,
            pattern,
            mode: RewriteMode::default(),
        })
    }

    /// Sets how files without exactly one block are handled.
    #[must_use]
    pub fn with_mode(mut self, mode: RewriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configured mode.
    #[must_use]
    pub const fn mode(&self) -> RewriteMode {
        self.mode
    }

    /// Counts the blocks present in `content`.
    #[must_use]
    pub fn count_blocks(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }

    /// Replaces the entries of every block in `content` with `count` fresh ones.
    ///
    /// The mode is not consulted here; see [`Rewriter::update_file`].
    #[must_use]
    pub fn rewrite(&self, content: &str, count: NodeCount) -> (String, RewriteReport) {
        let entries = render_entries(&self.layout, count);
        let mut blocks = 0;
        let output = self
            .pattern
            .replace_all(content, |caps: &Captures<'_>| {
                blocks += 1;
                format!("{}{entries}{}", &caps[1], &caps[3])
            })
            .into_owned();
        let changed = output != content;
        (
            output,
            RewriteReport {
                blocks,
                nodes: count,
                changed,
            },
        )
    }
}

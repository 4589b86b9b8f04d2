//! Rewrite the container list of one configuration file.

use std::path::PathBuf;

use anyhow::Context;
use caliper_nodes_common::config::BlockLayout;
use caliper_nodes_common::types::NodeCount;
use caliper_nodes_rewrite::{RewriteMode, Rewriter};
use clap::Args;

/// Arguments for the update.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Path to the Caliper YAML configuration file.
    pub file: PathBuf,

    /// Number of nodes to list (at least 1).
    #[arg(value_name = "NUM_NODES")]
    pub nodes: NodeCount,

    /// Fail unless the file contains exactly one container block.
    #[arg(long)]
    pub strict: bool,
}

/// Executes the update.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or if strict mode
/// finds other than one container block.
pub fn execute(args: UpdateArgs) -> anyhow::Result<()> {
    let mode = if args.strict {
        RewriteMode::Strict
    } else {
        RewriteMode::Lenient
    };
    let rewriter = Rewriter::new(BlockLayout::default())?.with_mode(mode);

    let report = rewriter
        .update_file(&args.file, args.nodes)
        .with_context(|| format!("Failed to update {}", args.file.display()))?;

    println!("{}", crate::output::summary(&args.file, &report));
    Ok(())
}

//! # caliper-nodes-rewrite
//!
//! Rewrites the `containers:` list of a Caliper monitor configuration so it
//! names `/node-besu1` through `/node-besuN`.
//!
//! - **Block**: pattern compilation, entry generation, and the pure text
//!   substitution.
//! - **File**: read-modify-write of the configuration file in place.

pub mod block;
pub mod file;

pub use block::{RewriteMode, RewriteReport, Rewriter, render_entries};
pub use file::update_file;

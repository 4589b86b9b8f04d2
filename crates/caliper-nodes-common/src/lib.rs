//! # caliper-nodes-common
//!
//! Shared types, error definitions, layout configuration, and constants
//! used across the caliper-nodes workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

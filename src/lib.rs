//! Shared library for `scholar-analytics`
//! Contains the academic aggregation engine, the knowledge-web graph builder,
//! and the configuration and logging used by the `scholar` CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};

//! Core module: models, repositories, and the pure aggregation functions

pub mod config;
pub mod gpa;
pub mod knowledge;
pub mod loader;
pub mod models;
pub mod progress;
pub mod report;
pub mod store;

/// Returns the current version of the `scholar-analytics` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

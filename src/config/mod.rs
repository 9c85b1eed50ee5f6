//! Configuration model for forgeboard.
//!
//! This module defines the Config struct loaded from `forgeboard.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::MAX_ENRICHMENT_LIMIT;

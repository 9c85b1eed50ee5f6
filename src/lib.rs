//! Forgeboard: provider-agnostic repository activity.
//!
//! The library maps raw GitHub and GitLab REST payloads into one canonical
//! model, parses unified-diff patches for display, and derives timelines and
//! statistics from canonical collections. It performs no I/O: callers hand it
//! JSON values and patch text and get plain values back.

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod model;
pub mod provider;
pub mod stats;
pub mod timeline;

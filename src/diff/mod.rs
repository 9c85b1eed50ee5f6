//! Unified-diff patch parsing for display.
//!
//! This module turns patch text (as providers return it per file) into typed
//! lines with old/new line numbers, and projects those lines into split and
//! unified rows. It is a presentation parser: it never checks a patch against
//! file contents, and malformed input degrades instead of failing.
//!
//! Numbering:
//! - A hunk header `@@ -a,b +c,d @@` sets the old counter to `a - 1` and the
//!   new counter to `c - 1`; counts may be omitted
//! - `+` lines advance the new counter, `-` lines the old counter
//! - Every other line is context and advances both
//! - `+++ `/`--- ` file headers before the first hunk are markers, not content

mod helpers;
mod line;
mod parser;
mod render;


// Re-export public API
pub use helpers::HunkHeader;
pub use line::{DiffLine, LineKind, ParsedPatch, PatchAnomaly};
pub use parser::{parse_patch, parse_patch_with_report};
pub use render::{SplitCell, SplitRow, UnifiedRow, render_split, render_unified, split_rows, unified_rows};

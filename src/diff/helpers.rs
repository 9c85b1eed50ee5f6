//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a unified-diff hunk header. Counts are optional.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("Invalid hunk header regex")
});

/// The numeric part of a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: u32,
    pub old_count: Option<u32>,
    pub new_start: u32,
    pub new_count: Option<u32>,
}

impl HunkHeader {
    /// Parse a header line; `None` when it doesn't match or a number overflows.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = HUNK_HEADER_REGEX.captures(line)?;
        let number = |i: usize| caps.get(i).map(|m| m.as_str().parse::<u32>());

        Some(Self {
            old_start: number(1)?.ok()?,
            old_count: number(2).transpose().ok()?,
            new_start: number(3)?.ok()?,
            new_count: number(4).transpose().ok()?,
        })
    }
}

/// Whether a line opens a hunk, matched or not.
pub(super) fn is_hunk_header(line: &str) -> bool {
    line.starts_with("@@")
}

/// Whether a line is a `---`/`+++` file header.
pub(super) fn is_file_header(line: &str) -> bool {
    line.starts_with("+++ ") || line.starts_with("--- ") || line == "+++" || line == "---"
}

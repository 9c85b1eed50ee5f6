//! Parsed diff line types.

use serde::Serialize;

/// What a diff line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    Added,
    Removed,
    Context,
    /// Structural marker (hunk or file header); carries no line numbers.
    HunkHeader,
}

/// One line of a parsed patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    pub kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<u32>,
    /// Content with the leading marker stripped; headers keep their raw text.
    pub text: String,
}

impl DiffLine {
    pub(super) fn marker(text: &str) -> Self {
        Self {
            kind: LineKind::HunkHeader,
            old_line_number: None,
            new_line_number: None,
            text: text.to_string(),
        }
    }
}

/// A hunk header that did not match `@@ -a[,b] +c[,d] @@`.
///
/// Counters keep their previous values, so numbers after it are unreliable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchAnomaly {
    /// Zero-based index into the parsed lines.
    pub line_index: usize,
    pub text: String,
}

/// Parsed lines plus any anomalies met along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedPatch {
    pub lines: Vec<DiffLine>,
    pub anomalies: Vec<PatchAnomaly>,
}

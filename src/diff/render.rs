//! Split and unified projections over parsed lines.
//!
//! Both are pure views of the same `DiffLine` slice; nothing is re-parsed.

use super::line::{DiffLine, LineKind};
use serde::Serialize;

/// One side of a split row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitCell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    pub text: String,
}

/// A side-by-side row. A pure insertion has no left cell, a pure deletion no right cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRow {
    pub kind: LineKind,
    pub left: Option<SplitCell>,
    pub right: Option<SplitCell>,
}

/// A single-column row with both line-number gutters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedRow {
    pub kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<u32>,
    pub prefix: &'static str,
    pub text: String,
}

pub fn split_rows(lines: &[DiffLine]) -> Vec<SplitRow> {
    lines
        .iter()
        .map(|line| {
            let left = (line.kind != LineKind::Added).then(|| SplitCell {
                line_number: line.old_line_number,
                text: line.text.clone(),
            });
            let right = (line.kind != LineKind::Removed).then(|| SplitCell {
                line_number: line.new_line_number,
                text: line.text.clone(),
            });
            SplitRow {
                kind: line.kind,
                left,
                right,
            }
        })
        .collect()
}

pub fn unified_rows(lines: &[DiffLine]) -> Vec<UnifiedRow> {
    lines
        .iter()
        .map(|line| UnifiedRow {
            kind: line.kind,
            old_line_number: line.old_line_number,
            new_line_number: line.new_line_number,
            prefix: prefix(line.kind),
            text: line.text.clone(),
        })
        .collect()
}

fn prefix(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Added => "+",
        LineKind::Removed => "-",
        LineKind::Context => " ",
        LineKind::HunkHeader => "",
    }
}

fn gutter(number: Option<u32>) -> String {
    number.map(|n| format!("{:>5}", n)).unwrap_or_else(|| " ".repeat(5))
}

/// Plain-text unified view: `old new prefix+text` per line.
pub fn render_unified(lines: &[DiffLine]) -> String {
    let mut out = String::new();
    for row in unified_rows(lines) {
        let rendered = format!(
            "{} {} {}{}",
            gutter(row.old_line_number),
            gutter(row.new_line_number),
            row.prefix,
            row.text
        );
        out.push_str(rendered.trim_end());
        out.push('\n');
    }
    out
}

/// Plain-text side-by-side view with each side cut or padded to `width` chars.
pub fn render_split(lines: &[DiffLine], width: usize) -> String {
    let mut out = String::new();
    for row in split_rows(lines) {
        let left = cell(row.left.as_ref(), width);
        let right = cell(row.right.as_ref(), width);
        let rendered = format!("{} | {}", left, right);
        out.push_str(rendered.trim_end());
        out.push('\n');
    }
    out
}

fn cell(cell: Option<&SplitCell>, width: usize) -> String {
    let (number, text) = match cell {
        Some(c) => (c.line_number, c.text.as_str()),
        None => (None, ""),
    };
    let mut text: String = text.chars().take(width).collect();
    let pad = width.saturating_sub(text.chars().count());
    text.push_str(&" ".repeat(pad));
    format!("{} {}", gutter(number), text)
}

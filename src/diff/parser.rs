//! Core patch parsing logic.

use super::helpers::{HunkHeader, is_file_header, is_hunk_header};
use super::line::{DiffLine, LineKind, ParsedPatch, PatchAnomaly};

/// Parse patch text into typed lines.
///
/// Total over any input: the output has exactly one entry per input line
/// (as split by `str::lines`), and an empty patch gives an empty vector.
pub fn parse_patch(patch: &str) -> Vec<DiffLine> {
    parse_patch_with_report(patch).lines
}

/// Parse patch text, also reporting hunk headers that could not be read.
pub fn parse_patch_with_report(patch: &str) -> ParsedPatch {
    let mut parsed = ParsedPatch::default();
    let mut old_line: u32 = 0;
    let mut new_line: u32 = 0;
    let mut seen_hunk = false;

    for (index, line) in patch.lines().enumerate() {
        if is_hunk_header(line) {
            seen_hunk = true;
            match HunkHeader::parse(line) {
                Some(header) => {
                    // A zero start marks an empty side; the counter stays at 0.
                    old_line = header.old_start.saturating_sub(1);
                    new_line = header.new_start.saturating_sub(1);
                }
                None => {
                    log::debug!("unparseable hunk header at line {}: {:?}", index, line);
                    parsed.anomalies.push(PatchAnomaly {
                        line_index: index,
                        text: line.to_string(),
                    });
                }
            }
            parsed.lines.push(DiffLine::marker(line));
            continue;
        }

        // File headers only precede the first hunk; inside a hunk a line
        // starting with "---" is a removed "--" line.
        if !seen_hunk && is_file_header(line) {
            parsed.lines.push(DiffLine::marker(line));
            continue;
        }

        let diff_line = if let Some(content) = line.strip_prefix('+') {
            new_line = new_line.saturating_add(1);
            DiffLine {
                kind: LineKind::Added,
                old_line_number: None,
                new_line_number: Some(new_line),
                text: content.to_string(),
            }
        } else if let Some(content) = line.strip_prefix('-') {
            old_line = old_line.saturating_add(1);
            DiffLine {
                kind: LineKind::Removed,
                old_line_number: Some(old_line),
                new_line_number: None,
                text: content.to_string(),
            }
        } else {
            old_line = old_line.saturating_add(1);
            new_line = new_line.saturating_add(1);
            DiffLine {
                kind: LineKind::Context,
                old_line_number: Some(old_line),
                new_line_number: Some(new_line),
                text: line.strip_prefix(' ').unwrap_or(line).to_string(),
            }
        };
        parsed.lines.push(diff_line);
    }

    parsed
}

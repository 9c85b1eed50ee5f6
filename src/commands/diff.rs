//! Implementation of the `forgeboard diff` command.

use super::input::read_text;
use super::print_json;
use crate::cli::{DiffArgs, DiffView};
use forgeboard::diff::{parse_patch_with_report, render_split, render_unified, split_rows, unified_rows};
use forgeboard::error::Result;

/// Execute the `forgeboard diff` command.
///
/// Unreadable hunk headers are logged as warnings; the patch is still rendered.
pub(super) fn cmd_diff(args: DiffArgs) -> Result<()> {
    let patch = read_text(&args.patch)?;
    let parsed = parse_patch_with_report(&patch);

    for anomaly in &parsed.anomalies {
        log::warn!(
            "line {}: unrecognized hunk header {:?}; numbering after it is unreliable",
            anomaly.line_index + 1,
            anomaly.text
        );
    }

    match (args.view, args.json) {
        (DiffView::Unified, true) => print_json(&unified_rows(&parsed.lines)),
        (DiffView::Split, true) => print_json(&split_rows(&parsed.lines)),
        (DiffView::Unified, false) => {
            print!("{}", render_unified(&parsed.lines));
            Ok(())
        }
        (DiffView::Split, false) => {
            print!("{}", render_split(&parsed.lines, args.width));
            Ok(())
        }
    }
}

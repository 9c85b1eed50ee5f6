//! Implementation of the `forgeboard timeline` command.

use super::input::read_json;
use super::{print_json, report_rejected};
use crate::cli::TimelineArgs;
use chrono::{DateTime, Utc};
use forgeboard::config::Config;
use forgeboard::error::{ForgeError, Result};
use forgeboard::provider;
use forgeboard::timeline::{EventKind, TimelineEvent, build_timeline};

/// Execute the `forgeboard timeline` command.
pub(super) fn cmd_timeline(config: &Config, args: TimelineArgs) -> Result<()> {
    let now = match &args.now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ForgeError::UserError(format!("invalid --now '{}': {}", raw, e)))?,
        None => Utc::now(),
    };

    let commits = match &args.commits {
        Some(path) => report_rejected(
            "commit",
            provider::normalize_commits(args.provider, &read_json(path)?)?,
        ),
        None => Vec::new(),
    };
    let change_requests = match &args.change_requests {
        Some(path) => report_rejected(
            "change request",
            provider::normalize_change_requests(args.provider, &read_json(path)?)?,
        ),
        None => Vec::new(),
    };

    let events = build_timeline(
        &commits,
        &change_requests,
        args.filter.unwrap_or(config.event_filter),
        args.range.unwrap_or(config.time_range),
        now,
        &config.description_style(),
    );

    if args.json {
        return print_json(&events);
    }

    if events.is_empty() {
        println!("No events in range.");
        return Ok(());
    }
    for event in &events {
        println!("{}", format_event(event));
    }
    Ok(())
}

fn format_event(event: &TimelineEvent) -> String {
    let label = match &event.kind {
        EventKind::Commit { sha } => format!("commit {}", sha.chars().take(7).collect::<String>()),
        EventKind::PullRequest { number } => format!("opened #{}", number),
        EventKind::Merge { number } => format!("merged #{}", number),
    };
    format!(
        "{}  {:<14} {} ({})",
        event.date.format("%Y-%m-%d %H:%M"),
        label,
        event.title,
        event.author
    )
}

//! Time windows and event filters.
//!
//! Both parse strictly: an unknown token is a `FilterValidation` error,
//! never a silent default.

use crate::error::ForgeError;
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// How far back a timeline reaches from the invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Year,
    /// Five years back; a practical bound rather than "forever".
    All,
}

impl TimeRange {
    pub const TOKENS: &'static str = "week, month, year, all";

    /// Inclusive `[since, until]` window ending at `now`.
    ///
    /// Calendar months and years clamp to the last valid day, so one month
    /// before March 31 is the last day of February.
    pub fn window(self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let since = match self {
            TimeRange::Week => now.checked_sub_signed(Duration::days(7)),
            TimeRange::Month => now.checked_sub_months(Months::new(1)),
            TimeRange::Year => now.checked_sub_months(Months::new(12)),
            TimeRange::All => now.checked_sub_months(Months::new(60)),
        };
        (since.unwrap_or(DateTime::<Utc>::MIN_UTC), now)
    }

    pub fn contains(self, now: DateTime<Utc>, date: &DateTime<Utc>) -> bool {
        let (since, until) = self.window(now);
        since <= *date && *date <= until
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
            TimeRange::Year => write!(f, "year"),
            TimeRange::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            "all" => Ok(TimeRange::All),
            _ => Err(ForgeError::FilterValidation(format!(
                "unknown time range '{}'. Valid options: {}",
                s,
                Self::TOKENS
            ))),
        }
    }
}

/// Which event types a timeline includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFilter {
    /// Commits plus every change request, merged or not.
    #[default]
    All,
    Commits,
    /// Change requests without a merge timestamp.
    PullRequests,
    /// Change requests with a merge timestamp.
    Merges,
}

impl EventFilter {
    pub const TOKENS: &'static str = "all, commits, pull_requests, merges";

    pub fn includes_commits(self) -> bool {
        matches!(self, EventFilter::All | EventFilter::Commits)
    }

    pub fn includes_change_requests(self) -> bool {
        !matches!(self, EventFilter::Commits)
    }

    /// Whether a change request classified as merged (or not) passes.
    pub fn accepts_change_request(self, merged: bool) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Commits => false,
            EventFilter::PullRequests => !merged,
            EventFilter::Merges => merged,
        }
    }
}

impl std::fmt::Display for EventFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventFilter::All => write!(f, "all"),
            EventFilter::Commits => write!(f, "commits"),
            EventFilter::PullRequests => write!(f, "pull_requests"),
            EventFilter::Merges => write!(f, "merges"),
        }
    }
}

impl std::str::FromStr for EventFilter {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(EventFilter::All),
            "commits" => Ok(EventFilter::Commits),
            "pull_requests" => Ok(EventFilter::PullRequests),
            "merges" => Ok(EventFilter::Merges),
            _ => Err(ForgeError::FilterValidation(format!(
                "unknown event filter '{}'. Valid options: {}",
                s,
                Self::TOKENS
            ))),
        }
    }
}

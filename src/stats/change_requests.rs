//! Change-request state counts and lifetime.

use crate::model::{ChangeRequest, ChangeRequestState};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestStats {
    pub open: u64,
    pub closed: u64,
    pub merged: u64,
    /// Mean days from creation to close, one decimal; zero when nothing closed.
    pub average_lifetime_days: f64,
}

pub fn change_request_stats(change_requests: &[ChangeRequest]) -> ChangeRequestStats {
    let mut stats = ChangeRequestStats::default();
    let mut total_days = 0.0;
    let mut timed = 0u32;

    for cr in change_requests {
        match cr.state {
            ChangeRequestState::Open => stats.open += 1,
            ChangeRequestState::Closed => stats.closed += 1,
            ChangeRequestState::Merged => stats.merged += 1,
        }
        if let Some(days) = cr.lifetime_days() {
            total_days += days;
            timed += 1;
        }
    }

    if timed > 0 {
        let mean = total_days / f64::from(timed);
        stats.average_lifetime_days = (mean * 10.0 + 0.5).floor() / 10.0;
    }
    stats
}

//! Peak deal window: the time of day when the most deals are available at once.
//!
//! Uses an event-based sweep line: O(n log n) time to order event times, O(n)
//! for the sweep itself, where n is at most four events per restaurant.

use std::cmp::Reverse;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::events::{build_events, net_deltas};
use crate::model::Restaurant;
use crate::sweep::{find_peak_intervals, PeakInterval};
use crate::time::format_minutes;

/// Formatted peak window. Both bounds are `None` when there is no peak.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    #[serde(rename = "peakTimeStart")]
    pub start: Option<String>,
    #[serde(rename = "peakTimeEnd")]
    pub end: Option<String>,
}

impl From<&PeakInterval> for PeakWindow {
    fn from(interval: &PeakInterval) -> Self {
        Self {
            start: Some(format_minutes(interval.start)),
            end: Some(format_minutes(interval.end)),
        }
    }
}

/// Pick one canonical interval: the earliest start, then the longest among
/// intervals sharing that start.
pub fn select_peak(candidates: &[PeakInterval]) -> Option<PeakInterval> {
    candidates
        .iter()
        .min_by_key(|p| (p.start, Reverse(p.length())))
        .copied()
}

/// Find the peak interval across all restaurants, unformatted.
pub fn find_peak_interval(restaurants: &[Restaurant]) -> Option<PeakInterval> {
    let deltas = net_deltas(&build_events(restaurants));
    select_peak(&find_peak_intervals(&deltas))
}

/// Compute the formatted peak window across all restaurants.
///
/// Restaurants without deals or with unparseable hours are left out. An empty
/// input, or one where no restaurant contributes, yields an empty window.
pub fn query_peak_window(restaurants: &[Restaurant]) -> PeakWindow {
    match find_peak_interval(restaurants) {
        Some(peak) => {
            let window = PeakWindow::from(&peak);
            info!(
                "Peak time: {} - {} ({} minutes, {} deals)",
                window.start.as_deref().unwrap_or_default(),
                window.end.as_deref().unwrap_or_default(),
                peak.length(),
                peak.weight
            );
            window
        }
        None => {
            warn!("No peak found across {} restaurants", restaurants.len());
            PeakWindow::default()
        }
    }
}

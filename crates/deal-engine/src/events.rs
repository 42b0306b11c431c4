//! Operating windows → weight-delta events on the minute-of-day timeline.
//!
//! Each restaurant with deals contributes its deal count as weight while open.
//! A window that wraps past midnight is the union of `[open, 1440)` and
//! `[0, close)`, so it produces two opening and two closing events.

use log::debug;

use crate::hours::OperatingWindow;
use crate::model::Restaurant;
use crate::time::MINUTES_PER_DAY;

/// A signed change in the number of concurrently available deals.
///
/// `time` is a minute of the day, or [`MINUTES_PER_DAY`] for the end of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightEvent {
    pub time: u32,
    pub delta: i64,
}

impl WeightEvent {
    pub fn new(time: u32, delta: i64) -> Self {
        Self { time, delta }
    }
}

/// Events for one operating window carrying `weight` deals.
pub fn restaurant_events(window: OperatingWindow, weight: i64) -> Vec<WeightEvent> {
    let open = window.open.minutes();
    let close = window.close.minutes();

    if window.spans_midnight() {
        vec![
            WeightEvent::new(open, weight),
            WeightEvent::new(MINUTES_PER_DAY, -weight),
            WeightEvent::new(0, weight),
            WeightEvent::new(close, -weight),
        ]
    } else {
        vec![
            WeightEvent::new(open, weight),
            WeightEvent::new(close, -weight),
        ]
    }
}

/// Build the raw events for every restaurant that has deals and parseable hours.
///
/// Restaurants without deals or with bad hours are skipped.
pub fn build_events(restaurants: &[Restaurant]) -> Vec<WeightEvent> {
    restaurants
        .iter()
        .filter(|r| r.has_deals())
        .filter_map(|r| match r.operating_window() {
            Ok(window) => Some(restaurant_events(window, r.deals.len() as i64)),
            Err(e) => {
                debug!("Skipping restaurant {}: {}", r.label(), e);
                None
            }
        })
        .flatten()
        .collect()
}

/// Sum the deltas of events sharing a time. Returns one event per distinct
/// time, in ascending time order.
pub fn net_deltas(events: &[WeightEvent]) -> Vec<WeightEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.time);

    let mut net: Vec<WeightEvent> = Vec::with_capacity(sorted.len());
    for event in sorted {
        if let Some(last) = net.last_mut() {
            if last.time == event.time {
                last.delta += event.delta;
                continue;
            }
        }
        net.push(event);
    }

    debug!("Built {} distinct event times from {} events", net.len(), events.len());
    net
}

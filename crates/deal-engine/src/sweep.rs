//! Sweep line over net weight events.
//!
//! Walks consecutive distinct event times. Between two event times the running
//! weight is constant, so each gap `[t[i], t[i+1])` is one segment. The sweep
//! keeps every maximal run of segments whose weight equals the highest weight
//! seen so far; a new higher weight discards the earlier runs.

use crate::events::WeightEvent;

/// A half-open span `[start, end)` of minutes with a constant deal count.
///
/// `end` may be [`crate::time::MINUTES_PER_DAY`]. A window crossing midnight
/// is always two intervals, never one with `end < start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakInterval {
    pub start: u32,
    pub end: u32,
    pub weight: i64,
}

impl PeakInterval {
    pub fn length(&self) -> u32 {
        self.end - self.start
    }
}

#[derive(Debug, Default)]
struct SweepState {
    current: i64,
    max: i64,
    peaks: Vec<PeakInterval>,
}

impl SweepState {
    fn step(mut self, event: &WeightEvent, next_time: u32) -> Self {
        self.current += event.delta;
        let (start, end) = (event.time, next_time);

        if self.current <= 0 || self.current < self.max {
            return self;
        }

        if self.current > self.max {
            self.max = self.current;
            self.peaks.clear();
            self.peaks.push(PeakInterval {
                start,
                end,
                weight: self.current,
            });
            return self;
        }

        match self.peaks.last_mut() {
            Some(last) if last.end == start => last.end = end,
            _ => self.peaks.push(PeakInterval {
                start,
                end,
                weight: self.current,
            }),
        }
        self
    }
}

/// Find every maximal interval at the global maximum weight.
///
/// `events` must be net deltas in ascending time order, as produced by
/// [`crate::events::net_deltas`]. Segments with a non-positive weight are
/// never candidates, so an empty or all-zero timeline yields no intervals.
/// Returned intervals are in ascending start order.
pub fn find_peak_intervals(events: &[WeightEvent]) -> Vec<PeakInterval> {
    events
        .windows(2)
        .fold(SweepState::default(), |state, pair| {
            state.step(&pair[0], pair[1].time)
        })
        .peaks
}

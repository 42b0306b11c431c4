//! Time-of-day parsing and formatting.
//!
//! Restaurant feeds mix 12-hour ("3:00pm", "3:00 PM") and 24-hour ("15:00",
//! "09:00") notations. Everything is normalized to a minute of the day in
//! `0..1440` and rendered back as lowercase 12-hour text ("3:00pm").

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};

use crate::error::{DealError, Result};

/// Number of minutes in a day. Also used as the exclusive end-of-day event time.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Accepted input formats, tried in order. The first one that consumes the
/// whole string wins. `%I` and `%H` take one or two digit hours. chrono is
/// looser than these patterns about minute width and spacing, so input must
/// also pass [`has_clock_shape`].
const INPUT_FORMATS: [&str; 3] = [
    "%I:%M%p",  // 7:00pm
    "%I:%M %p", // 7:00 pm
    "%H:%M",    // 19:00, 9:00, 09:00
];

const OUTPUT_FORMAT: &str = "%-I:%M%P";

/// A wall-clock minute of the day, always in `0..1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Returns `None` when `minutes` is not a minute of a single day.
    pub fn new(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(TimeOfDay(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay(time.hour() * 60 + time.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.0))
    }
}

/// Parse a time string into a [`TimeOfDay`].
///
/// Leading and trailing whitespace is ignored and the meridiem marker is
/// case-insensitive. No range check is applied beyond what each format
/// implies, so "25:00" and "13:00pm" are rejected by every format.
///
/// # Errors
/// Returns `DealError::InvalidTimeFormat` if the input is blank or matches
/// none of the accepted formats.
pub fn parse_time(text: &str) -> Result<TimeOfDay> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DealError::InvalidTimeFormat(
            "time cannot be empty".to_string(),
        ));
    }

    let normalized = trimmed.to_ascii_lowercase();
    Some(normalized.as_str())
        .filter(|s| has_clock_shape(s))
        .and_then(|s| {
            INPUT_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        })
        .map(TimeOfDay::from)
        .ok_or_else(|| {
            DealError::InvalidTimeFormat(format!(
                "unable to parse time '{}', expected formats: 3:00pm, 3:00 pm, 15:00, 09:00",
                text
            ))
        })
}

/// `h:mm`, `hh:mm`, optionally followed by `am`/`pm` with at most one space.
/// Ranges are left to chrono.
fn has_clock_shape(s: &str) -> bool {
    let Some((hour, rest)) = s.split_once(':') else {
        return false;
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let Some((minute, suffix)) = rest.split_at_checked(2) else {
        return false;
    };

    (1..=2).contains(&hour.len())
        && digits(hour)
        && digits(minute)
        && matches!(suffix, "" | "am" | "pm" | " am" | " pm")
}

/// Render a minute of the day as lowercase 12-hour text, e.g. `1080` → `"6:00pm"`.
///
/// Values of 1440 and above are clamped to 1439 so the end of the day never
/// renders as a second midnight.
pub fn format_minutes(minutes: u32) -> String {
    let bounded = minutes.min(MINUTES_PER_DAY - 1);
    let time = NaiveTime::default() + Duration::minutes(i64::from(bounded));
    time.format(OUTPUT_FORMAT).to_string()
}

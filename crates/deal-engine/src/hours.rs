//! Operating window containment.
//!
//! A window whose close time is earlier than its open time runs past midnight
//! (e.g. 10:00pm–2:00am). Both boundaries are inclusive in either case.

use crate::error::Result;
use crate::time::{parse_time, TimeOfDay};

/// A restaurant's opening and closing time for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl OperatingWindow {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    /// Parse an open/close pair of time strings.
    ///
    /// # Errors
    /// Returns `DealError::InvalidTimeFormat` if either string fails to parse.
    pub fn parse(open: &str, close: &str) -> Result<Self> {
        Ok(Self {
            open: parse_time(open)?,
            close: parse_time(close)?,
        })
    }

    /// True when the window runs past midnight (`open > close`).
    pub fn spans_midnight(&self) -> bool {
        self.open > self.close
    }

    pub fn contains(&self, query: TimeOfDay) -> bool {
        is_open(query, self.open, self.close)
    }
}

/// Check whether `query` falls within `[open, close]`, wrapping past midnight
/// when `open > close`.
///
/// When `open == close` the window is the single minute `open`.
pub fn is_open(query: TimeOfDay, open: TimeOfDay, close: TimeOfDay) -> bool {
    if open <= close {
        open <= query && query <= close
    } else {
        query >= open || query <= close
    }
}

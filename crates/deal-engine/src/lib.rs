//! # deal-engine
//!
//! Answers two questions over a snapshot of restaurants, each with operating
//! hours and a list of deals:
//!
//! 1. Which deals are active at a given time of day?
//! 2. In which time-of-day window are the most deals available at once?
//!
//! The second question is answered with a sweep line over weight-delta events
//! built from every restaurant's operating window. Windows that wrap past
//! midnight are split into two same-day segments before sweeping.
//!
//! All operations are pure functions of their input. Nothing is cached and no
//! state is shared between calls, so queries may run concurrently on separate
//! snapshots without synchronization.
//!
//! ## Quick start
//!
//! ```rust
//! use deal_engine::{query_peak_window, Deal, Restaurant};
//!
//! let restaurant = Restaurant {
//!     name: Some("Late Bar".to_string()),
//!     open: Some("10:00pm".to_string()),
//!     close: Some("2:00am".to_string()),
//!     deals: vec![Deal::default()],
//!     ..Restaurant::default()
//! };
//!
//! let peak = query_peak_window(&[restaurant]);
//! assert_eq!(peak.start.as_deref(), Some("12:00am"));
//! assert_eq!(peak.end.as_deref(), Some("2:00am"));
//! ```
//!
//! ## Modules
//!
//! - [`time`] — time string → minute of day, and back
//! - [`hours`] — operating window containment with midnight wraparound
//! - [`model`] — restaurant, deal and deal view records
//! - [`active`] — deals active at a given time
//! - [`events`] — operating windows → weight-delta events
//! - [`sweep`] — sweep line producing the maximal-weight intervals
//! - [`peak`] — tie-breaking and the peak window result
//! - [`page`] — slicing a deal list into pages
//! - [`feed`] — decoding the upstream restaurant feed document
//! - [`error`] — Error types

pub mod active;
pub mod error;
pub mod events;
pub mod feed;
pub mod hours;
pub mod model;
pub mod page;
pub mod peak;
pub mod sweep;
pub mod time;

pub use active::{active_deals_at, query_active_deals};
pub use error::DealError;
pub use events::{build_events, net_deltas, WeightEvent};
pub use feed::parse_feed;
pub use hours::{is_open, OperatingWindow};
pub use model::{Deal, DealView, Restaurant};
pub use page::{paginate, DealPage, PageRequest};
pub use peak::{find_peak_interval, query_peak_window, select_peak, PeakWindow};
pub use sweep::{find_peak_intervals, PeakInterval};
pub use time::{format_minutes, parse_time, TimeOfDay, MINUTES_PER_DAY};

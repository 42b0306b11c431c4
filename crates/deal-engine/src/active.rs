//! Deals active at a given time of day.
//!
//! A deal is active when its restaurant is open at the query time. Restaurants
//! with missing or unparseable hours, or with no deals, are skipped; one bad
//! record never fails the whole query.

use log::{debug, info};

use crate::error::{DealError, Result};
use crate::model::{DealView, Restaurant};
use crate::time::{parse_time, TimeOfDay};

/// Collect every deal whose restaurant is open at `query`.
///
/// Output preserves restaurant order, then deal order within each restaurant.
pub fn active_deals_at(query: TimeOfDay, restaurants: &[Restaurant]) -> Vec<DealView> {
    restaurants
        .iter()
        .filter(|r| is_candidate(r))
        .filter(|r| match r.operating_window() {
            Ok(window) => window.contains(query),
            Err(e) => {
                debug!("Skipping restaurant {}: {}", r.label(), e);
                false
            }
        })
        .flat_map(|r| r.deals.iter().map(move |deal| DealView::new(r, deal)))
        .collect()
}

/// Resolve a raw `timeOfDay` request parameter and collect the active deals.
///
/// # Errors
/// Returns `DealError::MissingParameter` if `time_of_day` is blank, and
/// `DealError::InvalidTimeFormat` if it cannot be parsed.
pub fn query_active_deals(time_of_day: &str, restaurants: &[Restaurant]) -> Result<Vec<DealView>> {
    if time_of_day.trim().is_empty() {
        return Err(DealError::MissingParameter(
            "timeOfDay parameter is required".to_string(),
        ));
    }

    let query = parse_time(time_of_day)?;
    let deals = active_deals_at(query, restaurants);
    info!("Found {} active deals at {}", deals.len(), query);
    Ok(deals)
}

fn is_candidate(restaurant: &Restaurant) -> bool {
    if restaurant.open.is_none() || restaurant.close.is_none() {
        debug!("Skipping restaurant {}: missing hours", restaurant.label());
        return false;
    }
    restaurant.has_deals()
}

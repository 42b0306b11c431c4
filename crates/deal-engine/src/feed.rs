//! Decoding the upstream restaurant feed.
//!
//! The feed is a JSON object with a `restaurants` array. A bare array of
//! restaurants is accepted as well.

use serde::Deserialize;

use crate::error::{DealError, Result};
use crate::model::Restaurant;

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Bare(Vec<Restaurant>),
    Wrapped { restaurants: Option<Vec<Restaurant>> },
}

/// Parse a feed document into a restaurant snapshot.
///
/// # Errors
/// Returns `DealError::FeedParse` if the text is not valid JSON, and
/// `DealError::Feed` if it is valid JSON without a `restaurants` array.
pub fn parse_feed(json: &str) -> Result<Vec<Restaurant>> {
    // Syntax errors surface here with line/column; shape errors below.
    let value: serde_json::Value = serde_json::from_str(json)?;

    match FeedDocument::deserialize(value) {
        Ok(FeedDocument::Bare(restaurants)) => Ok(restaurants),
        Ok(FeedDocument::Wrapped {
            restaurants: Some(restaurants),
        }) => Ok(restaurants),
        Ok(FeedDocument::Wrapped { restaurants: None }) => Err(DealError::Feed(
            "restaurant feed returned empty response".to_string(),
        )),
        Err(e) => Err(DealError::Feed(format!("unexpected feed shape: {}", e))),
    }
}

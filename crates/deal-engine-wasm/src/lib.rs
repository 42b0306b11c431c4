//! WASM bindings for deal-engine.
//!
//! Exposes the active-deals and peak-window queries to JavaScript via
//! `wasm-bindgen`. The restaurant feed goes in and results come out as JSON
//! strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p deal-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/deal-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/deal_engine_wasm.wasm
//! ```

use deal_engine::{DealPage, PageRequest, Restaurant};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_restaurants(feed_json: &str) -> Result<Vec<Restaurant>, JsValue> {
    deal_engine::parse_feed(feed_json).map_err(js_error)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// List the deals active at `time_of_day`.
///
/// `feed_json` is either `{"restaurants": [...]}` or a bare array of
/// restaurants. Returns a JSON page object (`deals`, `totalElements`,
/// `totalPages`, ...). When both `page` and `size` are omitted the whole list
/// comes back as a single page.
///
/// Throws if `time_of_day` is blank or unparseable, or the feed is malformed.
#[wasm_bindgen(js_name = "activeDeals")]
pub fn active_deals(
    time_of_day: &str,
    feed_json: &str,
    page: Option<u32>,
    size: Option<u32>,
) -> Result<String, JsValue> {
    let restaurants = parse_restaurants(feed_json)?;
    let deals = deal_engine::query_active_deals(time_of_day, &restaurants).map_err(js_error)?;

    let result = match (page, size) {
        (None, None) => DealPage::unpaged(deals),
        (page, size) => {
            let defaults = PageRequest::default();
            let request = PageRequest {
                page: page.map_or(defaults.page, |p| p as usize),
                size: size.map_or(defaults.size, |s| s as usize),
            };
            deal_engine::paginate(deals, request).map_err(js_error)?
        }
    };

    to_json(&result)
}

/// Compute the window with the most deals available at once.
///
/// Returns `{"peakTimeStart": "...", "peakTimeEnd": "..."}`, with `null`
/// bounds when no restaurant contributes.
#[wasm_bindgen(js_name = "peakTime")]
pub fn peak_time(feed_json: &str) -> Result<String, JsValue> {
    let restaurants = parse_restaurants(feed_json)?;
    to_json(&deal_engine::query_peak_window(&restaurants))
}

/// Normalize a time string to the canonical `h:mma` form (e.g. "15:00" → "3:00pm").
#[wasm_bindgen(js_name = "normalizeTime")]
pub fn normalize_time(text: &str) -> Result<String, JsValue> {
    deal_engine::parse_time(text)
        .map(|t| t.to_string())
        .map_err(js_error)
}

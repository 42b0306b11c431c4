//! Restaurant and deal records as they arrive from the feed, and the flattened
//! deal view returned by the active-deals query.
//!
//! Field names on the wire are camelCase (`objectId`, `address1`, `qtyLeft`).
//! Every scalar field is optional: the feed is not trusted to be complete, and
//! incomplete records are skipped by the queries rather than rejected here.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::hours::OperatingWindow;

/// A restaurant with its operating hours and deals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub object_id: Option<String>,
    pub name: Option<String>,
    pub address1: Option<String>,
    pub suburb: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    pub image_link: Option<String>,
    /// Opening time, in any format accepted by [`crate::time::parse_time`].
    pub open: Option<String>,
    /// Closing time. Earlier than `open` for restaurants trading past midnight.
    pub close: Option<String>,
    /// Absent or `null` in the feed is read as no deals.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deals: Vec<Deal>,
}

/// A single deal offered by a restaurant.
///
/// The optional `open`/`close`/`start`/`end` bounds are carried through but do
/// not narrow the restaurant's contribution to the peak window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub object_id: Option<String>,
    pub discount: Option<String>,
    pub dine_in: Option<String>,
    pub lightning: Option<String>,
    pub qty_left: Option<String>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A deal joined with the identifying fields of the restaurant offering it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealView {
    pub restaurant_object_id: Option<String>,
    pub restaurant_name: Option<String>,
    pub restaurant_address1: Option<String>,
    pub restaurant_suburb: Option<String>,
    pub restaurant_open: Option<String>,
    pub restaurant_close: Option<String>,
    pub deal_object_id: Option<String>,
    pub discount: Option<String>,
    pub dine_in: Option<String>,
    pub lightning: Option<String>,
    pub qty_left: Option<String>,
}

impl Restaurant {
    /// Name used in log lines; falls back to the object id.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.object_id.as_deref())
            .unwrap_or("<unnamed>")
    }

    pub fn has_deals(&self) -> bool {
        !self.deals.is_empty()
    }

    /// Parse this restaurant's open/close strings.
    ///
    /// # Errors
    /// Returns `DealError::InvalidTimeFormat` if either bound is missing or
    /// unparseable.
    pub fn operating_window(&self) -> Result<OperatingWindow> {
        OperatingWindow::parse(
            self.open.as_deref().unwrap_or_default(),
            self.close.as_deref().unwrap_or_default(),
        )
    }
}

impl DealView {
    pub fn new(restaurant: &Restaurant, deal: &Deal) -> Self {
        Self {
            restaurant_object_id: restaurant.object_id.clone(),
            restaurant_name: restaurant.name.clone(),
            restaurant_address1: restaurant.address1.clone(),
            restaurant_suburb: restaurant.suburb.clone(),
            restaurant_open: restaurant.open.clone(),
            restaurant_close: restaurant.close.clone(),
            deal_object_id: deal.object_id.clone(),
            discount: deal.discount.clone(),
            dine_in: deal.dine_in.clone(),
            lightning: deal.lightning.clone(),
            qty_left: deal.qty_left.clone(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Deal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Deal>>::deserialize(deserializer)?.unwrap_or_default())
}

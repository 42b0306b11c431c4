//! Slicing a deal list into pages.
//!
//! Pages are zero-indexed. Requesting a page past the end is not an error: the
//! page comes back empty with the totals still filled in.

use serde::{Deserialize, Serialize};

use crate::error::{DealError, Result};
use crate::model::DealView;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of deals plus the metadata needed to walk the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealPage {
    pub deals: Vec<DealView>,
    pub total_elements: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl DealPage {
    /// Wrap a full list as a single page.
    pub fn unpaged(deals: Vec<DealView>) -> Self {
        let total = deals.len();
        Self {
            deals,
            total_elements: total,
            total_pages: 1,
            current_page: 0,
            page_size: total,
            has_next: false,
            has_previous: false,
        }
    }
}

/// Cut `deals` down to the page described by `request`.
///
/// # Errors
/// Returns `DealError::InvalidPageRequest` if `request.size` is zero.
pub fn paginate(deals: Vec<DealView>, request: PageRequest) -> Result<DealPage> {
    let PageRequest { page, size } = request;
    if size == 0 {
        return Err(DealError::InvalidPageRequest(
            "page size must be at least 1".to_string(),
        ));
    }

    let total = deals.len();
    let total_pages = total.div_ceil(size);
    let content: Vec<DealView> = deals
        .into_iter()
        .skip(page.saturating_mul(size))
        .take(size)
        .collect();

    Ok(DealPage {
        deals: content,
        total_elements: total,
        total_pages,
        current_page: page,
        page_size: size,
        has_next: page.saturating_add(1) < total_pages,
        has_previous: page > 0,
    })
}

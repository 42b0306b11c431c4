//! Tests for deal list pagination.

use deal_engine::{paginate, DealError, DealPage, DealView, PageRequest};

fn views(count: usize) -> Vec<DealView> {
    (0..count)
        .map(|i| DealView {
            restaurant_object_id: Some("R1".to_string()),
            restaurant_name: Some("Restaurant".to_string()),
            restaurant_address1: None,
            restaurant_suburb: None,
            restaurant_open: Some("9:00am".to_string()),
            restaurant_close: Some("5:00pm".to_string()),
            deal_object_id: Some(format!("D{}", i)),
            discount: None,
            dine_in: None,
            lightning: None,
            qty_left: None,
        })
        .collect()
}

#[test]
fn first_page_of_many() {
    let page = paginate(views(25), PageRequest { page: 0, size: 10 }).unwrap();

    assert_eq!(page.deals.len(), 10);
    assert_eq!(page.total_elements, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 0);
    assert_eq!(page.page_size, 10);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[test]
fn last_partial_page() {
    let page = paginate(views(25), PageRequest { page: 2, size: 10 }).unwrap();

    assert_eq!(page.deals.len(), 5);
    assert_eq!(page.deals[0].deal_object_id.as_deref(), Some("D20"));
    assert!(!page.has_next);
    assert!(page.has_previous);
}

#[test]
fn page_past_the_end_is_empty_with_totals() {
    let page = paginate(views(5), PageRequest { page: 3, size: 10 }).unwrap();

    assert!(page.deals.is_empty());
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 1);
    assert!(!page.has_next);
    assert!(page.has_previous);
}

#[test]
fn largest_page_number_does_not_overflow() {
    let page = paginate(views(1), PageRequest { page: usize::MAX, size: 1 }).unwrap();

    assert!(page.deals.is_empty());
    assert_eq!(page.current_page, usize::MAX);
    assert!(!page.has_next);
    assert!(page.has_previous);
}

#[test]
fn empty_list_has_zero_pages() {
    let page = paginate(Vec::new(), PageRequest::default()).unwrap();

    assert_eq!(page.total_pages, 0);
    assert_eq!(page.page_size, 20);
    assert!(!page.has_next);
}

#[test]
fn zero_size_is_rejected() {
    let err = paginate(views(3), PageRequest { page: 0, size: 0 }).unwrap_err();
    assert!(matches!(err, DealError::InvalidPageRequest(_)));
}

#[test]
fn unpaged_wraps_everything() {
    let page = DealPage::unpaged(views(7));

    assert_eq!(page.deals.len(), 7);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page_size, 7);
    assert!(!page.has_next && !page.has_previous);
}

#[test]
fn serializes_with_camel_case_metadata() {
    let value = serde_json::to_value(DealPage::unpaged(views(1))).unwrap();

    assert_eq!(value["totalElements"], 1);
    assert_eq!(value["hasNext"], false);
    assert_eq!(value["deals"][0]["dealObjectId"], "D0");
}

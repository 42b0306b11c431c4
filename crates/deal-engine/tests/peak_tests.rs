//! Tests for peak deal window detection.

use deal_engine::{
    find_peak_interval, query_peak_window, select_peak, Deal, PeakInterval, PeakWindow,
    Restaurant,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn deals(count: usize) -> Vec<Deal> {
    (0..count)
        .map(|i| Deal {
            object_id: Some(format!("deal-{}", i)),
            discount: Some("20".to_string()),
            dine_in: Some("true".to_string()),
            lightning: Some("false".to_string()),
            qty_left: Some("10".to_string()),
            ..Deal::default()
        })
        .collect()
}

fn restaurant(name: &str, open: &str, close: &str, deal_count: usize) -> Restaurant {
    Restaurant {
        object_id: Some(format!("id-{}", name)),
        name: Some(name.to_string()),
        address1: Some("123 Main St".to_string()),
        suburb: Some("Suburb".to_string()),
        open: Some(open.to_string()),
        close: Some(close.to_string()),
        deals: deals(deal_count),
        ..Restaurant::default()
    }
}

fn window(start: &str, end: &str) -> PeakWindow {
    PeakWindow {
        start: Some(start.to_string()),
        end: Some(end.to_string()),
    }
}

// ── Tie-breaking ────────────────────────────────────────────────────────────

#[test]
fn equal_peaks_pick_the_earliest() {
    let restaurants = vec![
        restaurant("R1", "11:00am", "1:00pm", 4),
        restaurant("R2", "5:00pm", "7:00pm", 4),
    ];

    assert_eq!(query_peak_window(&restaurants), window("11:00am", "1:00pm"));
}

#[test]
fn shared_start_peaks_only_where_both_overlap() {
    // Both open at noon; weight 6 only until 2pm.
    let restaurants = vec![
        restaurant("R1", "12:00pm", "2:00pm", 3),
        restaurant("R2", "12:00pm", "4:00pm", 3),
    ];

    assert_eq!(query_peak_window(&restaurants), window("12:00pm", "2:00pm"));
}

#[test]
fn select_peak_prefers_longest_on_equal_start() {
    let candidates = [
        PeakInterval {
            start: 720,
            end: 840,
            weight: 3,
        },
        PeakInterval {
            start: 720,
            end: 960,
            weight: 3,
        },
        PeakInterval {
            start: 1000,
            end: 1400,
            weight: 3,
        },
    ];

    let picked = select_peak(&candidates).unwrap();
    assert_eq!((picked.start, picked.end), (720, 960));
}

// ── Merging ─────────────────────────────────────────────────────────────────

#[test]
fn contiguous_equal_segments_merge_into_one_peak() {
    // 12-2pm: R1+R2 = 4, 2-4pm: R2+R3 = 4
    let restaurants = vec![
        restaurant("R1", "10:00am", "2:00pm", 2),
        restaurant("R2", "12:00pm", "4:00pm", 2),
        restaurant("R3", "2:00pm", "6:00pm", 2),
    ];

    assert_eq!(query_peak_window(&restaurants), window("12:00pm", "4:00pm"));
    assert_eq!(find_peak_interval(&restaurants).unwrap().weight, 4);
}

#[test]
fn complex_overlap_finds_highest_segment() {
    // 1pm-2pm: R2 (5) + R3 (4) + R4 (2) = 11
    let restaurants = vec![
        restaurant("R1", "9:00am", "11:00am", 3),
        restaurant("R2", "10:00am", "2:00pm", 5),
        restaurant("R3", "11:00am", "3:00pm", 4),
        restaurant("R4", "1:00pm", "5:00pm", 2),
    ];

    assert_eq!(query_peak_window(&restaurants), window("1:00pm", "2:00pm"));
    assert_eq!(find_peak_interval(&restaurants).unwrap().weight, 11);
}

#[test]
fn identical_hours_sum_to_full_overlap() {
    let restaurants = vec![
        restaurant("R1", "11:00am", "2:00pm", 2),
        restaurant("R2", "11:00am", "2:00pm", 3),
        restaurant("R3", "11:00am", "2:00pm", 4),
    ];

    let peak = find_peak_interval(&restaurants).unwrap();
    assert_eq!(peak.weight, 9);
    assert_eq!(query_peak_window(&restaurants), window("11:00am", "2:00pm"));
}

#[test]
fn back_to_back_windows_merge() {
    let restaurants = vec![
        restaurant("R1", "9:00am", "12:00pm", 2),
        restaurant("R2", "12:00pm", "3:00pm", 2),
    ];

    assert_eq!(query_peak_window(&restaurants), window("9:00am", "3:00pm"));
}

// ── Midnight wraparound ─────────────────────────────────────────────────────

#[test]
fn wrapping_window_combines_with_evening_window() {
    // 10pm-11pm: R1 (5) + R2 (3) = 8
    let restaurants = vec![
        restaurant("R1", "10:00pm", "2:00am", 5),
        restaurant("R2", "6:00pm", "11:00pm", 3),
    ];

    assert_eq!(query_peak_window(&restaurants), window("10:00pm", "11:00pm"));
    assert_eq!(find_peak_interval(&restaurants).unwrap().weight, 8);
}

#[test]
fn late_night_peak_lands_in_early_morning() {
    // 1am-3am: R1 (6) + R2 (3) = 9
    let restaurants = vec![
        restaurant("R1", "11:00pm", "3:00am", 6),
        restaurant("R2", "1:00am", "4:00am", 3),
    ];

    assert_eq!(query_peak_window(&restaurants), window("1:00am", "3:00am"));
}

#[test]
fn lone_wrapping_window_picks_the_after_midnight_segment() {
    let restaurants = vec![restaurant("R1", "10:00pm", "2:00am", 1)];

    assert_eq!(query_peak_window(&restaurants), window("12:00am", "2:00am"));
}

#[test]
fn evening_peak_inside_a_wrapping_window() {
    // 10pm-11pm: R1 (1) + R2 (1) + R3 (5) = 7
    let restaurants = vec![
        restaurant("R1", "8:00pm", "1:00am", 1),
        restaurant("R2", "10:00pm", "11:59pm", 1),
        restaurant("R3", "9:00pm", "11:00pm", 5),
    ];

    assert_eq!(query_peak_window(&restaurants), window("10:00pm", "11:00pm"));
}

#[test]
fn tie_across_midnight_prefers_the_after_midnight_segment() {
    // 11pm-midnight and midnight-12:30am both carry 4 deals; they are
    // separate day segments and the earlier start wins.
    let restaurants = vec![
        restaurant("R1", "10:00pm", "1:00am", 3),
        restaurant("R2", "11:00pm", "12:30am", 1),
    ];

    assert_eq!(query_peak_window(&restaurants), window("12:00am", "12:30am"));
}

// ── Skipped records and empty results ───────────────────────────────────────

#[test]
fn restaurants_without_deals_are_ignored() {
    let restaurants = vec![
        restaurant("R1", "11:00am", "2:00pm", 0),
        restaurant("R2", "12:00pm", "3:00pm", 5),
        restaurant("R3", "1:00pm", "4:00pm", 0),
    ];

    assert_eq!(query_peak_window(&restaurants), window("12:00pm", "3:00pm"));
}

#[test]
fn unparseable_hours_skip_only_that_restaurant() {
    let restaurants = vec![
        restaurant("R1", "invalid", "2:00pm", 3),
        restaurant("R2", "12:00pm", "4:00pm", 5),
        restaurant("R3", "9:00am", "25:00", 9),
    ];

    assert_eq!(query_peak_window(&restaurants), window("12:00pm", "4:00pm"));
}

#[test]
fn missing_hours_skip_only_that_restaurant() {
    let mut no_close = restaurant("R1", "9:00am", "5:00pm", 7);
    no_close.close = None;
    let restaurants = vec![no_close, restaurant("R2", "6:00pm", "8:00pm", 1)];

    assert_eq!(query_peak_window(&restaurants), window("6:00pm", "8:00pm"));
}

#[test]
fn empty_input_has_no_peak() {
    assert_eq!(query_peak_window(&[]), PeakWindow::default());
    assert_eq!(find_peak_interval(&[]), None);
}

#[test]
fn only_dealless_restaurants_have_no_peak() {
    let restaurants = vec![restaurant("R1", "9:00am", "5:00pm", 0)];
    assert_eq!(query_peak_window(&restaurants), PeakWindow::default());
}

#[test]
fn zero_length_window_contributes_nothing() {
    let restaurants = vec![restaurant("R1", "12:00pm", "12:00pm", 3)];
    assert_eq!(query_peak_window(&restaurants), PeakWindow::default());
}

#[test]
fn per_deal_bounds_do_not_narrow_the_peak() {
    let mut r = restaurant("R1", "9:00am", "5:00pm", 2);
    r.deals[0].start = Some("3:00pm".to_string());
    r.deals[0].end = Some("4:00pm".to_string());

    let peak = find_peak_interval(&[r]).unwrap();
    assert_eq!((peak.start, peak.end, peak.weight), (540, 1020, 2));
}

#[test]
fn repeated_queries_agree() {
    let restaurants = vec![
        restaurant("R1", "10:00pm", "2:00am", 5),
        restaurant("R2", "6:00pm", "11:00pm", 3),
        restaurant("R3", "11:00am", "3:00pm", 2),
    ];

    assert_eq!(query_peak_window(&restaurants), query_peak_window(&restaurants));
}

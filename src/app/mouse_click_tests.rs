//! Tests for mouse click handling

use super::handle_click;
use crate::layout::Region;
use crate::pages::PageFocus;
use crate::test_utils::test_helpers::{TEST_SUGGESTIONS, app_with_catalog, left_click, render_to_string};

#[test]
fn test_click_brand_mark_navigates_home_from_any_route() {
    for start in ["/", "/qa", "/qa/history", "/unknown"] {
        let mut app = app_with_catalog(TEST_SUGGESTIONS, start);
        handle_click(&mut app, Some(Region::BrandMark), left_click(2, 1));
        assert!(app.router.current().is_root(), "from {}", start);
    }
}

#[test]
fn test_click_nav_entries_navigate() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/");

    handle_click(&mut app, Some(Region::NavEntry(1)), left_click(30, 1));
    assert_eq!(app.router.current().as_str(), "/qa");

    handle_click(&mut app, Some(Region::NavEntry(0)), left_click(18, 1));
    assert!(app.router.current().is_root());
}

#[test]
fn test_click_unknown_nav_index_does_nothing() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/qa");
    handle_click(&mut app, Some(Region::NavEntry(7)), left_click(0, 0));
    assert_eq!(app.router.current().as_str(), "/qa");
}

#[test]
fn test_click_partner_mark_does_nothing() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/qa");
    handle_click(&mut app, Some(Region::PartnerMark), left_click(70, 1));
    assert_eq!(app.router.current().as_str(), "/qa");
    assert!(!app.router.can_go_back());
}

#[test]
fn test_click_input_field_takes_focus() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/");
    app.chat.toggle_focus();
    assert_eq!(app.chat.effective_focus(), PageFocus::Suggestions);

    handle_click(&mut app, Some(Region::InputField), left_click(5, 20));

    assert_eq!(app.chat.effective_focus(), PageFocus::Input);
}

#[test]
fn test_click_suggestion_row_reports_selection() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/");
    render_to_string(&mut app, 80, 24);
    let rows = app.regions.suggestions.unwrap();

    handle_click(&mut app, Some(Region::Suggestions), left_click(rows.x + 3, rows.y + 1));
    app.process_selections();

    assert_eq!(app.chat.transcript.entries()[0].query, "Show company info");
}

#[test]
fn test_click_suggestion_border_does_nothing() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/");
    render_to_string(&mut app, 80, 24);
    let rows = app.regions.suggestions.unwrap();

    handle_click(&mut app, Some(Region::Suggestions), left_click(rows.x, rows.y));
    app.process_selections();

    assert!(app.chat.transcript.is_empty());
}

#[test]
fn test_click_none_region_does_nothing() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/qa");
    handle_click(&mut app, None, left_click(0, 0));
    assert_eq!(app.router.current().as_str(), "/qa");
}

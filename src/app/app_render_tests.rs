//! Rendering tests for the whole application frame

use proptest::prelude::*;

use crate::test_utils::test_helpers::{
    TEST_SUGGESTIONS, app_with_catalog, render_to_string, test_app,
};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 24;

#[test]
fn test_default_app_renders_builtin_suggestions_in_order() {
    let mut app = test_app();
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    let first = output.find("1. Tampilkan informasi PT. Pertamina").unwrap();
    let second = output.find("2. Tampilkan alamat PT. Pertamina").unwrap();
    let third = output.find("3. Tampilkan visi dan misi PT. Pertamina").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_header_is_rendered_on_every_route() {
    for route in ["/", "/qa", "/missing"] {
        let mut app = app_with_catalog(TEST_SUGGESTIONS, route);
        let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

        assert!(output.contains("Telkomsigma"), "brand on {}", route);
        assert!(output.contains("ChatGPT"), "chat entry on {}", route);
        assert!(output.contains("Internal Data"), "qa entry on {}", route);
        assert!(output.contains("Azure OpenAI"), "partner on {}", route);
        assert_eq!(app.regions.nav_entries.len(), 2);
    }
}

#[test]
fn test_qa_route_renders_qa_page() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/qa");
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Internal Data Q&A"));
    assert!(output.contains("1. Show company info"));
}

#[test]
fn test_unknown_route_renders_not_found() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/missing");
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("No page at /missing"));
    assert_eq!(app.regions.suggestions, None);
    assert_eq!(app.regions.input_field, None);
}

#[test]
fn test_help_popup_renders_and_records_region() {
    let mut app = test_app();
    app.help.visible = true;

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Keyboard Shortcuts"));
    assert!(app.regions.help_popup.is_some());

    app.help.visible = false;
    render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert_eq!(app.regions.help_popup, None);
}

#[test]
fn test_help_line_follows_focus() {
    let mut app = test_app();
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Enter: Submit"));

    app.chat.toggle_focus();
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("1-9: Ask by number"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = test_app();
    app.help.visible = true;
    render_to_string(&mut app, 10, 4);
}

#[test]
fn test_submissions_merge_both_pages_in_order() {
    let mut app = app_with_catalog(TEST_SUGGESTIONS, "/");
    app.chat.set_query("first");
    app.chat.submit();
    app.qa.set_query("second");
    app.qa.submit();

    let queries: Vec<&str> = app.submissions().iter().map(|s| s.query.as_str()).collect();
    insta::assert_debug_snapshot!(queries, @r###"
    [
        "first",
        "second",
    ]
    "###);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_render_is_idempotent(route in prop::sample::select(vec!["/", "/qa", "/x"])) {
        let mut app = app_with_catalog(TEST_SUGGESTIONS, route);

        let first = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
        let regions = app.regions.clone();
        let second = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

        prop_assert_eq!(first, second);
        prop_assert_eq!(regions, app.regions.clone());
    }
}

//! Tests for the suggestion list

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::suggestions::{SelectionSender, Suggestion};

type Recorded = Rc<RefCell<Vec<String>>>;

fn recording_list(texts: &[(&str, &str)]) -> (SuggestionList<impl FnMut(&str)>, Recorded) {
    let catalog = SuggestionCatalog::new(
        texts
            .iter()
            .map(|(text, value)| Suggestion::new(*text, *value))
            .collect(),
    );
    let calls: Recorded = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let list = SuggestionList::new(Rc::new(catalog), move |value: &str| {
        sink.borrow_mut().push(value.to_string())
    });
    (list, calls)
}

fn render_list<H: SelectionHandler>(
    list: &mut SuggestionList<H>,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            list.render(f, area, true)
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_renders_items_in_catalog_order() {
    let (mut list, _) = recording_list(&[
        ("Show company info", "Show company info"),
        ("Show address", "Show address"),
    ]);

    let output = render_list(&mut list, 40, 6);

    let first = output.find("1. Show company info").unwrap();
    let second = output.find("2. Show address").unwrap();
    assert!(first < second);
}

#[test]
fn test_clicking_second_item_reports_its_value() {
    let (mut list, calls) = recording_list(&[
        ("Show company info", "Show company info"),
        ("Show address", "Show address"),
    ]);
    render_list(&mut list, 40, 6);

    // Border occupies row 0, so the second item sits on row 2
    let index = list.item_at(5, 2).unwrap();
    assert_eq!(index, 1);
    assert!(list.activate(index));

    assert_eq!(*calls.borrow(), vec!["Show address".to_string()]);
}

#[test]
fn test_activation_reports_value_not_display_text() {
    let (mut list, calls) = recording_list(&[("Address", "Show the registered address")]);

    list.activate(0);

    assert_eq!(*calls.borrow(), vec!["Show the registered address".to_string()]);
}

#[test]
fn test_each_activation_calls_handler_once() {
    let (mut list, calls) = recording_list(&[("a", "a"), ("b", "b")]);

    list.activate(1);
    list.activate(1);
    list.activate(0);

    assert_eq!(*calls.borrow(), vec!["b", "b", "a"]);
}

#[test]
fn test_out_of_range_activation_does_nothing() {
    let (mut list, calls) = recording_list(&[("a", "a")]);

    assert!(!list.activate(1));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_empty_strings_are_rendered_and_reported() {
    let (mut list, calls) = recording_list(&[("", "")]);

    let output = render_list(&mut list, 20, 4);
    assert!(output.contains("1. "));

    list.activate(0);
    assert_eq!(*calls.borrow(), vec![String::new()]);
}

#[test]
fn test_cursor_wraps_around() {
    let (mut list, calls) = recording_list(&[("a", "a"), ("b", "b"), ("c", "c")]);

    list.select_previous();
    assert_eq!(list.cursor(), 2);
    list.select_next();
    assert_eq!(list.cursor(), 0);
    list.select_next();
    list.activate_highlighted();

    assert_eq!(*calls.borrow(), vec!["b"]);
}

#[test]
fn test_cursor_movement_on_empty_list_is_noop() {
    let (mut list, calls) = recording_list(&[]);

    list.select_next();
    list.select_previous();

    assert_eq!(list.cursor(), 0);
    assert!(!list.activate_highlighted());
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_click_outside_items_hits_nothing() {
    let (mut list, _) = recording_list(&[("a", "a")]);
    render_list(&mut list, 20, 6);

    assert_eq!(list.item_at(5, 0), None);
    assert_eq!(list.item_at(5, 3), None);
}

#[test]
fn test_items_clipped_by_small_area_are_not_clickable() {
    let (mut list, _) = recording_list(&[("a", "a"), ("b", "b"), ("c", "c")]);
    render_list(&mut list, 20, 3);

    assert_eq!(list.item_at(2, 1), Some(0));
    assert_eq!(list.item_at(2, 2), None);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_highlight_scrolls_into_view_in_long_catalog() {
    let names: Vec<String> = ('a'..='l').map(|c| format!("item-{}", c)).collect();
    let pairs: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), n.as_str())).collect();
    let (mut list, calls) = recording_list(&pairs);

    // Nine inner rows for twelve entries
    let output = render_list(&mut list, 30, 11);
    assert!(output.contains("item-a"));
    assert!(!output.contains("item-k"));

    for _ in 0..10 {
        list.select_next();
    }
    let output = render_list(&mut list, 30, 11);

    assert_eq!(list.cursor(), 10);
    assert_eq!(list.offset(), 2);
    assert!(output.contains("item-k"));
    assert!(!output.contains("item-a"));
    assert_eq!(list.item_at(2, 1), Some(2));
    assert_eq!(list.item_at(2, 9), Some(10));

    assert!(list.activate_highlighted());
    assert_eq!(*calls.borrow(), vec!["item-k"]);

    list.select_next();
    list.select_next();
    let output = render_list(&mut list, 30, 11);
    assert_eq!(list.offset(), 0);
    assert!(output.contains("1. item-a"));
}

#[test]
fn test_sender_handler_forwards_to_receiver() {
    let (sender, receiver) = SelectionSender::channel();
    let mut list = SuggestionList::new(Rc::new(SuggestionCatalog::builtin()), sender);

    list.activate(2);

    assert_eq!(
        receiver.try_recv().unwrap(),
        "Tampilkan visi dan misi PT. Pertamina"
    );
    assert!(receiver.try_recv().is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_renders_exactly_catalog_size_items(texts in prop::collection::vec("[a-z]{3,10}", 0..8)) {
        let pairs: Vec<(&str, &str)> = texts.iter().map(|t| (t.as_str(), t.as_str())).collect();
        let (mut list, _) = recording_list(&pairs);

        let output = render_list(&mut list, 40, 12);

        prop_assert_eq!(list.items().count(), texts.len());
        let clickable = (0..12u16).filter(|row| list.item_at(2, *row).is_some()).count();
        prop_assert_eq!(clickable, texts.len());

        let mut last = 0;
        for (i, text) in texts.iter().enumerate() {
            let needle = format!("{}. {}", i + 1, text);
            let found = output[last..].find(&needle);
            prop_assert!(found.is_some(), "missing {} in order", needle);
            last += found.unwrap() + needle.len();
        }
    }

    #[test]
    fn prop_render_is_idempotent(texts in prop::collection::vec("[a-z ]{1,12}", 0..6)) {
        let pairs: Vec<(&str, &str)> = texts.iter().map(|t| (t.as_str(), t.as_str())).collect();
        let (mut list, _) = recording_list(&pairs);

        let first = render_list(&mut list, 40, 10);
        let second = render_list(&mut list, 40, 10);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_activation_reports_that_entry(
        texts in prop::collection::vec("[a-z]{1,6}", 1..8),
        pick in 0usize..8,
    ) {
        let index = pick % texts.len();
        let pairs: Vec<(String, String)> = texts
            .iter()
            .map(|t| (t.clone(), format!("value-{}", t)))
            .collect();
        let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        let (mut list, calls) = recording_list(&borrowed);

        list.activate(index);

        prop_assert_eq!(calls.borrow().clone(), vec![pairs[index].1.clone()]);
    }
}

//! Mouse click handling
//!
//! Routes left clicks to the header marks, the navigation menu, the
//! suggestion rows and the input field.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;
use crate::pages::PageFocus;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::BrandMark) => app.activate_brand_mark(),
        Some(Region::NavEntry(index)) => app.activate_nav_entry(index),
        Some(Region::Suggestions) => click_suggestions(app, mouse),
        Some(Region::InputField) => click_input_field(app),
        // Decorative or overlay regions: no click behavior
        Some(Region::PartnerMark | Region::HelpPopup | Region::Transcript) | None => {}
    }
}

fn click_suggestions(app: &mut App, mouse: MouseEvent) {
    let Some(page) = app.page_mut() else {
        return;
    };
    if let Some(index) = page.suggestions.item_at(mouse.column, mouse.row) {
        page.suggestions.activate(index);
    }
}

fn click_input_field(app: &mut App) {
    if let Some(page) = app.page_mut() {
        page.focus = PageFocus::Input;
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;

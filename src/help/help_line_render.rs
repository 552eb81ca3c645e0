//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;
use crate::pages::PageFocus;

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.page().map(|page| page.effective_focus()) {
        Some(PageFocus::Suggestions) => {
            " F1: Help | ↑/↓: Move | Enter: Ask | 1-9: Ask by number | Tab/Esc: Back to query"
        }
        Some(PageFocus::Input) => {
            " F1: Help | Enter: Submit | Tab: Suggestions | F2/F3: Switch mode | Ctrl+C: Quit"
        }
        None => " F1: Help | Ctrl+G: Home | Alt+Left: Back | Ctrl+C: Quit",
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}

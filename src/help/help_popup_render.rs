//! Help popup rendering
//!
//! This module handles rendering of the help popup modal with keyboard shortcuts.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HELP_ENTRIES, HELP_FOOTER};
use crate::widgets::popup;

// Help popup display constants
pub const HELP_POPUP_WIDTH: u16 = 60;
pub const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();

    // Don't render if terminal is too small
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    let content_height = HELP_ENTRIES.len() as u16;
    let popup_area = popup::centered_popup(
        frame_area,
        HELP_POPUP_WIDTH,
        content_height + HELP_POPUP_PADDING,
    );

    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    for (key, desc) in HELP_ENTRIES {
        if key.is_empty() && desc.is_empty() {
            lines.push(Line::from(""));
        } else if key.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    *desc,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            let key_span = Span::styled(
                format!("  {:<15}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
            let desc_span = Span::styled(*desc, Style::default().fg(Color::White));
            lines.push(Line::from(vec![key_span, desc_span]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(HELP_FOOTER, Style::default().fg(Color::DarkGray)).centered());

    let popup = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keyboard Shortcuts ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(popup, popup_area);
    app.regions.help_popup = Some(popup_area);
}

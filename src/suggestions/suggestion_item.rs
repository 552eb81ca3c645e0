use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::catalog::Suggestion;
use super::selection::SelectionHandler;

/// Digit shortcuts cover the first nine items
pub const MAX_NUMBERED_ITEMS: usize = 9;

/// One selectable row of a suggestion list
///
/// Stateless view over a catalog entry; `position` is the entry's index
/// in the catalog and doubles as its identity.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionItem<'a> {
    suggestion: &'a Suggestion,
    position: usize,
    highlighted: bool,
}

impl<'a> SuggestionItem<'a> {
    pub fn new(suggestion: &'a Suggestion, position: usize, highlighted: bool) -> Self {
        Self {
            suggestion,
            position,
            highlighted,
        }
    }

    pub fn display_text(&self) -> &'a str {
        self.suggestion.display_text()
    }

    /// Report this item's value to `handler`
    pub fn activate<H>(&self, handler: &mut H)
    where
        H: SelectionHandler + ?Sized,
    {
        handler.on_select(self.suggestion.value());
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(2);

        let mut number_style = Style::default().fg(Color::DarkGray);
        let mut text_style = Style::default().fg(Color::Cyan);
        if self.highlighted {
            number_style = number_style.bg(Color::DarkGray).fg(Color::Black);
            text_style = text_style.bg(Color::DarkGray);
        }

        let prefix = if self.position < MAX_NUMBERED_ITEMS {
            format!("{}. ", self.position + 1)
        } else {
            "   ".to_string()
        };
        spans.push(Span::styled(prefix, number_style));
        spans.push(Span::styled(self.display_text().to_string(), text_style));

        Line::from(spans)
    }
}

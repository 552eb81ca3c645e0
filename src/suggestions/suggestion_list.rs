//! Suggestion list widget
//!
//! Renders every catalog entry, in catalog order, as one row. Rows are
//! recorded during render so a mouse click can be mapped back to the
//! catalog position it landed on. When the catalog is taller than the
//! area, the rows scroll so the highlighted item stays in view.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::catalog::SuggestionCatalog;
use super::selection::SelectionHandler;
use super::suggestion_item::SuggestionItem;

pub struct SuggestionList<H> {
    catalog: Rc<SuggestionCatalog>,
    handler: H,
    cursor: usize,
    // Catalog position of the first visible row
    offset: usize,
    item_rows: Vec<Rect>,
}

impl<H: SelectionHandler> SuggestionList<H> {
    pub fn new(catalog: Rc<SuggestionCatalog>, handler: H) -> Self {
        Self {
            catalog,
            handler,
            cursor: 0,
            offset: 0,
            item_rows: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &SuggestionCatalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Index of the keyboard-highlighted item
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Catalog position of the first row shown by the last render
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn select_next(&mut self) {
        if !self.is_empty() {
            self.cursor = (self.cursor + 1) % self.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.is_empty() {
            self.cursor = (self.cursor + self.len() - 1) % self.len();
        }
    }

    /// Items in catalog order
    pub fn items(&self) -> impl Iterator<Item = SuggestionItem<'_>> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(i, suggestion)| SuggestionItem::new(suggestion, i, i == self.cursor))
    }

    /// Activate the item at catalog position `index`
    ///
    /// Returns false (and calls nothing) for an out-of-range index.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(suggestion) = self.catalog.get(index) else {
            return false;
        };
        log::debug!("Suggestion {} activated", index + 1);
        self.cursor = index;
        SuggestionItem::new(suggestion, index, true).activate(&mut self.handler);
        true
    }

    pub fn activate_highlighted(&mut self) -> bool {
        self.activate(self.cursor)
    }

    /// Catalog position of the item rendered at the given cell
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        self.item_rows
            .iter()
            .position(|rect| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|visible| self.offset + visible)
    }

    fn scroll_to_cursor(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            self.offset = 0;
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + visible_rows {
            self.offset = self.cursor + 1 - visible_rows;
        }
        self.offset = self.offset.min(self.len().saturating_sub(visible_rows));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);

        self.scroll_to_cursor(usize::from(inner.height));

        let lines: Vec<Line> = self
            .items()
            .skip(self.offset)
            .map(|item| item.line())
            .collect();

        self.item_rows = (0..lines.len())
            .map_while(|i| {
                let row = inner.y.checked_add(u16::try_from(i).ok()?)?;
                (row < inner.bottom()).then_some(Rect {
                    x: inner.x,
                    y: row,
                    width: inner.width,
                    height: 1,
                })
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
#[path = "suggestion_list_tests.rs"]
mod suggestion_list_tests;

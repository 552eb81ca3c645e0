//! Navigation shell
//!
//! Persistent header (brand mark, menu, partner mark) with the routed page
//! rendered underneath. The shell only reads the router; it never decides
//! which page is shown or which entry is active on its own.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::nav_entry::NAV_ENTRIES;
use super::router::Router;

pub const HEADER_HEIGHT: u16 = 3;
const ENTRY_GAP: u16 = 2;

/// A header logo: a text label with alternate text shown when the label is
/// blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub text: String,
    pub alt: String,
}

impl Mark {
    pub fn new(text: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alt: alt.into(),
        }
    }

    pub fn label(&self) -> &str {
        if self.text.trim().is_empty() {
            &self.alt
        } else {
            &self.text
        }
    }
}

/// Screen areas produced by one shell render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellLayout {
    pub brand: Rect,
    pub entries: [Rect; NAV_ENTRIES.len()],
    pub partner: Rect,
    pub content: Rect,
}

pub struct NavigationShell {
    brand: Mark,
    partner: Mark,
}

impl NavigationShell {
    pub fn new(brand: Mark, partner: Mark) -> Self {
        Self { brand, partner }
    }

    pub fn entry_style(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    /// Render the header and hand the remaining area to `outlet`
    pub fn render<F>(&self, frame: &mut Frame, area: Rect, router: &Router, outlet: F) -> ShellLayout
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let [header_area, content] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(header_area);
        frame.render_widget(block, header_area);

        let brand_label = self.brand.label();
        let brand = clip(
            Rect {
                x: inner.x,
                y: inner.y,
                width: padded_width(brand_label),
                height: inner.height.min(1),
            },
            inner,
        );
        frame.render_widget(
            Paragraph::new(format!(" {} ", brand_label))
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            brand,
        );

        let mut entries = [Rect::default(); NAV_ENTRIES.len()];
        let mut x = brand.right().saturating_add(ENTRY_GAP);
        for (slot, entry) in entries.iter_mut().zip(NAV_ENTRIES.iter()) {
            let rect = clip(
                Rect {
                    x,
                    y: inner.y,
                    width: padded_width(entry.label),
                    height: inner.height.min(1),
                },
                inner,
            );
            let active = router.is_active(&entry.route());
            frame.render_widget(
                Paragraph::new(format!(" {} ", entry.label)).style(Self::entry_style(active)),
                rect,
            );
            *slot = rect;
            x = x.saturating_add(padded_width(entry.label) + ENTRY_GAP);
        }

        let partner_label = self.partner.label();
        let partner_width = padded_width(partner_label);
        let partner = clip(
            Rect {
                x: inner.right().saturating_sub(partner_width).max(x),
                y: inner.y,
                width: partner_width,
                height: inner.height.min(1),
            },
            inner,
        );
        frame.render_widget(
            Paragraph::new(format!(" {} ", partner_label)).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            partner,
        );

        outlet(frame, content);

        ShellLayout {
            brand,
            entries,
            partner,
            content,
        }
    }
}

fn padded_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX).saturating_add(2)
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    let clipped = rect.intersection(bounds);
    if clipped.width == 0 || clipped.height == 0 {
        Rect::default()
    } else {
        clipped
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod shell_tests;

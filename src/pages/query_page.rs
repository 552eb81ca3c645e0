use std::rc::Rc;
use std::sync::mpsc::Receiver;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tui_textarea::TextArea;

use super::PageKind;
use super::transcript::{Submission, Transcript};
use crate::layout::LayoutRegions;
use crate::navigation::Route;
use crate::suggestions::{SelectionSender, SuggestionCatalog, SuggestionList};

const INPUT_HEIGHT: u16 = 3;
// Suggestions never take more than this many rows (borders included)
const MAX_SUGGESTIONS_HEIGHT: u16 = 11;

/// Which part of a page receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFocus {
    #[default]
    Input,
    Suggestions,
}

pub struct QueryPage {
    kind: PageKind,
    route: Route,
    pub input: TextArea<'static>,
    pub suggestions: SuggestionList<SelectionSender>,
    selections: Receiver<String>,
    pub transcript: Transcript,
    pub focus: PageFocus,
}

impl QueryPage {
    pub fn new(kind: PageKind, route: Route, catalog: Rc<SuggestionCatalog>) -> Self {
        let (sender, selections) = SelectionSender::channel();
        Self {
            kind,
            route,
            input: new_input(kind),
            suggestions: SuggestionList::new(catalog, sender),
            selections,
            transcript: Transcript::new(),
            focus: PageFocus::Input,
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn query(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    pub fn set_query(&mut self, text: &str) {
        self.input = new_input(self.kind);
        self.input.insert_str(text);
    }

    pub fn suggestions_visible(&self) -> bool {
        self.transcript.is_empty() && !self.suggestions.is_empty()
    }

    /// Effective focus: suggestions cannot hold focus while hidden
    pub fn effective_focus(&self) -> PageFocus {
        if self.suggestions_visible() {
            self.focus
        } else {
            PageFocus::Input
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.effective_focus() {
            PageFocus::Input if self.suggestions_visible() => PageFocus::Suggestions,
            _ => PageFocus::Input,
        };
    }

    /// Record the current input as a submission and clear the input
    ///
    /// Blank input is ignored.
    pub fn submit(&mut self) -> Option<&Submission> {
        let query = self.query().to_string();
        self.submit_text(&query)
    }

    fn submit_text(&mut self, text: &str) -> Option<&Submission> {
        let query = text.trim().to_string();
        if query.is_empty() {
            return None;
        }

        log::info!("Submitted query on {}: {}", self.route, query);
        self.transcript
            .push(Submission::new(self.kind, self.route.clone(), query));
        self.input = new_input(self.kind);
        self.focus = PageFocus::Input;
        self.transcript.entries().last()
    }

    /// Apply every selection the suggestion list has reported
    ///
    /// Each selected value replaces the input and is submitted at once. The
    /// value is submitted whole; the single-line input would drop anything
    /// after a line break.
    /// Returns how many selections were applied.
    pub fn process_selections(&mut self) -> usize {
        let values: Vec<String> = self.selections.try_iter().collect();
        for value in &values {
            self.submit_text(value);
        }
        values.len()
    }

    pub fn clear_transcript(&mut self) {
        log::debug!("Cleared transcript on {}", self.route);
        self.transcript.clear();
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, regions: &mut LayoutRegions) {
        let show_suggestions = self.suggestions_visible();
        let focus = self.effective_focus();

        let (transcript_area, suggestions_area, input_area) = if show_suggestions {
            let wanted = u16::try_from(self.suggestions.len())
                .unwrap_or(u16::MAX)
                .saturating_add(2)
                .min(MAX_SUGGESTIONS_HEIGHT);
            let [transcript, suggestions, input] = Layout::vertical([
                Constraint::Min(3),
                Constraint::Length(wanted),
                Constraint::Length(INPUT_HEIGHT),
            ])
            .areas(area);
            (transcript, Some(suggestions), input)
        } else {
            let [transcript, input] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(INPUT_HEIGHT)])
                    .areas(area);
            (transcript, None, input)
        };

        self.render_transcript(frame, transcript_area);
        regions.transcript = Some(transcript_area);

        if let Some(suggestions_area) = suggestions_area {
            self.suggestions
                .render(frame, suggestions_area, focus == PageFocus::Suggestions);
        }
        regions.suggestions = suggestions_area;

        let border_color = if focus == PageFocus::Input {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Query ")
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(&self.input, input_area);
        regions.input_field = Some(input_area);
    }

    fn render_transcript(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.kind.title())
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = if self.transcript.is_empty() {
            vec![
                Line::from(""),
                Line::styled(
                    self.kind.intro(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )
                .centered(),
                Line::styled(
                    "Ask anything or try an example",
                    Style::default().fg(Color::DarkGray),
                )
                .centered(),
            ]
        } else {
            self.transcript.lines()
        };

        let visible_height = area.height.saturating_sub(2);
        self.transcript
            .scroll
            .update_bounds(lines.len() as u32, visible_height);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.transcript.scroll.offset, 0));
        frame.render_widget(paragraph, area);
    }
}

fn new_input(kind: PageKind) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(kind.placeholder());
    textarea.set_cursor_line_style(Style::default());
    textarea
}

#[cfg(test)]
#[path = "query_page_tests.rs"]
mod query_page_tests;

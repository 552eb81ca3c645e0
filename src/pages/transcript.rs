use chrono::{DateTime, Local};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use serde::Serialize;

use super::PageKind;
use crate::navigation::Route;
use crate::scroll::ScrollState;

/// One submitted query
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub mode: PageKind,
    pub route: Route,
    pub query: String,
    pub submitted_at: DateTime<Local>,
}

#[derive(Serialize)]
struct SubmissionRecord<'a> {
    route: &'a str,
    mode: PageKind,
    query: &'a str,
    submitted_at: String,
}

impl Submission {
    pub fn new(mode: PageKind, route: Route, query: impl Into<String>) -> Self {
        Self {
            mode,
            route,
            query: query.into(),
            submitted_at: Local::now(),
        }
    }

    /// Serialize as a single JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&SubmissionRecord {
            route: self.route.as_str(),
            mode: self.mode,
            query: &self.query,
            submitted_at: self.submitted_at.to_rfc3339(),
        })
    }

    pub fn line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("[{}] ", self.submitted_at.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("› ", Style::default().fg(Color::Yellow)),
            Span::raw(self.query.clone()),
        ])
    }
}

/// Queries submitted on one page, oldest first
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Submission>,
    pub scroll: ScrollState,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, submission: Submission) {
        self.entries.push(submission);
        self.scroll.jump_to_bottom();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll.reset();
    }

    pub fn entries(&self) -> &[Submission] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.entries.iter().map(Submission::line).collect()
    }
}

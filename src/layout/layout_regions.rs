use ratatui::layout::Rect;

use crate::navigation::shell::ShellLayout;

/// Clickable component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    BrandMark,
    NavEntry(usize),
    PartnerMark,
    Transcript,
    Suggestions,
    InputField,
    HelpPopup,
}

/// Where each component was drawn in the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub brand_mark: Option<Rect>,
    pub nav_entries: Vec<Rect>,
    pub partner_mark: Option<Rect>,
    pub transcript: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub input_field: Option<Rect>,
    pub help_popup: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn record_shell(&mut self, shell: &ShellLayout) {
        self.brand_mark = non_empty(shell.brand);
        self.nav_entries = shell.entries.to_vec();
        self.partner_mark = non_empty(shell.partner);
    }
}

fn non_empty(rect: Rect) -> Option<Rect> {
    (rect.width > 0 && rect.height > 0).then_some(rect)
}

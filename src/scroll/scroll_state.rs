/// Vertical scroll position over content taller than its viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
    /// Keep the view pinned to the last line as content grows
    pub follow: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
            follow: true,
        }
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        if self.follow {
            self.offset = self.max_offset;
        } else {
            self.offset = self.offset.min(self.max_offset);
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
        self.follow = self.offset == self.max_offset;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
        self.follow = self.offset == self.max_offset;
    }

    pub fn page_down(&mut self) {
        let half_page = (self.viewport_height / 2).max(1);
        self.scroll_down(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = (self.viewport_height / 2).max(1);
        self.scroll_up(half_page);
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
        self.follow = true;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

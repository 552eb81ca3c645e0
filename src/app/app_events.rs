use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tui_textarea::Input;

use super::app_state::App;
use super::mouse_click::handle_click;
use crate::layout::region_at;
use crate::pages::{PageFocus, QueryPage};

const SCROLL_LINES: u16 = 3;

impl App {
    /// Handle one terminal event, then apply any resulting selection
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
        self.process_selections();
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        let Some(page) = self.page_mut() else {
            return;
        };
        match page.effective_focus() {
            PageFocus::Input => handle_input_key(page, key),
            PageFocus::Suggestions => handle_suggestions_key(page, key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup swallows everything while open
        if self.help.visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
                self.help.visible = false;
            }
            return true;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::F(1) => {
                self.help.toggle();
            }
            KeyCode::F(2) => self.activate_nav_entry(0),
            KeyCode::F(3) => self.activate_nav_entry(1),
            KeyCode::Char('1') if alt => self.activate_nav_entry(0),
            KeyCode::Char('2') if alt => self.activate_nav_entry(1),
            KeyCode::Char('g') if ctrl => self.activate_brand_mark(),
            KeyCode::Left if alt => {
                self.router.back();
            }
            KeyCode::Char('l') if ctrl => {
                if let Some(page) = self.page_mut() {
                    page.clear_transcript();
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(page) = self.page_mut() {
                    page.toggle_focus();
                }
            }
            KeyCode::PageUp => {
                if let Some(page) = self.page_mut() {
                    page.transcript.scroll.page_up();
                }
            }
            KeyCode::PageDown => {
                if let Some(page) = self.page_mut() {
                    page.transcript.scroll.page_down();
                }
            }
            _ => return false,
        }
        true
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let region = region_at(&self.regions, mouse.column, mouse.row);
                handle_click(self, region, mouse);
            }
            MouseEventKind::ScrollUp => {
                if let Some(page) = self.page_mut() {
                    page.transcript.scroll.scroll_up(SCROLL_LINES);
                }
            }
            MouseEventKind::ScrollDown => {
                if let Some(page) = self.page_mut() {
                    page.transcript.scroll.scroll_down(SCROLL_LINES);
                }
            }
            _ => {}
        }
    }
}

fn handle_input_key(page: &mut QueryPage, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            page.submit();
        }
        // Single-line input: nothing else to do with Esc
        KeyCode::Esc => {}
        _ => {
            page.input.input(Input::from(key));
        }
    }
}

fn handle_suggestions_key(page: &mut QueryPage, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => page.suggestions.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => page.suggestions.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            page.suggestions.activate_highlighted();
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let index = (digit as usize) - ('1' as usize);
            page.suggestions.activate(index);
        }
        KeyCode::Esc => page.focus = PageFocus::Input,
        _ => {}
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

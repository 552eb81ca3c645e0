use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::help::{help_line_render, help_popup_render};
use crate::navigation::Route;
use crate::pages::PageKind;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        let Self {
            router,
            shell,
            chat,
            qa,
            regions,
            ..
        } = self;

        let page = match router.resolve() {
            Some(PageKind::Chat) => Some(chat),
            Some(PageKind::InternalData) => Some(qa),
            None => None,
        };
        let current = router.current();

        let shell_layout = shell.render(frame, main_area, router, |frame, content| match page {
            Some(page) => page.render(frame, content, regions),
            None => render_not_found(frame, content, current),
        });
        regions.record_shell(&shell_layout);

        help_line_render::render_line(self, frame, help_area);

        if self.help.visible {
            help_popup_render::render_popup(self, frame);
        }
    }
}

fn render_not_found(frame: &mut Frame, area: Rect, route: &Route) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("No page at {}", route),
            Style::default().fg(Color::Yellow),
        )
        .centered(),
        Line::styled(
            "Ctrl+G: Home | Alt+Left: Back",
            Style::default().fg(Color::DarkGray),
        )
        .centered(),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Not Found ")
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notifications;
use crate::theme;
use crate::widgets::popup;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        // Paint: toasts inserted since the last frame start their entrance now
        self.center.frame();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::demo::BACKGROUND)),
            frame.area(),
        );

        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let body_area = popup::inset_rect(layout[0], 2, 1);

        let mut lines = vec![
            Line::from(Span::styled("toastkit", theme::demo::HEADING)),
            Line::from(Span::styled(
                format!("{} active", self.center.len()),
                Style::default().fg(theme::demo::BODY),
            )),
            Line::default(),
        ];
        for text in &self.announcements {
            lines.push(Line::from(Span::styled(
                format!("\u{00bb} {}", text),
                Style::default().fg(theme::demo::ANNOUNCEMENT),
            )));
        }
        frame.render_widget(Paragraph::new(lines), body_area);

        render_help_line(frame, layout[1]);

        self.toast_regions = render_notifications(frame, &self.center);
    }
}

fn render_help_line(frame: &mut Frame, area: ratatui::layout::Rect) {
    let hints: Vec<(&str, &str)> = hints![
        "s" => "Success",
        "e" => "Error",
        "i" => "Info",
        "w" => "Warning",
        "p" => "Pinned",
        "x" => "Unknown",
        "d" => "Dismiss",
        "D" => "Dismiss all",
        "q" => "Quit",
    ];

    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

//! Notification rendering
//!
//! Draws the center's toasts as a stack of cards in the top-right corner of a
//! terminal frame, in the order they were shown.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::handle::Handle;
use super::notification_center::{NotificationCenter, Phase};
use crate::theme;
use crate::widgets::popup;

const MARGIN: u16 = 2;
const MIN_WIDTH: u16 = 12;
const MAX_WIDTH: u16 = 48;
/// Borders, inner padding, and the close glyph with its gap
const CHROME_WIDTH: u16 = 6;

/// Screen placement of one drawn toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastRegion {
    pub handle: Handle,
    pub area: Rect,
    /// Cell holding the close glyph
    pub close: Rect,
}

/// Render the toast stack over whatever is already in the frame.
///
/// Toasts still waiting for their entrance frame are transparent and skipped;
/// leaving toasts are drawn dimmed. Stops early when the next card would not
/// fit. Returns where each card landed, for mouse hit-testing.
pub fn render_notifications(frame: &mut Frame, center: &NotificationCenter) -> Vec<ToastRegion> {
    let frame_area = frame.area();
    let mut regions = Vec::new();
    let mut y = frame_area.y + MARGIN;

    for (handle, toast) in center.toasts() {
        if toast.phase() == Phase::Entering {
            continue;
        }
        let colors = theme::notification::colors(toast.kind());

        let title_line = Line::from(vec![
            Span::styled(format!("{} ", colors.icon), Style::default().fg(colors.border)),
            Span::styled(
                toast.title().to_string(),
                theme::notification::TITLE.fg(colors.fg),
            ),
        ]);
        let message_line = (!toast.message().is_empty()).then(|| {
            Line::from(Span::styled(
                toast.message().to_string(),
                Style::default().fg(theme::notification::MESSAGE),
            ))
        });

        let content_width = title_line
            .width()
            .max(message_line.as_ref().map_or(0, Line::width));
        let width = u16::try_from(content_width)
            .unwrap_or(u16::MAX)
            .saturating_add(CHROME_WIDTH)
            .clamp(MIN_WIDTH, MAX_WIDTH)
            .min(frame_area.width.saturating_sub(MARGIN * 2));
        let height = if message_line.is_some() { 4 } else { 3 };

        // Don't render if area is too small
        if width < MIN_WIDTH || y + height > frame_area.bottom() {
            break;
        }

        let area = Rect {
            x: frame_area.right().saturating_sub(width + MARGIN),
            y,
            width,
            height,
        };

        let mut card_style = Style::default().fg(colors.fg).bg(colors.bg);
        if toast.phase() == Phase::Leaving {
            card_style = card_style.add_modifier(Modifier::DIM);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border).bg(colors.bg))
            .style(card_style);
        let inner = block.inner(area);

        let mut lines = vec![title_line];
        lines.extend(message_line);
        let text_area = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(3),
            ..inner
        };
        let close = Rect {
            x: inner.right().saturating_sub(2),
            y: inner.y,
            width: 1,
            height: 1,
        };

        popup::clear_area(frame, area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines), text_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                theme::notification::CLOSE_GLYPH,
                Style::default().fg(theme::notification::CLOSE),
            )),
            close,
        );

        regions.push(ToastRegion {
            handle,
            area,
            close,
        });
        y += height;
    }

    regions
}

/// Finds the toast whose close glyph sits at the given cell
pub fn hit_close(regions: &[ToastRegion], column: u16, row: u16) -> Option<Handle> {
    regions
        .iter()
        .find(|r| r.close.contains(Position::new(column, row)))
        .map(|r| r.handle)
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;

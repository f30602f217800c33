use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Shrinks `area` by a margin on each side, collapsing to zero size when the
/// margins do not fit
pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

/// Blank out an area so an overlay does not show the content beneath it
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::text::Line;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_inset_demo_body_keeps_heading_clear_of_edges() {
        let body = Rect::new(0, 0, 80, 23);

        assert_eq!(inset_rect(body, 2, 1), Rect::new(2, 1, 76, 21));
    }

    #[test]
    fn test_inset_narrow_card_collapses_to_nothing() {
        let card = Rect::new(70, 2, 3, 3);

        let inner = inset_rect(card, 2, 2);

        assert_eq!(inner.x, 72);
        assert_eq!(inner.y, 4);
        assert!(inner.is_empty());
    }

    #[test]
    fn test_clear_area_blanks_only_the_card() {
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        let card = Rect::new(12, 1, 6, 1);

        terminal
            .draw(|f| {
                let rows: Vec<Line> = (0..3).map(|_| Line::from("#".repeat(20))).collect();
                f.render_widget(Paragraph::new(rows), f.area());
                clear_area(f, card);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(11, 1)].symbol(), "#");
        assert_eq!(buffer[(12, 1)].symbol(), " ");
        assert_eq!(buffer[(17, 1)].symbol(), " ");
        assert_eq!(buffer[(18, 1)].symbol(), "#");
        assert_eq!(buffer[(12, 0)].symbol(), "#");
    }
}

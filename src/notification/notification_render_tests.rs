//! Tests for notification_render

use super::*;
use crate::config::ToastConfig;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::Duration;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render(
    center: &NotificationCenter,
    width: u16,
    height: u16,
) -> (Terminal<TestBackend>, Vec<ToastRegion>) {
    let mut terminal = create_test_terminal(width, height);
    let mut regions = Vec::new();
    terminal
        .draw(|f| regions = render_notifications(f, center))
        .unwrap();
    (terminal, regions)
}

fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, row)].symbol().to_string())
        .collect()
}

fn center() -> NotificationCenter {
    NotificationCenter::new(ToastConfig::default())
}

#[test]
fn test_no_toasts_renders_nothing() {
    let center = center();
    let (terminal, regions) = render(&center, 80, 24);
    assert!(regions.is_empty());
    for row in 0..24 {
        assert!(row_text(&terminal, row).trim().is_empty());
    }
}

#[test]
fn test_entering_toast_is_not_drawn() {
    let mut center = center();
    center.success("Saved", "", None);

    let (_, regions) = render(&center, 80, 24);
    assert!(regions.is_empty());
}

#[test]
fn test_visible_toast_in_top_right_corner() {
    let mut center = center();
    let handle = center.success("Saved", "", None);
    center.frame();

    let (terminal, regions) = render(&center, 80, 24);
    assert_eq!(regions.len(), 1);
    let region = regions[0];
    assert_eq!(region.handle, handle);
    assert_eq!(
        region.area,
        Rect {
            x: 65,
            y: 2,
            width: 13,
            height: 3
        }
    );
    assert_eq!(
        region.close,
        Rect {
            x: 75,
            y: 3,
            width: 1,
            height: 1
        }
    );

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(75, 3)].symbol(), "\u{00d7}");
    assert!(row_text(&terminal, 3).contains("\u{2714} Saved"));
}

#[test]
fn test_message_adds_a_line() {
    let mut center = center();
    center.error("Request failed", "Check the network and retry", None);
    center.frame();

    let (terminal, regions) = render(&center, 80, 24);
    assert_eq!(regions[0].area.height, 4);
    assert!(row_text(&terminal, 3).contains("Request failed"));
    assert!(row_text(&terminal, 4).contains("Check the network and retry"));
}

#[test]
fn test_toasts_stack_downwards_in_show_order() {
    let mut center = center();
    let first = center.info("First", "", None);
    let second = center.warning("Second", "with message", None);
    center.frame();

    let (_, regions) = render(&center, 80, 24);
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].handle, first);
    assert_eq!(regions[1].handle, second);
    assert_eq!(regions[1].area.y, regions[0].area.bottom());
}

#[test]
fn test_leaving_toast_is_still_drawn_until_removed() {
    let mut center = center();
    let handle = center.info("Bye", "", None);
    center.frame();
    center.dismiss(handle);

    let (_, regions) = render(&center, 80, 24);
    assert_eq!(regions.len(), 1);

    center.advance(Duration::from_millis(300));
    let (_, regions) = render(&center, 80, 24);
    assert!(regions.is_empty());
}

#[test]
fn test_stack_stops_at_bottom_edge() {
    let mut center = center();
    for i in 0..10 {
        center.show("info", &format!("toast {}", i), "", Duration::ZERO);
    }
    center.frame();

    // Rows 2..12 fit three cards of height 3
    let (_, regions) = render(&center, 80, 12);
    assert_eq!(regions.len(), 3);
}

#[test]
fn test_tiny_frame_renders_nothing() {
    let mut center = center();
    center.info("Hello", "", None);
    center.frame();

    let (_, regions) = render(&center, 10, 24);
    assert!(regions.is_empty());
}

#[test]
fn test_long_title_is_capped_at_max_width() {
    let mut center = center();
    center.info(&"x".repeat(200), "", None);
    center.frame();

    let (_, regions) = render(&center, 120, 24);
    assert_eq!(regions[0].area.width, MAX_WIDTH);
}

#[test]
fn test_hit_close_finds_handle() {
    let mut center = center();
    let handle = center.success("Saved", "", None);
    center.frame();

    let (_, regions) = render(&center, 80, 24);
    assert_eq!(hit_close(&regions, 75, 3), Some(handle));
    assert_eq!(hit_close(&regions, 74, 3), None);
    assert_eq!(hit_close(&regions, 0, 0), None);
}

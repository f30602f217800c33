use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::notification::{ToastKind, hit_close};

/// Poll timeout - roughly one frame, so transitions and timers stay smooth
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(16);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') => {
                self.center.success("推荐生成成功！", "已为您找到8个最佳会面点", None);
            }
            KeyCode::Char('e') => {
                self.center.error("请求失败", "请检查网络连接后重试", None);
            }
            KeyCode::Char('i') => {
                self.center.info("Heads up", "Press d to dismiss the newest toast", None);
            }
            KeyCode::Char('w') => {
                self.center.warning("Disk almost full", "", None);
            }
            KeyCode::Char('p') => {
                self.center.show(
                    ToastKind::Info,
                    "Pinned",
                    "Stays until dismissed",
                    Duration::ZERO,
                );
            }
            KeyCode::Char('x') => {
                let kind = ToastKind::parse("celebration");
                let duration = kind.default_duration(self.center.config());
                self.center
                    .show(kind, "Unknown kind", "Rendered without an icon", duration);
            }
            KeyCode::Char('d') => {
                if let Some(handle) = self.newest() {
                    self.center.dismiss(handle);
                }
            }
            KeyCode::Char('D') => self.center.dismiss_all(),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && let Some(handle) = hit_close(&self.toast_regions, mouse.column, mouse.row)
        {
            self.center.dismiss(handle);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::notification::{Handle, NotificationCenter, Phase, ToastRegion};

/// Number of live-region announcements kept on screen
const ANNOUNCEMENT_HISTORY: usize = 5;

/// Interactive demo state: one notification center driven by wall-clock time
pub struct App {
    pub center: NotificationCenter,
    /// Where toasts were drawn on the last frame
    pub toast_regions: Vec<ToastRegion>,
    /// Most recent announcements, oldest first
    pub announcements: VecDeque<String>,
    pub should_quit: bool,
    started: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut center = NotificationCenter::new(config.toast.clone());
        center.ensure_initialized();
        Self {
            center,
            toast_regions: Vec::new(),
            announcements: VecDeque::with_capacity(ANNOUNCEMENT_HISTORY),
            should_quit: false,
            started: Instant::now(),
        }
    }

    /// Moves the center's clock to the wall-clock time elapsed since start
    pub fn tick(&mut self) {
        let elapsed = self.started.elapsed();
        self.tick_at(elapsed);
    }

    /// Moves the center's clock to `elapsed` and collects new announcements
    pub fn tick_at(&mut self, elapsed: Duration) {
        self.center.advance_to(elapsed);
        for text in self.center.take_announcements() {
            log::info!("announce: {}", text);
            if self.announcements.len() == ANNOUNCEMENT_HISTORY {
                self.announcements.pop_front();
            }
            self.announcements.push_back(text);
        }
    }

    /// Most recently shown toast that is not already on its way out
    pub fn newest(&self) -> Option<Handle> {
        self.center
            .toasts()
            .into_iter()
            .rev()
            .find(|(_, t)| t.phase() != Phase::Leaving)
            .map(|(h, _)| h)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

//! Notification center
//!
//! Owns the host document, the stacking container and the registry of active
//! toasts, and drives every toast through
//! insert -> enter (next frame) -> wait -> exit -> remove.
//!
//! Nothing here runs by itself. The host moves time forward with
//! [`NotificationCenter::advance`] and paints with [`NotificationCenter::frame`];
//! timers and frame callbacks run inside those calls.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use super::handle::Handle;
use super::kind::ToastKind;
use super::toast_view::{self, ToastNodes};
use crate::config::ToastConfig;
use crate::document::{Document, NodeId};
use crate::scheduler::{FrameId, Scheduler, TimerId};

/// Undrained announcements kept before the oldest is dropped
const MAX_PENDING_ANNOUNCEMENTS: usize = 32;

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, waiting for the next frame to slide in
    Entering,
    Visible,
    /// Exit transition running, removal scheduled
    Leaving,
}

/// Registry entry for one live toast
#[derive(Debug, Clone)]
pub struct ActiveToast {
    kind: ToastKind,
    title: String,
    message: String,
    duration: Duration,
    phase: Phase,
    nodes: ToastNodes,
    auto_dismiss: Option<TimerId>,
    enter_frame: Option<FrameId>,
}

impl ActiveToast {
    pub fn kind(&self) -> &ToastKind {
        &self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Configured lifetime, zero for persistent toasts
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Root node of the rendered toast
    pub fn node(&self) -> NodeId {
        self.nodes.root
    }

    pub fn close_button(&self) -> NodeId {
        self.nodes.close_button
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Enter(Handle),
    AutoDismiss(Handle),
    Remove(Handle),
}

/// Toast queue manager bound to one document
#[derive(Debug)]
pub struct NotificationCenter {
    config: ToastConfig,
    document: Document,
    container: Option<NodeId>,
    registry: HashMap<Handle, ActiveToast>,
    scheduler: Scheduler<Task>,
    announcements: VecDeque<String>,
}

impl NotificationCenter {
    /// Creates a center over a fresh empty document
    pub fn new(config: ToastConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    /// Creates a center over an existing document.
    ///
    /// The document is not touched until [`NotificationCenter::ensure_initialized`]
    /// or the first [`NotificationCenter::show`].
    pub fn with_document(document: Document, config: ToastConfig) -> Self {
        Self {
            config,
            document,
            container: None,
            registry: HashMap::new(),
            scheduler: Scheduler::new(),
            announcements: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Creates the stacking container and appends it to the body, once.
    ///
    /// Returns the container on every call.
    pub fn ensure_initialized(&mut self) -> NodeId {
        if let Some(container) = self.container {
            return container;
        }
        let container =
            toast_view::build_container(&mut self.document, &self.config.container_label);
        let body = self.document.body();
        self.document.append_child(body, container);
        self.container = Some(container);
        log::debug!("toast container created");
        container
    }

    /// Shows a toast and returns its handle.
    ///
    /// A zero `duration` keeps the toast until it is dismissed explicitly.
    pub fn show(
        &mut self,
        kind: impl Into<ToastKind>,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> Handle {
        let kind = kind.into();
        let container = self.ensure_initialized();
        let handle = Handle::next();

        let nodes = toast_view::build_toast(
            &mut self.document,
            handle,
            &kind,
            title,
            message,
            &self.config.close_label,
            self.config.transition(),
        );
        self.document.append_child(container, nodes.root);

        let enter_frame = Some(self.scheduler.request_animation_frame(Task::Enter(handle)));
        let auto_dismiss = (!duration.is_zero())
            .then(|| self.scheduler.set_timeout(duration, Task::AutoDismiss(handle)));

        log::debug!(
            "toast {} shown: kind={} duration={:?}",
            handle,
            kind,
            duration
        );

        if self.announcements.len() == MAX_PENDING_ANNOUNCEMENTS {
            self.announcements.pop_front();
        }
        self.announcements.push_back(announcement_text(title, message));
        self.registry.insert(
            handle,
            ActiveToast {
                kind,
                title: title.to_string(),
                message: message.to_string(),
                duration,
                phase: Phase::Entering,
                nodes,
                auto_dismiss,
                enter_frame,
            },
        );
        handle
    }

    /// `None` falls back to the kind's configured default
    fn show_kind(
        &mut self,
        kind: ToastKind,
        title: &str,
        message: &str,
        duration: Option<Duration>,
    ) -> Handle {
        let duration = duration.unwrap_or_else(|| kind.default_duration(&self.config));
        self.show(kind, title, message, duration)
    }

    /// Success toast, 5s by default
    pub fn success(&mut self, title: &str, message: &str, duration: Option<Duration>) -> Handle {
        self.show_kind(ToastKind::Success, title, message, duration)
    }

    /// Error toast, 7s by default
    pub fn error(&mut self, title: &str, message: &str, duration: Option<Duration>) -> Handle {
        self.show_kind(ToastKind::Error, title, message, duration)
    }

    /// Info toast, 5s by default
    pub fn info(&mut self, title: &str, message: &str, duration: Option<Duration>) -> Handle {
        self.show_kind(ToastKind::Info, title, message, duration)
    }

    /// Warning toast, 6s by default
    pub fn warning(&mut self, title: &str, message: &str, duration: Option<Duration>) -> Handle {
        self.show_kind(ToastKind::Warning, title, message, duration)
    }

    /// Starts the exit transition of a toast and schedules its removal.
    ///
    /// Unknown handles and toasts already leaving are ignored. The return
    /// value only reports whether anything changed; callers that treat
    /// dismissal as fire-and-forget can drop it.
    pub fn dismiss(&mut self, handle: Handle) -> bool {
        let Some(toast) = self.registry.get_mut(&handle) else {
            log::trace!("dismiss of unknown toast {} ignored", handle);
            return false;
        };
        if toast.phase == Phase::Leaving {
            return false;
        }

        if let Some(timer) = toast.auto_dismiss.take() {
            self.scheduler.clear_timeout(timer);
        }
        if let Some(frame) = toast.enter_frame.take() {
            self.scheduler.cancel_animation_frame(frame);
        }
        if let Some(el) = self.document.element_mut(toast.nodes.root) {
            toast_view::apply_hidden(el);
        }
        toast.phase = Phase::Leaving;
        self.scheduler
            .set_timeout(self.config.transition(), Task::Remove(handle));

        log::debug!("toast {} dismissed", handle);
        true
    }

    /// Dismisses every registered toast
    pub fn dismiss_all(&mut self) {
        let handles: Vec<Handle> = self.registry.keys().copied().collect();
        for handle in handles {
            self.dismiss(handle);
        }
    }

    /// Dispatches a click on `target`.
    ///
    /// A click on a close control, or anything inside one, dismisses that
    /// control's toast and returns its handle.
    pub fn click(&mut self, target: NodeId) -> Option<Handle> {
        let handle = self
            .registry
            .iter()
            .find(|(_, toast)| self.document.contains(toast.nodes.close_button, target))
            .map(|(handle, _)| *handle)?;
        self.dismiss(handle);
        Some(handle)
    }

    /// Runs the callbacks queued for the next animation frame
    pub fn frame(&mut self) {
        for task in self.scheduler.take_frame() {
            self.run(task);
        }
    }

    /// Moves the clock forward by `delta`, running every timer that falls due
    pub fn advance(&mut self, delta: Duration) {
        let target = self.scheduler.now().saturating_add(delta);
        self.advance_to(target);
    }

    /// Moves the clock to `now`, running every timer that falls due on the way.
    ///
    /// Timers scheduled by other timers inside the window fire too. Times in
    /// the past are ignored.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some(task) = self.scheduler.pop_due(now) {
            self.run(task);
        }
        self.scheduler.advance_clock(now);
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::Enter(handle) => self.finish_enter(handle),
            Task::AutoDismiss(handle) => {
                if let Some(toast) = self.registry.get_mut(&handle) {
                    toast.auto_dismiss = None;
                }
                self.dismiss(handle);
            }
            Task::Remove(handle) => self.remove(handle),
        }
    }

    fn finish_enter(&mut self, handle: Handle) {
        let Some(toast) = self.registry.get_mut(&handle) else {
            return;
        };
        toast.enter_frame = None;
        if toast.phase != Phase::Entering {
            return;
        }
        if let Some(el) = self.document.element_mut(toast.nodes.root) {
            toast_view::apply_shown(el);
        }
        toast.phase = Phase::Visible;
    }

    /// Detaches and frees the toast node and erases its registry entry
    fn remove(&mut self, handle: Handle) {
        let Some(toast) = self.registry.remove(&handle) else {
            return;
        };
        // No-op when the node was already detached and freed
        self.document.remove(toast.nodes.root);
        log::debug!("toast {} removed", handle);
    }

    /// Current time on the center's clock
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// True while the toast is registered, including during its exit transition
    pub fn is_active(&self, handle: Handle) -> bool {
        self.registry.contains_key(&handle)
    }

    pub fn get(&self, handle: Handle) -> Option<&ActiveToast> {
        self.registry.get(&handle)
    }

    /// Registered handles in the order they were issued
    pub fn handles(&self) -> Vec<Handle> {
        let mut handles: Vec<Handle> = self.registry.keys().copied().collect();
        handles.sort();
        handles
    }

    /// Registered toasts in the order they were issued
    pub fn toasts(&self) -> Vec<(Handle, &ActiveToast)> {
        let mut toasts: Vec<(Handle, &ActiveToast)> =
            self.registry.iter().map(|(h, t)| (*h, t)).collect();
        toasts.sort_by_key(|(h, _)| *h);
        toasts
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The stacking container, once initialized
    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Markup of the whole document body
    pub fn markup(&self) -> String {
        self.document.to_markup(self.document.body())
    }

    /// Drains the texts announced through the live region since the last call,
    /// oldest first. Only the most recent ones are kept between drains.
    pub fn take_announcements(&mut self) -> Vec<String> {
        self.announcements.drain(..).collect()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_timers()
    }

    /// Deadline of the earliest pending timer, on the center's clock
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }
}

fn announcement_text(title: &str, message: &str) -> String {
    if message.is_empty() {
        title.to_string()
    } else {
        format!("{} {}", title, message)
    }
}

#[cfg(test)]
#[path = "notification_center_tests.rs"]
mod notification_center_tests;

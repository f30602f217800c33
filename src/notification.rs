//! Notification module for toastkit
//!
//! Provides the toast notification center and its terminal renderer.
//! The center is an explicitly owned value: construct one, hand it to
//! whatever UI code needs to raise toasts, and keep driving its clock.

mod handle;
mod kind;
mod notification_center;
mod notification_render;
mod toast_view;

pub use handle::Handle;
pub use kind::ToastKind;
pub use notification_center::{ActiveToast, NotificationCenter, Phase};
pub use notification_render::{ToastRegion, hit_close, render_notifications};
pub use toast_view::{CONTAINER_CLASS, HANDLE_ATTRIBUTE};

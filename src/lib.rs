//! toastkit library - toast notification center
//!
//! Exposes the notification center, its document model and scheduler, and the
//! terminal renderer used by the `toastkit` binary.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod notification;
pub mod scheduler;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::{Config, ToastConfig};
pub use document::{Document, NodeId};
pub use error::ToastError;
pub use notification::{Handle, NotificationCenter, Phase, ToastKind};

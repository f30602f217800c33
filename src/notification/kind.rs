//! Toast kinds
//!
//! The four known kinds carry an icon and a default lifetime. Any other name
//! is kept as [`ToastKind::Other`] and still renders, just without an icon.

use std::fmt;
use std::time::Duration;

use crate::config::ToastConfig;

/// Kind of toast - determines icon, styling class and default duration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
    /// Unrecognized kind, kept verbatim
    Other(String),
}

impl ToastKind {
    /// Parses a kind name. Never fails: unknown names become `Other`.
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "info" => ToastKind::Info,
            "warning" => ToastKind::Warning,
            other => ToastKind::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Other(name) => name,
        }
    }

    /// Boxicons class for the leading icon, `None` for unknown kinds
    pub fn icon_class(&self) -> Option<&'static str> {
        match self {
            ToastKind::Success => Some("bx-check-circle"),
            ToastKind::Error => Some("bx-error-circle"),
            ToastKind::Info => Some("bx-info-circle"),
            ToastKind::Warning => Some("bx-error"),
            ToastKind::Other(_) => None,
        }
    }

    /// Styling class applied to the toast root, e.g. `toast-success`
    pub fn css_class(&self) -> String {
        format!("toast-{}", self.name())
    }

    /// Lifetime used by the convenience constructors
    pub fn default_duration(&self, config: &ToastConfig) -> Duration {
        let ms = match self {
            ToastKind::Success => config.success_ms,
            ToastKind::Error => config.error_ms,
            ToastKind::Info => config.info_ms,
            ToastKind::Warning => config.warning_ms,
            ToastKind::Other(_) => config.default_ms,
        };
        Duration::from_millis(ms)
    }
}

impl From<&str> for ToastKind {
    fn from(name: &str) -> Self {
        ToastKind::parse(name)
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

/// Toast configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_success_ms")]
    pub success_ms: u64,
    #[serde(default = "default_error_ms")]
    pub error_ms: u64,
    #[serde(default = "default_info_ms")]
    pub info_ms: u64,
    #[serde(default = "default_warning_ms")]
    pub warning_ms: u64,
    /// Lifetime of toasts whose kind is not one of the four known kinds
    #[serde(default = "default_default_ms")]
    pub default_ms: u64,
    /// Length of both the entrance and the exit transition
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_container_label")]
    pub container_label: String,
    #[serde(default = "default_close_label")]
    pub close_label: String,
}

fn default_success_ms() -> u64 {
    5000
}

fn default_error_ms() -> u64 {
    7000
}

fn default_info_ms() -> u64 {
    5000
}

fn default_warning_ms() -> u64 {
    6000
}

fn default_default_ms() -> u64 {
    5000
}

fn default_transition_ms() -> u64 {
    300
}

fn default_container_label() -> String {
    "通知消息".to_string()
}

fn default_close_label() -> String {
    "关闭通知".to_string()
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            success_ms: default_success_ms(),
            error_ms: default_error_ms(),
            info_ms: default_info_ms(),
            warning_ms: default_warning_ms(),
            default_ms: default_default_ms(),
            transition_ms: default_transition_ms(),
            container_label: default_container_label(),
            close_label: default_close_label(),
        }
    }
}

impl ToastConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

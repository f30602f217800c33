//! Toast node construction
//!
//! Builds the stacking container and the per-toast subtree out of typed
//! elements. Titles and messages are inserted as text nodes only.

use std::time::Duration;

use super::handle::Handle;
use super::kind::ToastKind;
use crate::document::{Document, Element, NodeId};

pub const CONTAINER_CLASS: &str = "toast-container";
pub const HANDLE_ATTRIBUTE: &str = "data-toast-handle";

const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Nodes of one rendered toast that the center needs to keep track of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastNodes {
    pub root: NodeId,
    pub close_button: NodeId,
}

/// Creates the detached stacking container, marked as a polite live region
pub fn build_container(doc: &mut Document, label: &str) -> NodeId {
    doc.create_element(
        Element::new("div")
            .with_class(CONTAINER_CLASS)
            .with_attribute("role", "region")
            .with_attribute("aria-label", label)
            .with_attribute("aria-live", "polite"),
    )
}

/// Creates the detached subtree of one toast in its pre-entrance state
pub fn build_toast(
    doc: &mut Document,
    handle: Handle,
    kind: &ToastKind,
    title: &str,
    message: &str,
    close_label: &str,
    transition: Duration,
) -> ToastNodes {
    let mut root_el = Element::new("div")
        .with_class("toast")
        .with_class(&kind.css_class())
        .with_attribute("role", "alert")
        .with_attribute(HANDLE_ATTRIBUTE, &handle.to_string());
    apply_hidden(&mut root_el);
    root_el.set_style("transition", &transition_value(transition));
    let root = doc.create_element(root_el);

    let mut icon_el = Element::new("i").with_class("bx");
    if let Some(icon) = kind.icon_class() {
        icon_el.add_class(icon);
    }
    icon_el.add_class("toast-icon");
    let icon = doc.create_element(icon_el);
    doc.append_child(root, icon);

    let content = doc.create_element(Element::new("div").with_class("toast-content"));
    doc.append_child(root, content);
    append_text_block(doc, content, "toast-title", title);
    if !message.is_empty() {
        append_text_block(doc, content, "toast-message", message);
    }

    let close_button = doc.create_element(
        Element::new("button")
            .with_class("toast-close")
            .with_attribute("type", "button")
            .with_attribute("aria-label", close_label),
    );
    let close_icon = doc.create_element(Element::new("i").with_class("bx").with_class("bx-x"));
    doc.append_child(close_button, close_icon);
    doc.append_child(root, close_button);

    ToastNodes { root, close_button }
}

fn append_text_block(doc: &mut Document, parent: NodeId, class: &str, text: &str) {
    let block = doc.create_element(Element::new("div").with_class(class));
    let text = doc.create_text(text);
    doc.append_child(block, text);
    doc.append_child(parent, block);
}

/// Transparent and pushed past the trailing edge
pub fn apply_hidden(el: &mut Element) {
    el.set_style("opacity", "0");
    el.set_style("transform", "translateX(100%)");
}

/// Opaque at its natural position
pub fn apply_shown(el: &mut Element) {
    el.set_style("opacity", "1");
    el.set_style("transform", "translateX(0)");
}

fn transition_value(duration: Duration) -> String {
    format!("all {}s {}", duration.as_secs_f64(), EASING)
}

#[cfg(test)]
#[path = "toast_view_tests.rs"]
mod toast_view_tests;

//! Markup serialization
//!
//! Turns a subtree into HTML text. Text nodes and attribute values are always
//! escaped on the way out.

use super::node::{Document, Node, NodeId};

/// Escapes characters that are significant inside element content
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes characters that are significant inside a quoted attribute value
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Document {
    /// Serializes the node and its descendants.
    ///
    /// Attribute order is `class`, then attributes in insertion order, then
    /// `style`. A missing node serializes to an empty string.
    pub fn to_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(id, &mut out);
        out
    }

    fn write_markup(&self, id: NodeId, out: &mut String) {
        match self.node(id) {
            None => {}
            Some(Node::Text(text)) => out.push_str(&escape_text(text)),
            Some(Node::Element(el)) => {
                out.push('<');
                out.push_str(el.tag());
                if !el.classes().is_empty() {
                    push_attr(out, "class", &el.classes().join(" "));
                }
                for (name, value) in el.attributes() {
                    push_attr(out, name, value);
                }
                let style: Vec<String> = el.styles().map(|(k, v)| format!("{k}: {v}")).collect();
                if !style.is_empty() {
                    push_attr(out, "style", &style.join("; "));
                }
                out.push('>');
                for &child in self.children(id) {
                    self.write_markup(child, out);
                }
                out.push_str("</");
                out.push_str(el.tag());
                out.push('>');
            }
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;

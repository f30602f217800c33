//! Host document model
//!
//! A small typed node tree that toasts are rendered into. Elements, attributes
//! and text are built through methods rather than markup strings, so user text
//! can only ever become a text node.

mod markup;
mod node;

pub use markup::{escape_attribute, escape_text};
pub use node::{Document, Element, Node, NodeId};

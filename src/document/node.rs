//! Arena-backed node tree
//!
//! Nodes live in slots addressed by [`NodeId`]. Freed slots are recycled, and
//! each reuse bumps the slot's generation, so a stale id of a removed node
//! resolves to nothing instead of to a stranger.

/// Identifier of a node inside one [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// Element data: tag, class list, attributes and inline style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Builder form of [`Element::add_class`]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder form of [`Element::set_attribute`]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`Element::set_style`]
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class once; empty names and duplicates are ignored
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        lookup(&self.attributes, name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets an attribute, keeping its original position when it already exists
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        upsert(&mut self.attributes, name, value);
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        lookup(&self.style, property)
    }

    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        upsert(&mut self.style, property, value);
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

/// A document node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Entry {
    generation: u32,
    slot: Option<Slot>,
}

/// A tree of nodes rooted at a `body` element
#[derive(Debug)]
pub struct Document {
    entries: Vec<Entry>,
    /// Indices of vacant entries, reused before the arena grows
    free: Vec<usize>,
    live: usize,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            entries: Vec::new(),
            free: Vec::new(),
            live: 0,
            body: NodeId {
                index: 0,
                generation: 0,
            },
        };
        doc.body = doc.insert(Node::Element(Element::new("body")));
        doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let slot = Slot {
            node,
            parent: None,
            children: Vec::new(),
        };
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index];
            entry.slot = Some(slot);
            return NodeId {
                index,
                generation: entry.generation,
            };
        }
        self.entries.push(Entry {
            generation: 0,
            slot: Some(slot),
        });
        NodeId {
            index: self.entries.len() - 1,
            generation: 0,
        }
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.entries
            .get(id.index)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.slot.as_ref())
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.entries
            .get_mut(id.index)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.slot.as_mut())
    }

    /// Vacates the slot and retires `id` for good
    fn release(&mut self, id: NodeId) -> Option<Slot> {
        let entry = self
            .entries
            .get_mut(id.index)
            .filter(|e| e.generation == id.generation)?;
        let slot = entry.slot.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(slot)
    }

    /// Creates a detached element
    pub fn create_element(&mut self, element: Element) -> NodeId {
        self.insert(Node::Element(element))
    }

    /// Creates a detached text node. The text is stored verbatim.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.insert(Node::Text(text.to_string()))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slot(id).map(|s| &s.node)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.node(id) {
            Some(Node::Element(el)) => Some(el),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.slot_mut(id).map(|s| &mut s.node) {
            Some(Node::Element(el)) => Some(el),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|s| s.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id).map(|s| s.children.as_slice()).unwrap_or(&[])
    }

    /// Appends `child` as the last child of `parent`, moving it if it is
    /// already attached elsewhere.
    ///
    /// Returns false without changing anything when either node is missing,
    /// `parent` is a text node, or the move would create a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.element(parent).is_none() || self.slot(child).is_none() {
            return false;
        }
        if self.contains(child, parent) {
            return false;
        }
        self.detach(child);
        if let Some(slot) = self.slot_mut(child) {
            slot.parent = Some(parent);
        }
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.push(child);
        }
        true
    }

    /// Detaches `child` from `parent`. The node stays allocated.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child);
        true
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.retain(|c| *c != id);
        }
        if let Some(slot) = self.slot_mut(id) {
            slot.parent = None;
        }
    }

    /// Detaches a node and frees it together with its whole subtree.
    ///
    /// The body cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.body || self.slot(id).is_none() {
            return false;
        }
        self.detach(id);
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(slot) = self.release(next) {
                stack.extend(slot.children);
            }
        }
        true
    }

    /// True when `node` is `ancestor` or lies somewhere below it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return self.slot(id).is_some();
            }
            current = self.parent(id);
        }
        false
    }

    /// True when the node is reachable from the body
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.contains(self.body, id)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.walk(id, &mut |doc, node| {
            if let Some(Node::Text(text)) = doc.node(node) {
                out.push_str(text);
            }
        });
        out
    }

    /// Elements carrying `class` in the subtree rooted at `root`, in document order
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.find(root, |el| el.has_class(class))
    }

    /// Elements with tag `tag` in the subtree rooted at `root`, in document order
    pub fn find_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.find(root, |el| el.tag() == tag)
    }

    fn find(&self, root: NodeId, pred: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(root, &mut |doc, node| {
            if doc.element(node).is_some_and(&pred) {
                found.push(node);
            }
        });
        found
    }

    /// Pre-order traversal
    fn walk(&self, root: NodeId, visit: &mut dyn FnMut(&Self, NodeId)) {
        if self.slot(root).is_none() {
            return;
        }
        visit(self, root);
        for &child in self.children(root) {
            self.walk(child, visit);
        }
    }

    /// Number of allocated nodes, attached or not
    pub fn live_nodes(&self) -> usize {
        self.live
    }

    /// Number of slots backing the arena, occupied or vacant
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;

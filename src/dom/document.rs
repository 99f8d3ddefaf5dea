//! Document - node registry and tree operations.

use super::{Node, NodeId, Rect};
use std::collections::HashMap;

/// Registry of all nodes in one document.
///
/// Node IDs are allocated per document, so independent documents (and the
/// controllers built over them) never share state.
#[derive(Debug)]
pub struct Document {
    /// Nodes by ID.
    nodes: HashMap<NodeId, Node>,
    /// Node IDs by markup id.
    ids: HashMap<String, NodeId>,
    /// Root node IDs in document order.
    roots: Vec<NodeId>,
    /// Next node ID to allocate.
    next_node_id: NodeId,
    /// Counter for generated markup ids.
    next_generated_id: u64,
    /// Currently focused node.
    focused: Option<NodeId>,
    /// Viewport size in CSS pixels.
    pub viewport: (f32, f32),
}

impl Default for Document {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            ids: HashMap::new(),
            roots: Vec::new(),
            next_node_id: 1,
            next_generated_id: 1,
            focused: None,
            viewport: (1024.0, 768.0),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element and register it.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id += 1;
        self.nodes.insert(id, Node::new(id, tag));
        id
    }

    /// Add a detached node as a document root.
    pub fn add_root(&mut self, id: NodeId) {
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Look up a node by its markup id.
    pub fn get_by_html_id(&self, html_id: &str) -> Option<NodeId> {
        self.ids.get(html_id).copied()
    }

    /// Set a node's markup id, keeping the id index consistent.
    pub fn set_html_id(&mut self, id: NodeId, html_id: &str) {
        if let Some(node) = self.nodes.get_mut(&id) {
            if let Some(old) = node.html_id.take() {
                self.ids.remove(&old);
            }
            node.html_id = Some(html_id.to_string());
            self.ids.insert(html_id.to_string(), id);
        }
    }

    /// Return the node's markup id, generating `<prefix><n>` when absent.
    pub fn ensure_html_id(&mut self, id: NodeId, prefix: &str) -> String {
        if let Some(existing) = self.nodes.get(&id).and_then(|n| n.html_id.clone()) {
            return existing;
        }
        loop {
            let candidate = format!("{}{}", prefix, self.next_generated_id);
            self.next_generated_id += 1;
            if !self.ids.contains_key(&candidate) {
                self.set_html_id(id, &candidate);
                return candidate;
            }
        }
    }

    /// Append a child to a parent, detaching it from any previous parent.
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        self.attach(parent_id, child_id, None);
    }

    /// Insert a child as the parent's first child.
    pub fn insert_first(&mut self, parent_id: NodeId, child_id: NodeId) {
        self.attach(parent_id, child_id, Some(0));
    }

    fn attach(&mut self, parent_id: NodeId, child_id: NodeId, index: Option<usize>) {
        self.detach(child_id);
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            match index {
                Some(i) if i <= parent.children.len() => parent.children.insert(i, child_id),
                _ => parent.children.push(child_id),
            }
        } else {
            return;
        }
        if let Some(child) = self.nodes.get_mut(&child_id) {
            child.parent_id = Some(parent_id);
        }
    }

    fn detach(&mut self, id: NodeId) {
        let parent_id = self.nodes.get(&id).and_then(|n| n.parent_id);
        if let Some(pid) = parent_id {
            if let Some(parent) = self.nodes.get_mut(&pid) {
                parent.children.retain(|c| *c != id);
            }
        }
        self.roots.retain(|r| *r != id);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent_id = None;
        }
    }

    /// Remove a node and its whole subtree from the document.
    pub fn remove_subtree(&mut self, id: NodeId) {
        self.detach(id);
        for node_id in self.descendants(id) {
            if let Some(node) = self.nodes.remove(&node_id) {
                if let Some(html_id) = node.html_id {
                    self.ids.remove(&html_id);
                }
            }
            if self.focused == Some(node_id) {
                self.focused = None;
            }
        }
    }

    /// Root node IDs in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The subtree rooted at `id` in depth-first preorder, `id` included.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if self.nodes.contains_key(&current) {
                out.push(current);
                if let Some(node) = self.nodes.get(&current) {
                    for child in node.children.iter().rev() {
                        stack.push(*child);
                    }
                }
            }
        }
        out
    }

    /// First descendant of `root` (excluding `root`) carrying `attr`.
    pub fn find_descendant_with_attr(&self, root: NodeId, attr: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .skip(1)
            .find(|id| self.get(*id).is_some_and(|n| n.has_attr(attr)))
    }

    /// All nodes carrying `attr`, in document order.
    pub fn all_with_attr(&self, attr: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        for root in self.roots.clone() {
            for id in self.descendants(root) {
                if self.get(id).is_some_and(|n| n.has_attr(attr)) {
                    out.push(id);
                }
            }
        }
        out
    }

    /// Whether `node` is `ancestor` or sits inside its subtree.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent_id);
        }
        false
    }

    /// Flattened, whitespace-normalized text of a subtree.
    pub fn flat_text(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        for node_id in self.descendants(id) {
            if let Some(node) = self.get(node_id) {
                let text = node.text.trim();
                if !text.is_empty() {
                    parts.push(text.to_string());
                }
            }
        }
        parts.join(" ")
    }

    pub fn focus(&mut self, id: NodeId) {
        if self.nodes.contains_key(&id) {
            self.focused = Some(id);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Convenience attribute write through the registry.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.set_attr(name, value);
        }
    }

    /// Convenience bounding-box write, mainly for tests and fixtures.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.rect = rect;
        }
    }
}

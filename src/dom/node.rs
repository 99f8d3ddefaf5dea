//! Node - a single element in the document tree.

use std::collections::HashMap;

/// Identifier for a node within its document.
pub type NodeId = u64;

/// Axis-aligned bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// An element in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique node ID within the document.
    pub id: NodeId,
    /// Tag name, lowercase.
    pub tag: String,
    /// Markup `id` attribute, if any. Maintained through the document so the
    /// id index stays consistent.
    pub html_id: Option<String>,
    /// Parent node ID.
    pub parent_id: Option<NodeId>,
    /// Child node IDs in tree order.
    pub children: Vec<NodeId>,
    /// Attributes other than `id` and `class`.
    pub attributes: HashMap<String, String>,
    /// Class list in insertion order.
    pub classes: Vec<String>,
    /// Direct text content of this node.
    pub text: String,
    /// Bounding box in viewport coordinates.
    pub rect: Rect,
}

impl Node {
    pub(crate) fn new(id: NodeId, tag: &str) -> Self {
        Self {
            id,
            tag: tag.to_ascii_lowercase(),
            html_id: None,
            parent_id: None,
            children: Vec::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            text: String::new(),
            rect: Rect::default(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class, preserving insertion order and uniqueness.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Parsed `tabindex` attribute, if present and numeric.
    pub fn tabindex(&self) -> Option<i32> {
        self.attr("tabindex").and_then(|v| v.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_order_and_uniqueness() {
        let mut node = Node::new(1, "span");
        node.add_class("tooltip");
        node.add_class("tooltip--show");
        node.add_class("tooltip");
        assert_eq!(node.classes, vec!["tooltip", "tooltip--show"]);

        node.remove_class("tooltip");
        assert_eq!(node.classes, vec!["tooltip--show"]);
        assert!(!node.has_class("tooltip"));
    }

    #[test]
    fn test_tabindex_parsing() {
        let mut node = Node::new(1, "div");
        assert_eq!(node.tabindex(), None);
        node.set_attr("tabindex", "0");
        assert_eq!(node.tabindex(), Some(0));
        node.set_attr("tabindex", "-1");
        assert_eq!(node.tabindex(), Some(-1));
        node.set_attr("tabindex", "bogus");
        assert_eq!(node.tabindex(), None);
    }

    #[test]
    fn test_tag_lowercased() {
        let node = Node::new(1, "BUTTON");
        assert_eq!(node.tag, "button");
    }
}

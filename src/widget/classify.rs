//! Tip content classification.
//!
//! A tooltip may hold flat text only; structural or interactive content is
//! valid solely under toggle (disclosure) semantics. Classification is a pure
//! function over the resolved tip subtree and runs once, before any
//! attribute is written.

use crate::dom::{Document, Node, NodeId};
use phf::phf_set;

/// Block-level and structural tags a plain tooltip may not contain.
static STRUCTURAL_TAGS: phf::Set<&'static str> = phf_set! {
    "h1", "h2", "h3", "h4", "h5", "h6",
    "p", "ul", "ol", "li", "dl", "dt", "dd",
    "table", "blockquote", "figure", "img", "audio", "video", "iframe",
};

/// Interactive and form-control tags.
static INTERACTIVE_TAGS: phf::Set<&'static str> = phf_set! {
    "button", "input", "select", "textarea", "option",
    "label", "summary", "details",
};

/// True when the tip subtree disqualifies plain tooltip semantics and the
/// host must run in toggle mode.
pub fn requires_toggle(doc: &Document, tip: NodeId) -> bool {
    doc.descendants(tip)
        .into_iter()
        .skip(1)
        .filter_map(|id| doc.get(id))
        .any(disqualifies_tooltip)
}

fn disqualifies_tooltip(node: &Node) -> bool {
    if STRUCTURAL_TAGS.contains(node.tag.as_str()) {
        return true;
    }
    if INTERACTIVE_TAGS.contains(node.tag.as_str()) {
        return true;
    }
    if node.tag == "a" && node.has_attr("href") {
        return true;
    }
    // tabindex >= 0 puts the element in the focus order.
    matches!(node.tabindex(), Some(t) if t >= 0)
}

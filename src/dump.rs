//! Document tree dump and diagnostic utilities.

use crate::dom::{Document, NodeId};
use crate::widget::TipController;

/// Render the enhanced document as deterministic indented lines.
///
/// Attributes are emitted in lexical order so output is stable across runs;
/// enhanced hosts carry a `[mode state]` suffix.
pub fn dump_tree(controller: &TipController) -> String {
    let doc = controller.document();
    let mut out = String::new();
    for root in doc.roots() {
        dump_node(controller, doc, *root, 0, &mut out);
    }
    out
}

fn dump_node(
    controller: &TipController,
    doc: &Document,
    id: NodeId,
    depth: usize,
    out: &mut String,
) {
    let Some(node) = doc.get(id) else { return };
    let indent = "  ".repeat(depth);

    let mut line = format!("{indent}<{}", node.tag);
    if let Some(html_id) = &node.html_id {
        line.push_str(&format!(" id=\"{html_id}\""));
    }
    if !node.classes.is_empty() {
        line.push_str(&format!(" class=\"{}\"", node.classes.join(" ")));
    }
    let mut attrs: Vec<_> = node.attributes.iter().collect();
    attrs.sort();
    for (name, value) in attrs {
        line.push_str(&format!(" {name}=\"{value}\""));
    }
    line.push('>');
    if let Some(record) = controller.record(id) {
        line.push_str(&format!(
            "  [{} {}]",
            record.mode.as_str(),
            record.state.as_str()
        ));
    }
    out.push_str(&line);
    out.push('\n');

    if !node.text.is_empty() {
        out.push_str(&format!("{indent}  \"{}\"\n", node.text));
    }
    for child in &node.children {
        dump_node(controller, doc, *child, depth + 1, out);
    }
}

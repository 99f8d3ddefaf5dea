//! Tip content resolution.
//!
//! Produces the tip element for a host from a prioritized source chain,
//! consuming the source it draws from. A host with no resolvable source is
//! left inert: a diagnostic is logged and no enhancement happens.

use super::TipMode;
use crate::config::TipOptions;
use crate::dom::{Document, NodeId};
use crate::{Error, Result};

/// Resolve a host's tip element.
///
/// Priority order, first match wins:
/// 1. inline content attribute on the host (attribute consumed);
/// 2. external node referenced by the source attribute (node consumed;
///    a dangling reference is a markup authoring error and fails fast);
/// 3. a descendant marked as tip content (used in place);
/// 4. the trigger's `aria-label`, label mode only (attribute consumed);
/// 5. the trigger's `title` attribute.
///
/// Returns `Ok(None)` when nothing resolves.
pub fn resolve_tip(
    doc: &mut Document,
    host: NodeId,
    trigger: Option<NodeId>,
    declared: TipMode,
    options: &TipOptions,
) -> Result<Option<NodeId>> {
    if let Some(text) = take_attr(doc, host, &options.content_attr) {
        return Ok(Some(synthesize_tip(doc, host, &text, options)));
    }

    if let Some(source_id) = doc.get(host).and_then(|n| n.attr(&options.source_attr).map(String::from)) {
        let source = doc
            .get_by_html_id(&source_id)
            .ok_or_else(|| Error::NodeNotFound(source_id.clone()))?;
        let text = doc.flat_text(source);
        doc.remove_subtree(source);
        return Ok(Some(synthesize_tip(doc, host, &text, options)));
    }

    if let Some(tip) = doc.find_descendant_with_attr(host, &options.tip_attr) {
        return Ok(Some(tip));
    }

    if declared == TipMode::Label {
        if let Some(text) = trigger.and_then(|t| take_attr(doc, t, "aria-label")) {
            return Ok(Some(synthesize_tip(doc, host, &text, options)));
        }
    }

    if let Some(text) = trigger.and_then(|t| doc.get(t)).and_then(|n| n.attr("title").map(String::from)) {
        return Ok(Some(synthesize_tip(doc, host, &text, options)));
    }

    tracing::warn!("No tip content source for host {}", describe(doc, host));
    Ok(None)
}

/// Remove and return an attribute value.
fn take_attr(doc: &mut Document, id: NodeId, name: &str) -> Option<String> {
    doc.get_mut(id).and_then(|n| n.remove_attr(name))
}

/// Create a flat-text tip element appended to the host.
fn synthesize_tip(doc: &mut Document, host: NodeId, text: &str, options: &TipOptions) -> NodeId {
    let tip = doc.create_element("span");
    if let Some(node) = doc.get_mut(tip) {
        node.text = text.to_string();
        node.set_attr(&options.tip_attr, "");
    }
    doc.append_child(host, tip);
    tip
}

fn describe(doc: &Document, id: NodeId) -> String {
    match doc.get(id).and_then(|n| n.html_id.clone()) {
        Some(html_id) => html_id,
        None => format!("#{id}"),
    }
}

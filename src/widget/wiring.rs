//! Attribute wiring and trigger synthesis.
//!
//! Establishes the ID linkage between trigger and tip for the mode decided at
//! setup, and generates a toggle button for hosts that ship no trigger of
//! their own.

use super::{TipMode, TipRecord, TipState};
use crate::config::TipOptions;
use crate::dom::{Document, NodeId};

/// Wire a host whose tip has been resolved and whose final mode is decided.
///
/// Synthesizes the trigger when `trigger` is `None` (the caller forces toggle
/// mode in that case). Returns the widget record for the controller registry.
pub fn wire(
    doc: &mut Document,
    host: NodeId,
    tip: NodeId,
    trigger: Option<NodeId>,
    mode: TipMode,
    options: &TipOptions,
) -> TipRecord {
    let host_id = doc.ensure_html_id(host, &options.id_prefix);
    let class_stem = doc
        .get(host)
        .and_then(|n| n.attr(&options.class_attr).map(String::from))
        .unwrap_or_else(|| options.tip_class.clone());

    let tip_id = match doc.get(tip).and_then(|n| n.html_id.clone()) {
        Some(existing) => existing,
        None => {
            let derived = format!("{host_id}_tip");
            doc.set_html_id(tip, &derived);
            derived
        }
    };
    if let Some(node) = doc.get_mut(tip) {
        node.add_class(&class_stem);
    }

    let trigger = trigger.unwrap_or_else(|| synthesize_trigger(doc, host, &class_stem, options));

    match mode {
        TipMode::Toggle => {
            doc.set_attr(trigger, "aria-expanded", "false");
            doc.set_attr(trigger, "aria-controls", &tip_id);
            // The tip receives programmatic focus on expansion.
            doc.set_attr(tip, "tabindex", "-1");
        }
        TipMode::Description => {
            // An author-provided description wins over the generated linkage.
            if !doc.get(trigger).is_some_and(|n| n.has_attr("aria-describedby")) {
                doc.set_attr(trigger, "aria-describedby", &tip_id);
            }
            doc.set_attr(tip, "role", "tooltip");
        }
        TipMode::Label => {
            doc.set_attr(trigger, "aria-labelledby", &tip_id);
            doc.set_attr(tip, "role", "tooltip");
            doc.set_attr(tip, "aria-hidden", "true");
        }
    }

    // A native description and a custom one cannot coexist.
    if let Some(node) = doc.get_mut(trigger) {
        node.remove_attr("title");
    }

    TipRecord {
        host,
        tip,
        trigger,
        mode,
        state: TipState::Hidden,
        class_stem,
    }
}

/// Generate a toggle button with a default icon and accessible name.
fn synthesize_trigger(
    doc: &mut Document,
    host: NodeId,
    class_stem: &str,
    options: &TipOptions,
) -> NodeId {
    let label = doc
        .get(host)
        .and_then(|n| n.attr(&options.label_attr).map(String::from))
        .unwrap_or_else(|| options.trigger_label.clone());

    let trigger = doc.create_element("button");
    if let Some(node) = doc.get_mut(trigger) {
        node.set_attr("type", "button");
        node.set_attr(&options.trigger_attr, "toggle");
        node.set_attr("aria-label", &label);
        node.add_class(&format!("{class_stem}__trigger"));
    }

    // Default icon; presentation owns its appearance.
    let icon = doc.create_element("span");
    if let Some(node) = doc.get_mut(icon) {
        node.add_class(&format!("{class_stem}__icon"));
        node.set_attr("aria-hidden", "true");
        node.text = "i".into();
    }
    doc.append_child(trigger, icon);

    match doc.find_descendant_with_attr(host, &options.placement_attr) {
        Some(slot) => {
            let prepend = doc
                .get(slot)
                .and_then(|n| n.attr(&options.placement_attr))
                .is_some_and(|v| v == "first");
            if prepend {
                doc.insert_first(slot, trigger);
            } else {
                doc.append_child(slot, trigger);
            }
        }
        None => doc.insert_first(host, trigger),
    }

    trigger
}

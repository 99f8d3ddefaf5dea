//! Shared test helpers.

use toggletip::config::TipOptions;
use toggletip::dom::NodeId;
use toggletip::markup::parse_fragment;
use toggletip::TipController;

/// Build an enhanced controller from a markup fragment.
#[allow(dead_code)]
pub fn enhanced(fragment: &str) -> TipController {
    let doc = parse_fragment(fragment).expect("fragment parses");
    let mut controller = TipController::new(doc, TipOptions::default());
    controller.enhance_all().expect("enhancement succeeds");
    controller
}

/// Node ID for a markup id that must exist.
#[allow(dead_code)]
pub fn node(controller: &TipController, html_id: &str) -> NodeId {
    controller
        .document()
        .get_by_html_id(html_id)
        .unwrap_or_else(|| panic!("unknown id: {html_id}"))
}

/// Attribute value on a node looked up by markup id.
#[allow(dead_code)]
pub fn attr(controller: &TipController, html_id: &str, name: &str) -> Option<String> {
    let id = node(controller, html_id);
    controller
        .document()
        .get(id)
        .and_then(|n| n.attr(name).map(String::from))
}

/// Whether the node with the given markup id carries a class.
#[allow(dead_code)]
pub fn has_class(controller: &TipController, html_id: &str, class: &str) -> bool {
    let id = node(controller, html_id);
    controller
        .document()
        .get(id)
        .is_some_and(|n| n.has_class(class))
}

//! Markup fragment loading.
//!
//! Parses a declarative XML fragment into a [`Document`]. Fixtures may
//! declare node geometry inline (`data-x`, `data-y`, `data-w`, `data-h`) so
//! bounding-box behavior is scriptable without a layout engine.

use crate::dom::{Document, NodeId, Rect};
use crate::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse an XML fragment into a fresh document.
///
/// Multiple top-level elements are allowed and become document roots. Text is
/// whitespace-normalized onto its containing element.
pub fn parse_fragment(xml: &str) -> Result<Document> {
    let mut doc = Document::new();
    let mut stack: Vec<NodeId> = Vec::new();
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event().map_err(quick_xml::Error::from)? {
            Event::Start(e) => {
                let id = open_element(&mut doc, &stack, &e)?;
                stack.push(id);
            }
            Event::Empty(e) => {
                open_element(&mut doc, &stack, &e)?;
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(t) => {
                let text = t.unescape().map_err(quick_xml::Error::from)?;
                if let Some(current) = stack.last() {
                    append_text(&mut doc, *current, &text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(doc)
}

/// Parse a fragment from a file on disk.
pub fn parse_fragment_file(path: &std::path::Path) -> Result<Document> {
    let contents = std::fs::read_to_string(path)?;
    parse_fragment(&contents)
}

fn open_element(doc: &mut Document, stack: &[NodeId], e: &BytesStart) -> Result<NodeId> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let id = doc.create_element(&tag);
    match stack.last() {
        Some(parent) => doc.append_child(*parent, id),
        None => doc.add_root(id),
    }

    let mut rect = Rect::default();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(quick_xml::Error::from)?
            .to_string();
        match key.as_str() {
            "id" => doc.set_html_id(id, &value),
            "class" => {
                if let Some(node) = doc.get_mut(id) {
                    for class in value.split_whitespace() {
                        node.add_class(class);
                    }
                }
            }
            "data-x" => rect.x = value.trim().parse().unwrap_or(0.0),
            "data-y" => rect.y = value.trim().parse().unwrap_or(0.0),
            "data-w" => rect.width = value.trim().parse().unwrap_or(0.0),
            "data-h" => rect.height = value.trim().parse().unwrap_or(0.0),
            _ => doc.set_attr(id, &key, &value),
        }
    }
    if rect != Rect::default() {
        doc.set_rect(id, rect);
    }

    Ok(id)
}

/// Append whitespace-collapsed text to a node's direct content.
fn append_text(doc: &mut Document, id: NodeId, text: &str) {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return;
    }
    if let Some(node) = doc.get_mut(id) {
        if !node.text.is_empty() {
            node.text.push(' ');
        }
        node.text.push_str(&collapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_fragment() {
        let doc = parse_fragment(
            r#"<div id="outer" class="card fancy">
                 <button data-tooltip-trigger="">Save</button>
                 <span data-tooltip-tip="">Saves the file</span>
               </div>"#,
        )
        .unwrap();

        let outer = doc.get_by_html_id("outer").unwrap();
        let node = doc.get(outer).unwrap();
        assert_eq!(node.tag, "div");
        assert_eq!(node.classes, vec!["card", "fancy"]);
        assert_eq!(node.children.len(), 2);

        let trigger = doc.find_descendant_with_attr(outer, "data-tooltip-trigger").unwrap();
        assert_eq!(doc.get(trigger).unwrap().text, "Save");
        let tip = doc.find_descendant_with_attr(outer, "data-tooltip-tip").unwrap();
        assert_eq!(doc.flat_text(tip), "Saves the file");
    }

    #[test]
    fn test_parse_inline_geometry() {
        let doc = parse_fragment(
            r#"<span id="tip" data-x="10" data-y="-4" data-w="120" data-h="32"/>"#,
        )
        .unwrap();
        let tip = doc.get_by_html_id("tip").unwrap();
        let rect = doc.get(tip).unwrap().rect;
        assert_eq!(rect, Rect::new(10.0, -4.0, 120.0, 32.0));
        // Geometry attributes are consumed, not kept as plain attributes.
        assert!(!doc.get(tip).unwrap().has_attr("data-x"));
    }

    #[test]
    fn test_parse_multiple_roots() {
        let doc = parse_fragment(r#"<div id="a"/><div id="b"/>"#).unwrap();
        assert_eq!(doc.roots().len(), 2);
    }

    #[test]
    fn test_parse_malformed_fails() {
        assert!(parse_fragment("<div><span></div>").is_err());
    }
}

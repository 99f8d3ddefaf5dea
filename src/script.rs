//! Event replay scripts.
//!
//! Drives a controller from a newline-separated script, one event per line,
//! with nodes referenced by markup id:
//!
//! ```text
//! hover save        # pointer onto #save
//! unhover save
//! focus save
//! blur save other   # focus leaves #save and lands on #other
//! click save
//! touch save
//! key escape        # also: enter, space
//! frame             # run the next animation frame
//! ```
//!
//! Blank lines and `#` comments are skipped. Unknown verbs and unknown ids
//! fail fast.

use crate::dom::{Document, NodeId};
use crate::widget::{DomEvent, Key, TipController};
use crate::{Error, Result};

enum Step {
    Event(DomEvent),
    Frame,
}

/// Replay a script against the controller. Returns the number of steps run.
pub fn run_script(controller: &mut TipController, script: &str) -> Result<usize> {
    let mut applied = 0;
    for raw in script.lines() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(controller.document(), line)? {
            Step::Event(event) => controller.handle_event(event),
            Step::Frame => controller.animation_frame(),
        }
        applied += 1;
    }
    Ok(applied)
}

fn parse_line(doc: &Document, line: &str) -> Result<Step> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let step = match verb {
        "hover" => Step::Event(DomEvent::PointerOver(lookup(doc, parts.next(), line)?)),
        "unhover" => Step::Event(DomEvent::PointerOut(lookup(doc, parts.next(), line)?)),
        "focus" => Step::Event(DomEvent::FocusIn(lookup(doc, parts.next(), line)?)),
        "blur" => {
            let node = lookup(doc, parts.next(), line)?;
            let next = match parts.next() {
                Some(id) => Some(lookup(doc, Some(id), line)?),
                None => None,
            };
            Step::Event(DomEvent::FocusOut { node, next })
        }
        "click" => Step::Event(DomEvent::Click(lookup(doc, parts.next(), line)?)),
        "touch" => Step::Event(DomEvent::TouchEnd(lookup(doc, parts.next(), line)?)),
        "key" => {
            let key = match parts.next() {
                Some("escape") => Key::Escape,
                Some("enter") => Key::Enter,
                Some("space") => Key::Space,
                _ => return Err(Error::InvalidEvent(line.to_string())),
            };
            Step::Event(DomEvent::KeyDown(key))
        }
        "frame" => Step::Frame,
        _ => return Err(Error::InvalidEvent(line.to_string())),
    };
    Ok(step)
}

fn lookup(doc: &Document, id: Option<&str>, line: &str) -> Result<NodeId> {
    let id = id.ok_or_else(|| Error::InvalidEvent(line.to_string()))?;
    doc.get_by_html_id(id)
        .ok_or_else(|| Error::NodeNotFound(id.to_string()))
}

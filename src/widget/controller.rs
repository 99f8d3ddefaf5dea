//! Widget setup and event driving.
//!
//! [`TipController`] owns the document, the widget records, and the active /
//! revealed references. It maps raw document events onto machine events, runs
//! the pure transition, and applies the resulting effects. Document-level
//! dismissal (Escape, outside activation) is handled unconditionally and
//! gated on the active reference, so there is no listener lifecycle to leak.

use super::machine::{transition, Effect, TipEvent};
use super::position::{self, EdgeAdjust};
use super::{classify, resolve, wiring, TipMode, TipRecord, TipState};
use crate::config::TipOptions;
use crate::dom::{Document, NodeId};
use crate::Result;
use std::collections::HashMap;

/// Raw input events fed to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer moved onto a node.
    PointerOver(NodeId),
    /// Pointer moved off a node.
    PointerOut(NodeId),
    /// A node received focus.
    FocusIn(NodeId),
    /// A node lost focus; `next` is where focus lands, if anywhere.
    FocusOut { node: NodeId, next: Option<NodeId> },
    /// A click landed on a node.
    Click(NodeId),
    /// Touch release; treated as a click.
    TouchEnd(NodeId),
    /// Document-level key press.
    KeyDown(Key),
}

/// Keys the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
}

/// Controller instance for one document.
pub struct TipController {
    doc: Document,
    options: TipOptions,
    /// Enhanced widgets keyed by host node id.
    records: HashMap<NodeId, TipRecord>,
    /// Host of the single expanded toggle tip.
    active: Option<NodeId>,
    /// Host of the tip currently in transient revealed state.
    revealed: Option<NodeId>,
    /// Focus moves queued for the next animation frame.
    deferred_focus: Vec<NodeId>,
}

impl TipController {
    pub fn new(doc: Document, options: TipOptions) -> Self {
        Self {
            doc,
            options,
            records: HashMap::new(),
            active: None,
            revealed: None,
            deferred_focus: Vec::new(),
        }
    }

    /// Discover and enhance every host in the document.
    ///
    /// Returns the number of hosts enhanced. Hosts without any content
    /// source degrade to plain markup with a logged diagnostic; a dangling
    /// external source reference fails fast.
    pub fn enhance_all(&mut self) -> Result<usize> {
        let hosts = self.doc.all_with_attr(&self.options.host_attr);
        let mut enhanced = 0;
        for host in hosts {
            if self.enhance(host)? {
                enhanced += 1;
            }
        }
        tracing::debug!("Enhanced {} tooltip host(s)", enhanced);
        Ok(enhanced)
    }

    /// Enhance a single host. Returns false when no content resolves.
    pub fn enhance(&mut self, host: NodeId) -> Result<bool> {
        let declared = self
            .doc
            .get(host)
            .and_then(|n| n.attr(&self.options.host_attr))
            .map(TipMode::from_str)
            .unwrap_or(TipMode::Description);
        let trigger = self.doc.find_descendant_with_attr(host, &self.options.trigger_attr);
        let trigger_forces_toggle = trigger
            .and_then(|t| self.doc.get(t))
            .and_then(|n| n.attr(&self.options.trigger_attr))
            .is_some_and(|v| v == "toggle");

        let Some(tip) = resolve::resolve_tip(&mut self.doc, host, trigger, declared, &self.options)?
        else {
            return Ok(false);
        };

        let mode = if trigger.is_none()
            || trigger_forces_toggle
            || declared == TipMode::Toggle
            || classify::requires_toggle(&self.doc, tip)
        {
            TipMode::Toggle
        } else {
            declared
        };

        let record = wiring::wire(&mut self.doc, host, tip, trigger, mode, &self.options);
        tracing::debug!(
            "Enhanced host {:?} in {} mode",
            self.doc.get(host).and_then(|n| n.html_id.clone()),
            mode.as_str()
        );
        self.records.insert(host, record);
        Ok(true)
    }

    /// Feed one document event through the state machine.
    pub fn handle_event(&mut self, event: DomEvent) {
        match event {
            DomEvent::PointerOver(target) => {
                if let Some(host) = self.widget_by_trigger(target) {
                    if self.is_transient(host) {
                        self.supersede_revealed(host);
                    }
                    self.dispatch(host, TipEvent::PointerEnter);
                }
            }
            DomEvent::PointerOut(target) => {
                if let Some(host) = self.widget_by_host(target) {
                    self.dispatch(host, TipEvent::PointerLeave);
                }
            }
            DomEvent::FocusIn(target) => {
                self.doc.focus(target);
                if let Some(host) = self.widget_by_trigger(target) {
                    if self.is_transient(host) {
                        self.supersede_revealed(host);
                    }
                    self.dispatch(host, TipEvent::FocusGained);
                }
            }
            DomEvent::FocusOut { node, next } => {
                match next {
                    Some(n) => self.doc.focus(n),
                    None => self.doc.blur(),
                }
                if let Some(host) = self.widget_by_trigger(node) {
                    self.dispatch(host, TipEvent::FocusLost);
                }
                self.check_focus_exit(node, next);
            }
            DomEvent::Click(target) | DomEvent::TouchEnd(target) => {
                match self.widget_by_trigger(target) {
                    // Clicking a transient trigger changes nothing by itself,
                    // but still counts as an outside activation elsewhere.
                    Some(host) if !self.is_transient(host) => self.activate(host),
                    _ => self.check_outside_activation(target),
                }
            }
            DomEvent::KeyDown(Key::Escape) => {
                if let Some(active) = self.active {
                    self.dispatch(active, TipEvent::Dismiss);
                } else if let Some(revealed) = self.revealed {
                    self.dispatch(revealed, TipEvent::Dismiss);
                }
            }
            DomEvent::KeyDown(Key::Enter) | DomEvent::KeyDown(Key::Space) => {
                if let Some(host) = self.doc.focused().and_then(|f| self.widget_by_trigger(f)) {
                    if !self.is_transient(host) {
                        self.activate(host);
                    }
                }
            }
        }
    }

    /// Run deferred work scheduled for the next frame.
    pub fn animation_frame(&mut self) {
        for id in std::mem::take(&mut self.deferred_focus) {
            self.doc.focus(id);
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable document access, mainly for fixtures adjusting geometry.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn record(&self, host: NodeId) -> Option<&TipRecord> {
        self.records.get(&host)
    }

    pub fn records(&self) -> &HashMap<NodeId, TipRecord> {
        &self.records
    }

    /// Host of the currently expanded toggle tip, if any.
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    pub fn options(&self) -> &TipOptions {
        &self.options
    }

    /// Toggle activation: at most one expanded tip globally, so opening a new
    /// one collapses the previous one first.
    fn activate(&mut self, host: NodeId) {
        let Some(record) = self.records.get(&host) else { return };
        if record.mode.is_transient() {
            return;
        }
        if record.state != TipState::Expanded {
            if let Some(previous) = self.active {
                if previous != host {
                    self.dispatch(previous, TipEvent::Superseded);
                }
            }
        }
        self.dispatch(host, TipEvent::Activate);
    }

    /// Collapse the expanded tip when focus leaves its host without landing
    /// on the trigger.
    fn check_focus_exit(&mut self, node: NodeId, next: Option<NodeId>) {
        let Some(active) = self.active else { return };
        let Some(record) = self.records.get(&active) else { return };
        if !self.doc.contains(record.host, node) {
            return;
        }
        let landed_inside = next.is_some_and(|n| self.doc.contains(record.host, n));
        let landed_on_trigger = next.is_some_and(|n| self.doc.contains(record.trigger, n));
        if !landed_inside && !landed_on_trigger {
            self.dispatch(active, TipEvent::FocusExited);
        }
    }

    /// Collapse the expanded tip on activation outside both host and trigger.
    fn check_outside_activation(&mut self, target: NodeId) {
        let Some(active) = self.active else { return };
        let Some(record) = self.records.get(&active) else { return };
        let inside =
            self.doc.contains(record.host, target) || self.doc.contains(record.trigger, target);
        if !inside {
            self.dispatch(active, TipEvent::OutsideActivate);
        }
    }

    fn is_transient(&self, host: NodeId) -> bool {
        self.records.get(&host).is_some_and(|r| r.mode.is_transient())
    }

    /// Revealing a new tip closes the one currently revealed elsewhere.
    fn supersede_revealed(&mut self, incoming: NodeId) {
        if let Some(previous) = self.revealed {
            if previous != incoming {
                self.dispatch(previous, TipEvent::Superseded);
            }
        }
    }

    fn dispatch(&mut self, host: NodeId, event: TipEvent) {
        let Some(record) = self.records.get(&host) else { return };
        let result = transition(record, event);
        self.apply_effects(host, result.effects);
        if let Some(record) = self.records.get_mut(&host) {
            record.state = result.next;
        }
        match result.next {
            TipState::Expanded => self.active = Some(host),
            TipState::Revealed => self.revealed = Some(host),
            TipState::Hidden => {
                if self.active == Some(host) {
                    self.active = None;
                }
                if self.revealed == Some(host) {
                    self.revealed = None;
                }
            }
        }
    }

    fn apply_effects(&mut self, host: NodeId, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::AddClass(id, class) => {
                    if let Some(node) = self.doc.get_mut(id) {
                        node.add_class(&class);
                    }
                }
                Effect::RemoveClass(id, class) => {
                    if let Some(node) = self.doc.get_mut(id) {
                        node.remove_class(&class);
                    }
                }
                Effect::SetAttr(id, name, value) => self.doc.set_attr(id, &name, &value),
                Effect::Focus(id) => self.doc.focus(id),
                Effect::DeferFocus(id) => self.deferred_focus.push(id),
                Effect::Reposition(_) => self.reposition(host),
                Effect::ClearAdjust(_) => self.clear_adjust(host),
            }
        }
    }

    fn reposition(&mut self, host: NodeId) {
        let Some(record) = self.records.get(&host) else { return };
        let tip = record.tip;
        let stem = record.class_stem.clone();
        let rect = self.doc.get(tip).map(|n| n.rect).unwrap_or_default();
        let adjust = position::measure(rect, self.doc.viewport);
        if let Some(node) = self.doc.get_mut(tip) {
            for class in EdgeAdjust::all_classes(&stem) {
                node.remove_class(&class);
            }
            for class in adjust.classes(&stem) {
                node.add_class(&class);
            }
        }
    }

    fn clear_adjust(&mut self, host: NodeId) {
        let Some(record) = self.records.get(&host) else { return };
        let tip = record.tip;
        let stem = record.class_stem.clone();
        if let Some(node) = self.doc.get_mut(tip) {
            for class in EdgeAdjust::all_classes(&stem) {
                node.remove_class(&class);
            }
        }
    }

    /// Host whose trigger subtree contains `target`.
    fn widget_by_trigger(&self, target: NodeId) -> Option<NodeId> {
        self.records
            .values()
            .find(|r| self.doc.contains(r.trigger, target))
            .map(|r| r.host)
    }

    /// Host whose subtree contains `target`.
    fn widget_by_host(&self, target: NodeId) -> Option<NodeId> {
        self.records
            .values()
            .find(|r| self.doc.contains(r.host, target))
            .map(|r| r.host)
    }
}

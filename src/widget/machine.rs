//! Interaction state machine.
//!
//! Pure transition logic: one widget's record and an already-classified event
//! go in, the next state and a list of environment commands come out. The
//! controller applies the effects against the document; nothing here touches
//! the environment, so every transition is testable in isolation.
//!
//! Invariants:
//! 1. Mode never changes across a transition.
//! 2. Toggle tips never enter `Revealed`; transient tips never enter
//!    `Expanded`.
//! 3. `aria-expanded` is only ever written as the string `"true"` or
//!    `"false"`.

use super::{TipRecord, TipState};
use crate::dom::NodeId;

/// Events the machine consumes, already mapped to a specific widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipEvent {
    /// Pointer entered the trigger.
    PointerEnter,
    /// Pointer left the host.
    PointerLeave,
    /// Trigger received keyboard focus.
    FocusGained,
    /// Trigger lost keyboard focus.
    FocusLost,
    /// Trigger activated by click, Enter, Space, or touch.
    Activate,
    /// Document-level Escape.
    Dismiss,
    /// Focus moved outside the host without landing on the trigger.
    FocusExited,
    /// Click or touch landed outside both host and trigger.
    OutsideActivate,
    /// Another tip is opening; collapse quietly.
    Superseded,
}

/// A single environment command produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    AddClass(NodeId, String),
    RemoveClass(NodeId, String),
    SetAttr(NodeId, String, String),
    /// Move focus immediately.
    Focus(NodeId),
    /// Move focus on the next animation frame.
    DeferFocus(NodeId),
    /// Re-check the tip's bounding box against the viewport.
    Reposition(NodeId),
    /// Drop all viewport push flags.
    ClearAdjust(NodeId),
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: TipState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn stay(state: TipState) -> Self {
        Self { next: state, effects: Vec::new() }
    }
}

/// Compute the next state and effects for one widget.
pub fn transition(record: &TipRecord, event: TipEvent) -> Transition {
    match record.state {
        TipState::Hidden => from_hidden(record, event),
        TipState::Revealed => from_revealed(record, event),
        TipState::Expanded => from_expanded(record, event),
    }
}

fn from_hidden(record: &TipRecord, event: TipEvent) -> Transition {
    match event {
        TipEvent::PointerEnter | TipEvent::FocusGained if record.mode.is_transient() => Transition {
            next: TipState::Revealed,
            effects: vec![
                Effect::AddClass(record.host, show_class(record)),
                Effect::Reposition(record.host),
            ],
        },
        // Leaving a suppressed widget clears the suppression.
        TipEvent::PointerLeave | TipEvent::FocusLost => Transition {
            next: TipState::Hidden,
            effects: vec![
                Effect::RemoveClass(record.host, show_class(record)),
                Effect::RemoveClass(record.host, suppress_class(record)),
            ],
        },
        TipEvent::Activate if !record.mode.is_transient() => Transition {
            next: TipState::Expanded,
            effects: vec![
                Effect::AddClass(record.host, expanded_class(record)),
                Effect::SetAttr(record.trigger, "aria-expanded".into(), "true".into()),
                Effect::DeferFocus(record.tip),
                Effect::Reposition(record.host),
            ],
        },
        _ => Transition::stay(TipState::Hidden),
    }
}

fn from_revealed(record: &TipRecord, event: TipEvent) -> Transition {
    let hide = |extra: Option<Effect>| {
        let mut effects = vec![
            Effect::RemoveClass(record.host, show_class(record)),
            Effect::ClearAdjust(record.host),
        ];
        if let Some(effect) = extra {
            effects.insert(1, effect);
        }
        Transition { next: TipState::Hidden, effects }
    };
    match event {
        TipEvent::PointerLeave | TipEvent::FocusLost => {
            hide(Some(Effect::RemoveClass(record.host, suppress_class(record))))
        }
        // Escape hides and keeps hidden while hover or focus persists.
        TipEvent::Dismiss => hide(Some(Effect::AddClass(record.host, suppress_class(record)))),
        TipEvent::Superseded => hide(None),
        _ => Transition::stay(TipState::Revealed),
    }
}

fn from_expanded(record: &TipRecord, event: TipEvent) -> Transition {
    let collapse = |focus_trigger: bool| {
        let mut effects = vec![
            Effect::RemoveClass(record.host, expanded_class(record)),
            Effect::SetAttr(record.trigger, "aria-expanded".into(), "false".into()),
            Effect::ClearAdjust(record.host),
        ];
        if focus_trigger {
            effects.push(Effect::Focus(record.trigger));
        }
        Transition { next: TipState::Hidden, effects }
    };
    match event {
        TipEvent::Activate => collapse(false),
        TipEvent::Dismiss => collapse(true),
        TipEvent::FocusExited | TipEvent::OutsideActivate | TipEvent::Superseded => collapse(false),
        _ => Transition::stay(TipState::Expanded),
    }
}

fn show_class(record: &TipRecord) -> String {
    format!("{}--show", record.class_stem)
}

fn expanded_class(record: &TipRecord) -> String {
    format!("{}--expanded", record.class_stem)
}

fn suppress_class(record: &TipRecord) -> String {
    format!("{}--suppress", record.class_stem)
}

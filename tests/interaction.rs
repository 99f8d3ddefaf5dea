//! Tests for the runtime interaction state machine, driven end to end
//! through the controller.

mod common;

use common::{attr, enhanced, has_class, node};
use toggletip::widget::{DomEvent, Key, TipState};

const HOVER_PAIR: &str = r#"<div>
  <div id="save" data-tooltip="" data-tooltip-content="Saves the file">
    <button id="save-btn" data-tooltip-trigger="">Save</button>
  </div>
  <div id="open" data-tooltip="" data-tooltip-content="Opens a file">
    <button id="open-btn" data-tooltip-trigger="">Open</button>
  </div>
  <button id="elsewhere">Other</button>
</div>"#;

const TOGGLE_PAIR: &str = r#"<div>
  <div id="a" data-tooltip="toggle" data-tooltip-content="First details">
    <button id="a-btn" data-tooltip-trigger="">A</button>
  </div>
  <div id="b" data-tooltip="toggle" data-tooltip-content="Second details">
    <button id="b-btn" data-tooltip-trigger="">B</button>
  </div>
  <button id="elsewhere">Other</button>
</div>"#;

fn state(controller: &toggletip::TipController, host: &str) -> TipState {
    controller
        .record(node(controller, host))
        .expect("host enhanced")
        .state
}

#[test]
fn test_hover_reveals_and_hides() {
    let mut c = enhanced(HOVER_PAIR);
    c.handle_event(DomEvent::PointerOver(node(&c, "save-btn")));
    assert_eq!(state(&c, "save"), TipState::Revealed);
    assert!(has_class(&c, "save", "tooltip--show"));

    c.handle_event(DomEvent::PointerOut(node(&c, "save-btn")));
    assert_eq!(state(&c, "save"), TipState::Hidden);
    assert!(!has_class(&c, "save", "tooltip--show"));
}

#[test]
fn test_focus_reveals_and_blur_hides() {
    let mut c = enhanced(HOVER_PAIR);
    let btn = node(&c, "save-btn");
    c.handle_event(DomEvent::FocusIn(btn));
    assert_eq!(state(&c, "save"), TipState::Revealed);

    c.handle_event(DomEvent::FocusOut { node: btn, next: None });
    assert_eq!(state(&c, "save"), TipState::Hidden);
}

#[test]
fn test_escape_suppresses_revealed_tip_until_leave() {
    let mut c = enhanced(HOVER_PAIR);
    let btn = node(&c, "save-btn");
    c.handle_event(DomEvent::PointerOver(btn));
    c.handle_event(DomEvent::KeyDown(Key::Escape));

    assert_eq!(state(&c, "save"), TipState::Hidden);
    assert!(!has_class(&c, "save", "tooltip--show"));
    assert!(has_class(&c, "save", "tooltip--suppress"));

    c.handle_event(DomEvent::PointerOut(btn));
    assert!(!has_class(&c, "save", "tooltip--suppress"));
}

#[test]
fn test_revealing_second_tip_closes_first() {
    let mut c = enhanced(HOVER_PAIR);
    c.handle_event(DomEvent::PointerOver(node(&c, "save-btn")));
    c.handle_event(DomEvent::PointerOver(node(&c, "open-btn")));

    assert_eq!(state(&c, "save"), TipState::Hidden);
    assert_eq!(state(&c, "open"), TipState::Revealed);
    assert!(!has_class(&c, "save", "tooltip--show"));
    // Quiet close, not an Escape-style suppression.
    assert!(!has_class(&c, "save", "tooltip--suppress"));
}

#[test]
fn test_toggle_expands_with_deferred_focus() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::Click(node(&c, "a-btn")));

    assert_eq!(state(&c, "a"), TipState::Expanded);
    assert!(has_class(&c, "a", "tooltip--expanded"));
    assert_eq!(attr(&c, "a-btn", "aria-expanded").as_deref(), Some("true"));
    assert_eq!(c.active(), Some(node(&c, "a")));

    // Focus lands on the tip only on the next frame.
    let tip = c.record(node(&c, "a")).unwrap().tip;
    assert_ne!(c.document().focused(), Some(tip));
    c.animation_frame();
    assert_eq!(c.document().focused(), Some(tip));
}

#[test]
fn test_second_activation_collapses() {
    let mut c = enhanced(TOGGLE_PAIR);
    let btn = node(&c, "a-btn");
    c.handle_event(DomEvent::Click(btn));
    c.handle_event(DomEvent::Click(btn));

    assert_eq!(state(&c, "a"), TipState::Hidden);
    assert_eq!(attr(&c, "a-btn", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(c.active(), None);
}

#[test]
fn test_only_one_tip_expanded_globally() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::Click(node(&c, "a-btn")));
    c.handle_event(DomEvent::Click(node(&c, "b-btn")));

    assert_eq!(state(&c, "a"), TipState::Hidden);
    assert_eq!(state(&c, "b"), TipState::Expanded);
    assert_eq!(attr(&c, "a-btn", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(attr(&c, "b-btn", "aria-expanded").as_deref(), Some("true"));
    assert_eq!(c.active(), Some(node(&c, "b")));
}

#[test]
fn test_escape_collapses_and_restores_focus() {
    let mut c = enhanced(TOGGLE_PAIR);
    let btn = node(&c, "a-btn");
    c.handle_event(DomEvent::Click(btn));
    c.animation_frame();
    c.handle_event(DomEvent::KeyDown(Key::Escape));

    assert_eq!(state(&c, "a"), TipState::Hidden);
    assert_eq!(attr(&c, "a-btn", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(c.document().focused(), Some(btn));
    assert_eq!(c.active(), None);
}

#[test]
fn test_outside_click_collapses_without_focus_restore() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::Click(node(&c, "a-btn")));
    c.animation_frame();
    c.handle_event(DomEvent::Click(node(&c, "elsewhere")));

    assert_eq!(state(&c, "a"), TipState::Hidden);
    assert_eq!(attr(&c, "a-btn", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(c.active(), None);
    assert_ne!(c.document().focused(), Some(node(&c, "a-btn")));
}

#[test]
fn test_click_inside_tip_keeps_it_open() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::Click(node(&c, "a-btn")));
    let tip = c.record(node(&c, "a")).unwrap().tip;
    c.handle_event(DomEvent::Click(tip));

    assert_eq!(state(&c, "a"), TipState::Expanded);
    assert_eq!(c.active(), Some(node(&c, "a")));
}

#[test]
fn test_tab_out_collapses_quietly() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::Click(node(&c, "a-btn")));
    c.animation_frame();
    let tip = c.record(node(&c, "a")).unwrap().tip;

    c.handle_event(DomEvent::FocusOut { node: tip, next: Some(node(&c, "elsewhere")) });

    assert_eq!(state(&c, "a"), TipState::Hidden);
    assert_eq!(attr(&c, "a-btn", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(c.active(), None);
    // Focus stays where the Tab put it.
    assert_eq!(c.document().focused(), Some(node(&c, "elsewhere")));
}

#[test]
fn test_tab_back_to_trigger_keeps_expanded() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::Click(node(&c, "a-btn")));
    c.animation_frame();
    let tip = c.record(node(&c, "a")).unwrap().tip;

    c.handle_event(DomEvent::FocusOut { node: tip, next: Some(node(&c, "a-btn")) });
    assert_eq!(state(&c, "a"), TipState::Expanded);
}

#[test]
fn test_enter_and_space_activate_focused_trigger() {
    let mut c = enhanced(TOGGLE_PAIR);
    let btn = node(&c, "a-btn");
    c.handle_event(DomEvent::FocusIn(btn));
    c.handle_event(DomEvent::KeyDown(Key::Enter));
    assert_eq!(state(&c, "a"), TipState::Expanded);

    c.handle_event(DomEvent::KeyDown(Key::Space));
    assert_eq!(state(&c, "a"), TipState::Hidden);
}

#[test]
fn test_touch_behaves_like_click() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::TouchEnd(node(&c, "a-btn")));
    assert_eq!(state(&c, "a"), TipState::Expanded);

    c.handle_event(DomEvent::TouchEnd(node(&c, "elsewhere")));
    assert_eq!(state(&c, "a"), TipState::Hidden);
}

#[test]
fn test_hover_does_not_affect_toggle_tip() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::PointerOver(node(&c, "a-btn")));
    assert_eq!(state(&c, "a"), TipState::Hidden);

    c.handle_event(DomEvent::Click(node(&c, "a-btn")));
    c.handle_event(DomEvent::PointerOut(node(&c, "a-btn")));
    assert_eq!(state(&c, "a"), TipState::Expanded);
}

#[test]
fn test_escape_with_nothing_shown_is_a_noop() {
    let mut c = enhanced(TOGGLE_PAIR);
    c.handle_event(DomEvent::KeyDown(Key::Escape));
    assert_eq!(state(&c, "a"), TipState::Hidden);
    assert_eq!(state(&c, "b"), TipState::Hidden);
}

#[test]
fn test_hover_tip_click_elsewhere_collapses_expanded_toggle() {
    // A transient trigger's click is still an outside activation for the
    // expanded toggle elsewhere on the page.
    let fragment = r#"<div>
      <div id="a" data-tooltip="toggle" data-tooltip-content="Details">
        <button id="a-btn" data-tooltip-trigger="">A</button>
      </div>
      <div id="save" data-tooltip="" data-tooltip-content="Saves the file">
        <button id="save-btn" data-tooltip-trigger="">Save</button>
      </div>
    </div>"#;
    let mut c = enhanced(fragment);
    c.handle_event(DomEvent::Click(node(&c, "a-btn")));
    assert_eq!(state(&c, "a"), TipState::Expanded);

    c.handle_event(DomEvent::Click(node(&c, "save-btn")));
    assert_eq!(state(&c, "a"), TipState::Hidden);
    assert_eq!(c.active(), None);
}

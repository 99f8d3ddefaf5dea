//! Snapshot tests for the diagnostic tree dump.

mod common;

use common::enhanced;
use toggletip::{dump, script};

#[test]
fn test_dump_description_widget() {
    let controller = enhanced(
        r#"<div id="save" data-tooltip="" data-tooltip-content="Saves the file">
             <button id="save-btn" data-tooltip-trigger="">Save</button>
           </div>"#,
    );

    insta::assert_snapshot!(dump::dump_tree(&controller), @r#"
<div id="save" data-tooltip="">  [description hidden]
  <button id="save-btn" data-tooltip-trigger="">
    "Save"
  <span id="save_tip" class="tooltip" data-tooltip-tip="" role="tooltip">
    "Saves the file"
"#);
}

#[test]
fn test_dump_expanded_toggle_widget() {
    let mut controller = enhanced(
        r#"<div id="info" data-tooltip="toggle" data-tooltip-content="More details here">
             <button id="info-btn" data-tooltip-trigger="">Info</button>
           </div>"#,
    );
    script::run_script(&mut controller, "click info-btn\nframe\n").unwrap();

    insta::assert_snapshot!(dump::dump_tree(&controller), @r#"
<div id="info" class="tooltip--expanded" data-tooltip="toggle">  [toggle expanded]
  <button id="info-btn" aria-controls="info_tip" aria-expanded="true" data-tooltip-trigger="">
    "Info"
  <span id="info_tip" class="tooltip" data-tooltip-tip="" tabindex="-1">
    "More details here"
"#);
}

#[test]
fn test_dump_synthesized_trigger() {
    let controller = enhanced(r#"<div id="x" data-tooltip="" data-tooltip-content="Detail text"/>"#);

    insta::assert_snapshot!(dump::dump_tree(&controller), @r#"
<div id="x" data-tooltip="">  [toggle hidden]
  <button class="tooltip__trigger" aria-controls="x_tip" aria-expanded="false" aria-label="more info" data-tooltip-trigger="toggle" type="button">
    <span class="tooltip__icon" aria-hidden="true">
      "i"
  <span id="x_tip" class="tooltip" data-tooltip-tip="" tabindex="-1">
    "Detail text"
"#);
}

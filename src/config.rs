//! Widget configuration.
//!
//! Attribute names and presentation class names consumed by the enhancement
//! pass. Defaults match the documented markup surface; callers override
//! individual fields in code or supply a JSON options file to the CLI.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Attribute and class-name configuration for the tooltip engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipOptions {
    /// Host marker attribute; its value selects the declared mode.
    #[serde(default = "default_host_attr")]
    pub host_attr: String,
    /// Inline tip text, highest priority content source.
    #[serde(default = "default_content_attr")]
    pub content_attr: String,
    /// Id of an external element supplying tip text.
    #[serde(default = "default_source_attr")]
    pub source_attr: String,
    /// Marks a descendant as the fallback tip content element.
    #[serde(default = "default_tip_attr")]
    pub tip_attr: String,
    /// Marks a descendant as the trigger.
    #[serde(default = "default_trigger_attr")]
    pub trigger_attr: String,
    /// Accessible name for a synthesized trigger.
    #[serde(default = "default_label_attr")]
    pub label_attr: String,
    /// Insertion point marker for a synthesized trigger.
    #[serde(default = "default_placement_attr")]
    pub placement_attr: String,
    /// Per-host override of the presentation class stem.
    #[serde(default = "default_class_attr")]
    pub class_attr: String,
    /// Default presentation class stem.
    #[serde(default = "default_tip_class")]
    pub tip_class: String,
    /// Accessible name used when a synthesized trigger carries no label attribute.
    #[serde(default = "default_trigger_label")]
    pub trigger_label: String,
    /// Prefix for generated host ids.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_host_attr() -> String { "data-tooltip".into() }
fn default_content_attr() -> String { "data-tooltip-content".into() }
fn default_source_attr() -> String { "data-tooltip-source".into() }
fn default_tip_attr() -> String { "data-tooltip-tip".into() }
fn default_trigger_attr() -> String { "data-tooltip-trigger".into() }
fn default_label_attr() -> String { "data-tooltip-label".into() }
fn default_placement_attr() -> String { "data-tooltip-placement".into() }
fn default_class_attr() -> String { "data-tooltip-class".into() }
fn default_tip_class() -> String { "tooltip".into() }
fn default_trigger_label() -> String { "more info".into() }
fn default_id_prefix() -> String { "tt_".into() }

impl Default for TipOptions {
    fn default() -> Self {
        Self {
            host_attr: default_host_attr(),
            content_attr: default_content_attr(),
            source_attr: default_source_attr(),
            tip_attr: default_tip_attr(),
            trigger_attr: default_trigger_attr(),
            label_attr: default_label_attr(),
            placement_attr: default_placement_attr(),
            class_attr: default_class_attr(),
            tip_class: default_tip_class(),
            trigger_label: default_trigger_label(),
            id_prefix: default_id_prefix(),
        }
    }
}

impl TipOptions {
    /// Load options from a JSON file. Absent fields keep their defaults.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

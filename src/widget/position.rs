//! Viewport edge adjustment.
//!
//! Advisory repositioning flags for a visible tip: each viewport edge the
//! tip's bounding box crosses toggles the opposite push direction. Purely
//! presentational; ARIA semantics are never affected.

use crate::dom::Rect;

/// Push directions applied when the tip crosses a viewport edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeAdjust {
    pub push_up: bool,
    pub push_down: bool,
    pub push_left: bool,
    pub push_right: bool,
}

impl EdgeAdjust {
    /// Class names for the set flags, derived from the stem.
    pub fn classes(&self, stem: &str) -> Vec<String> {
        let mut out = Vec::new();
        if self.push_up {
            out.push(format!("{stem}--push-up"));
        }
        if self.push_down {
            out.push(format!("{stem}--push-down"));
        }
        if self.push_left {
            out.push(format!("{stem}--push-left"));
        }
        if self.push_right {
            out.push(format!("{stem}--push-right"));
        }
        out
    }

    /// All four class names, for clearing.
    pub fn all_classes(stem: &str) -> [String; 4] {
        [
            format!("{stem}--push-up"),
            format!("{stem}--push-down"),
            format!("{stem}--push-left"),
            format!("{stem}--push-right"),
        ]
    }
}

/// Compare a tip's bounding box against the viewport.
pub fn measure(rect: Rect, viewport: (f32, f32)) -> EdgeAdjust {
    EdgeAdjust {
        push_down: rect.y < 0.0,
        push_up: rect.bottom() > viewport.1,
        push_right: rect.x < 0.0,
        push_left: rect.right() > viewport.0,
    }
}

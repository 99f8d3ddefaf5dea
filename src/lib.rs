//! Accessible tooltip and toggletip widgets.
//!
//! Enhances markup flagged with data attributes into accessible tooltip or
//! toggletip widgets over a headless document model: resolves tip content
//! from a prioritized source chain, wires ARIA linkage, synthesizes missing
//! triggers, and drives visibility through an explicit interaction state
//! machine.

pub mod config;
pub mod dom;
pub mod dump;
pub mod error;
pub mod markup;
pub mod script;
pub mod widget;

pub use config::TipOptions;
pub use error::{Error, Result};
pub use widget::TipController;

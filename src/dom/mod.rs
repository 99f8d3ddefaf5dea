//! Headless document model.
//!
//! A minimal element tree standing in for the DOM: enough attribute, class,
//! query, focus, and geometry surface for the tooltip engine to run and be
//! tested without a rendering environment.

mod document;
mod node;

pub use document::Document;
pub use node::{Node, NodeId, Rect};

//! Tree structure built from mind-map input.
//!
//! This module validates flat node and edge lists and exposes them as a
//! [`MindMapTree`] for the layout and routing passes.

mod graph_base;
mod tree;

pub(crate) use tree::MindMapTree;

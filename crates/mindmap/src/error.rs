//! Error types for mind-map layout operations.
//!
//! This module provides the main error type [`MindMapError`] and the
//! [`GraphError`] taxonomy of malformed inputs. Every [`GraphError`] is
//! detected by validation before any placement starts.

use std::io;

use thiserror::Error;

use mindmap_core::identifier::Id;

/// The main error type for mind-map operations.
///
/// # Diagnostic Variants
///
/// The `Document` variant keeps the source text next to the JSON error so
/// that callers can point at the offending line and column.
#[derive(Debug, Error)]
pub enum MindMapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {err}")]
    Document { err: serde_json::Error, src: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MindMapError {
    /// Create a new `Document` error with the associated source text.
    pub fn new_document_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Document {
            err,
            src: src.into(),
        }
    }
}

/// A node/edge list that does not describe a single rooted tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node `{0}` is defined more than once")]
    DuplicateNode(Id),

    #[error("edge `{edge}` refers to unknown node `{node}`")]
    UnknownNode { edge: Id, node: Id },

    #[error("node `{node}` has more than one parent (`{first}` and `{second}`)")]
    MultipleParents { node: Id, first: Id, second: Id },

    #[error("no root node: exactly one node must have level 0")]
    MissingRoot,

    #[error("multiple root nodes: {}", format_ids(.0))]
    MultipleRoots(Vec<Id>),

    #[error("cycle detected through node `{0}`")]
    Cycle(Id),

    #[error("node `{0}` is not reachable from the root")]
    Unreachable(Id),

    #[error("node `{node}` has level {found} but sits at depth {expected}")]
    LevelMismatch { node: Id, expected: u32, found: u32 },

    #[error("branch node `{0}` has no side")]
    MissingSide(Id),
}

impl GraphError {
    /// Returns a short hint on how to fix the input, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GraphError::DuplicateNode(_) => Some("node ids must be unique"),
            GraphError::UnknownNode { .. } => {
                Some("every edge source and target must name a node in the node list")
            }
            GraphError::MultipleParents { .. } => {
                Some("a mind map is a tree: every node except the root has exactly one incoming edge")
            }
            GraphError::MissingRoot | GraphError::MultipleRoots(_) => {
                Some("mark the central topic with level 0 and every other node with level 1 or more")
            }
            GraphError::Cycle(_) => Some("remove the edge that points back to an ancestor"),
            GraphError::Unreachable(_) => Some("connect the node to the tree with an edge from its parent"),
            GraphError::LevelMismatch { .. } => {
                Some("a node's level must equal its parent's level plus one")
            }
            GraphError::MissingSide(_) => {
                Some("set `direction` to `left` or `right`, or enable `auto_balance`")
            }
        }
    }
}

fn format_ids(ids: &[Id]) -> String {
    ids.iter()
        .map(|id| format!("`{id}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

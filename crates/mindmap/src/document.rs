//! The JSON document exchanged with the drawing layer.
//!
//! Input documents carry `nodes` and `edges`; both default to empty lists.
//! A [`Layout`] serializes to the same shape with positions filled in and
//! edges decorated with routing hints.

use serde::{Deserialize, Serialize};

use mindmap_core::{
    edge::{DecoratedEdge, Edge},
    node::Node,
};

/// A mind map as read from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindMapDocument {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl MindMapDocument {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Positioned nodes and decorated edges, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    nodes: Vec<Node>,
    edges: Vec<DecoratedEdge>,
}

impl Layout {
    pub(crate) fn new(nodes: Vec<Node>, edges: Vec<DecoratedEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DecoratedEdge] {
        &self.edges
    }

    /// Returns the node with the given id, if present.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use mindmap_core::node::Side;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc: MindMapDocument = serde_json::from_value(json!({
            "nodes": [
                { "id": "root", "data": { "label": "Topic", "level": 0, "icon": "🎯" } },
                {
                    "id": "a",
                    "data": { "label": "A", "level": 1, "direction": "left" },
                    "position": { "x": 5.0, "y": 7.0 }
                }
            ],
            "edges": [ { "id": "e1", "source": "root", "target": "a" } ]
        }))
        .unwrap();

        assert_eq!(doc.nodes().len(), 2);
        assert_eq!(doc.nodes()[0].data().icon(), Some("🎯"));
        assert_eq!(doc.nodes()[1].data().side(), Some(Side::Left));
        assert_eq!(doc.edges()[0].target(), "a");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let doc: MindMapDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.nodes().is_empty());
        assert!(doc.edges().is_empty());
    }

    #[test]
    fn test_empty_layout_serializes_to_empty_lists() {
        let value = serde_json::to_value(Layout::default()).unwrap();
        assert_eq!(value, json!({ "nodes": [], "edges": [] }));
    }
}

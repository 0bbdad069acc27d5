//! Mind-map edges and the rendering hints attached to them by layout.

use serde::{Deserialize, Serialize};

use crate::{identifier::Id, node::Side};

/// A directed parent→child edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: Id,
    source: Id,
    target: Id,
}

impl Edge {
    pub fn new(id: impl Into<Id>, source: impl Into<Id>, target: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }
}

/// How the drawing layer should route an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Routing {
    /// A straight line. Used when the target is an only child.
    Direct,
    /// An orthogonal or curved path that keeps sibling edges apart.
    Routed,
}

/// Named connection points on both ends of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handles {
    #[serde(rename = "sourceHandle")]
    source: Side,
    #[serde(rename = "targetHandle")]
    target: Side,
}

impl Handles {
    pub fn new(source: Side, target: Side) -> Self {
        Self { source, target }
    }

    /// Handles for an edge leaving the root toward a branch on `side`.
    ///
    /// The line leaves the root on `side` and enters the branch on the face
    /// pointing back at the root.
    pub fn toward(side: Side) -> Self {
        Self::new(side, side.opposite())
    }

    pub fn source(self) -> Side {
        self.source
    }

    pub fn target(self) -> Side {
        self.target
    }
}

/// An edge's rank within the group of edges sharing its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Siblings {
    sibling_index: usize,
    total_siblings: usize,
}

impl Siblings {
    pub fn new(sibling_index: usize, total_siblings: usize) -> Self {
        debug_assert!(sibling_index < total_siblings);
        Self {
            sibling_index,
            total_siblings,
        }
    }

    /// 0-based rank of the edge within its group.
    pub fn index(self) -> usize {
        self.sibling_index
    }

    /// Number of edges in the group.
    pub fn total(self) -> usize {
        self.total_siblings
    }
}

/// An [`Edge`] decorated with routing hints for the drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedEdge {
    #[serde(flatten)]
    edge: Edge,
    routing: Routing,
    #[serde(flatten)]
    handles: Option<Handles>,
    #[serde(rename = "data")]
    siblings: Siblings,
}

impl DecoratedEdge {
    pub fn new(edge: Edge, routing: Routing, handles: Option<Handles>, siblings: Siblings) -> Self {
        Self {
            edge,
            routing,
            handles,
            siblings,
        }
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    pub fn routing(&self) -> Routing {
        self.routing
    }

    pub fn handles(&self) -> Option<Handles> {
        self.handles
    }

    pub fn siblings(&self) -> Siblings {
        self.siblings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let edge = Edge::new("e1", "root", "a");
        assert_eq!(edge.id(), "e1");
        assert_eq!(edge.source(), "root");
        assert_eq!(edge.target(), "a");
    }

    #[test]
    fn test_edge_deserialize() {
        let json = r#"{ "id": "edge-root-a", "source": "root", "target": "a" }"#;
        let edge: Edge = serde_json::from_str(json).unwrap();
        assert_eq!(edge, Edge::new("edge-root-a", "root", "a"));
    }

    #[test]
    fn test_handles_toward() {
        let right = Handles::toward(Side::Right);
        assert_eq!(right.source(), Side::Right);
        assert_eq!(right.target(), Side::Left);

        let left = Handles::toward(Side::Left);
        assert_eq!(left.source(), Side::Left);
        assert_eq!(left.target(), Side::Right);
    }

    #[test]
    fn test_decorated_edge_serialize_with_handles() {
        let decorated = DecoratedEdge::new(
            Edge::new("e", "root", "a"),
            Routing::Routed,
            Some(Handles::toward(Side::Left)),
            Siblings::new(1, 3),
        );

        let value = serde_json::to_value(&decorated).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "e",
                "source": "root",
                "target": "a",
                "routing": "routed",
                "sourceHandle": "left",
                "targetHandle": "right",
                "data": { "siblingIndex": 1, "totalSiblings": 3 }
            })
        );
    }

    #[test]
    fn test_decorated_edge_serialize_without_handles() {
        let decorated = DecoratedEdge::new(
            Edge::new("e", "a", "a1"),
            Routing::Direct,
            None,
            Siblings::new(0, 1),
        );

        let value = serde_json::to_value(&decorated).unwrap();
        assert_eq!(value["routing"], "direct");
        assert!(value.get("sourceHandle").is_none());
        assert!(value.get("targetHandle").is_none());
        assert_eq!(value["data"]["totalSiblings"], 1);
    }
}

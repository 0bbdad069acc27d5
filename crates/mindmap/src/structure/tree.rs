//! The validated mind-map tree.
//!
//! [`MindMapTree::build`] is the validation pass: it turns flat node and edge
//! lists into a tree or rejects them with a [`GraphError`]. Everything
//! downstream (descendant counting, placement, routing) relies on the
//! invariants established here and does not re-check them.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use petgraph::{algo::toposort, graph::DiGraph, visit::Dfs};

use mindmap_core::{edge::Edge, identifier::Id, node::Node};

use super::graph_base::GraphInternal;
use crate::error::GraphError;

/// Per-node data kept in the graph.
#[derive(Debug, Clone, Copy)]
struct TreeNode {
    /// Position in the caller's node list, which orders siblings.
    index: usize,
    level: u32,
}

/// A rooted tree of mind-map nodes.
///
/// Invariants:
/// - exactly one root, at level 0;
/// - every other node has exactly one parent and is reachable from the root;
/// - no cycles;
/// - every node's level equals its depth.
#[derive(Debug)]
pub(crate) struct MindMapTree {
    graph: GraphInternal<TreeNode>,
    root: Id,
}

impl MindMapTree {
    /// Validates `nodes` and `edges` and builds the tree.
    ///
    /// Checks run in this order, and the first failure is returned:
    /// duplicate node ids, unknown edge endpoints, nodes with several
    /// parents, root count, cycles, reachability, levels.
    pub(crate) fn build(nodes: &[Node], edges: &[Edge]) -> Result<Self, GraphError> {
        let mut graph = GraphInternal::new();

        for (index, node) in nodes.iter().enumerate() {
            let tree_node = TreeNode {
                index,
                level: node.level(),
            };
            if graph.add_node(node.id(), tree_node).is_some() {
                return Err(GraphError::DuplicateNode(node.id()));
            }
        }

        for edge in edges {
            for endpoint in [edge.source(), edge.target()] {
                if !graph.contains_node(endpoint) {
                    return Err(GraphError::UnknownNode {
                        edge: edge.id(),
                        node: endpoint,
                    });
                }
            }
            graph.add_edge(edge.source(), edge.target());
        }

        for (id, _) in graph.nodes() {
            let mut parents = graph.incoming_sources(id);
            if let (Some(first), Some(second)) = (parents.next(), parents.next()) {
                return Err(GraphError::MultipleParents {
                    node: id,
                    first,
                    second,
                });
            }
        }

        let root = find_root(&graph)?;
        check_acyclic_and_connected(&graph, root)?;

        let tree = Self { graph, root };
        tree.check_levels()?;

        debug!(root:% = root, nodes = tree.len(); "Mind map tree validated");
        Ok(tree)
    }

    /// Returns the level-0 node.
    pub(crate) fn root(&self) -> Id {
        self.root
    }

    /// Returns the number of nodes in the tree.
    pub(crate) fn len(&self) -> usize {
        self.graph.nodes_count()
    }

    /// Returns the level of a node, or `None` if the node is not in the tree.
    pub(crate) fn level(&self, id: Id) -> Option<u32> {
        self.graph.node(id).map(|node| node.level)
    }

    /// Returns the direct children of `id` in node-list order.
    pub(crate) fn children(&self, id: Id) -> Vec<Id> {
        let mut children: Vec<(usize, Id)> = self
            .graph
            .outgoing_targets(id)
            .filter_map(|child| self.graph.node(child).map(|node| (node.index, child)))
            .collect();
        children.sort_by_key(|(index, _)| *index);
        children.into_iter().map(|(_, child)| child).collect()
    }

    /// Returns the number of edges leaving `id`.
    pub(crate) fn out_degree(&self, id: Id) -> usize {
        self.graph.out_degree(id)
    }

    /// Returns the level-1 nodes in node-list order.
    pub(crate) fn branches(&self) -> Vec<Id> {
        self.children(self.root)
    }

    fn check_levels(&self) -> Result<(), GraphError> {
        let mut stack = vec![(self.root, 0u32)];
        while let Some((id, depth)) = stack.pop() {
            let level = self.level(id).unwrap_or(depth);
            if level != depth {
                return Err(GraphError::LevelMismatch {
                    node: id,
                    expected: depth,
                    found: level,
                });
            }
            trace!(node:% = id, depth = depth; "Level checked");
            stack.extend(self.children(id).into_iter().rev().map(|c| (c, depth + 1)));
        }
        Ok(())
    }
}

fn find_root(graph: &GraphInternal<TreeNode>) -> Result<Id, GraphError> {
    let roots: Vec<Id> = graph
        .nodes()
        .filter(|(_, node)| node.level == 0)
        .map(|(id, _)| id)
        .collect();

    match roots.as_slice() {
        [] => Err(GraphError::MissingRoot),
        [root] => Ok(*root),
        _ => Err(GraphError::MultipleRoots(roots)),
    }
}

/// Rejects cycles and nodes the root cannot reach.
fn check_acyclic_and_connected(
    graph: &GraphInternal<TreeNode>,
    root: Id,
) -> Result<(), GraphError> {
    let mut dag = DiGraph::<Id, ()>::with_capacity(graph.nodes_count(), graph.nodes_count());
    let indices: HashMap<Id, _> = graph
        .nodes()
        .map(|(id, _)| (id, dag.add_node(id)))
        .collect();
    for (source, target) in graph.edges() {
        dag.add_edge(indices[&source], indices[&target], ());
    }

    if let Err(cycle) = toposort(&dag, None) {
        return Err(GraphError::Cycle(dag[cycle.node_id()]));
    }

    let mut reached = HashSet::new();
    let mut dfs = Dfs::new(&dag, indices[&root]);
    while let Some(idx) = dfs.next(&dag) {
        reached.insert(idx);
    }

    match graph
        .nodes()
        .find(|(id, _)| !reached.contains(&indices[id]))
    {
        Some((id, _)) => Err(GraphError::Unreachable(id)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use mindmap_core::node::NodeData;

    use super::*;

    fn node(id: &str, level: u32) -> Node {
        Node::new(id, NodeData::new(id.to_uppercase(), level))
    }

    fn edge(source: &str, target: &str) -> Edge {
        Edge::new(format!("{source}->{target}").as_str(), source, target)
    }

    #[test]
    fn test_build_simple_tree() {
        let nodes = vec![node("r", 0), node("a", 1), node("b", 1), node("b1", 2)];
        let edges = vec![edge("r", "a"), edge("r", "b"), edge("b", "b1")];

        let tree = MindMapTree::build(&nodes, &edges).unwrap();

        assert_eq!(tree.root(), "r");
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.branches(), vec![Id::new("a"), Id::new("b")]);
        assert_eq!(tree.children(Id::new("b")), vec![Id::new("b1")]);
        assert!(tree.children(Id::new("a")).is_empty());
        assert_eq!(tree.out_degree(Id::new("r")), 2);
        assert_eq!(tree.level(Id::new("b1")), Some(2));
        assert_eq!(tree.level(Id::new("missing")), None);
    }

    #[test]
    fn test_root_only() {
        let tree = MindMapTree::build(&[node("r", 0)], &[]).unwrap();
        assert_eq!(tree.root(), "r");
        assert!(tree.branches().is_empty());
    }

    #[test]
    fn test_children_follow_node_order_not_edge_order() {
        let nodes = vec![node("r", 0), node("first", 1), node("second", 1)];
        let edges = vec![edge("r", "second"), edge("r", "first")];

        let tree = MindMapTree::build(&nodes, &edges).unwrap();
        assert_eq!(tree.branches(), vec![Id::new("first"), Id::new("second")]);
    }

    #[test]
    fn test_root_need_not_come_first() {
        let nodes = vec![node("a", 1), node("r", 0)];
        let tree = MindMapTree::build(&nodes, &[edge("r", "a")]).unwrap();

        assert_eq!(tree.root(), "r");
        assert_eq!(tree.branches(), vec![Id::new("a")]);
    }

    #[test]
    fn test_duplicate_node() {
        let nodes = vec![node("r", 0), node("a", 1), node("a", 1)];
        let err = MindMapTree::build(&nodes, &[edge("r", "a")]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode(Id::new("a")));
    }

    #[test]
    fn test_unknown_target() {
        let nodes = vec![node("r", 0)];
        let err = MindMapTree::build(&nodes, &[edge("r", "ghost")]).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownNode {
                edge: Id::new("r->ghost"),
                node: Id::new("ghost"),
            }
        );
    }

    #[test]
    fn test_unknown_source() {
        let nodes = vec![node("r", 0), node("a", 1)];
        let err = MindMapTree::build(&nodes, &[edge("phantom", "a")]).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { node, .. } if node == "phantom"));
    }

    #[test]
    fn test_multiple_parents() {
        let nodes = vec![node("r", 0), node("a", 1), node("b", 1), node("x", 2)];
        let edges = vec![
            edge("r", "a"),
            edge("r", "b"),
            edge("a", "x"),
            edge("b", "x"),
        ];

        let err = MindMapTree::build(&nodes, &edges).unwrap_err();
        assert_eq!(
            err,
            GraphError::MultipleParents {
                node: Id::new("x"),
                first: Id::new("a"),
                second: Id::new("b"),
            }
        );
    }

    #[test]
    fn test_missing_root() {
        let nodes = vec![node("a", 1), node("b", 1)];
        let err = MindMapTree::build(&nodes, &[]).unwrap_err();
        assert_eq!(err, GraphError::MissingRoot);
    }

    #[test]
    fn test_multiple_roots() {
        let nodes = vec![node("r1", 0), node("r2", 0)];
        let err = MindMapTree::build(&nodes, &[]).unwrap_err();
        assert_eq!(
            err,
            GraphError::MultipleRoots(vec![Id::new("r1"), Id::new("r2")])
        );
    }

    #[test]
    fn test_cycle_detected() {
        let nodes = vec![node("r", 0), node("a", 1), node("b", 2), node("c", 3)];
        let edges = vec![edge("r", "a"), edge("b", "c"), edge("c", "b")];

        let err = MindMapTree::build(&nodes, &edges).unwrap_err();
        assert!(
            matches!(err, GraphError::Cycle(id) if id == "b" || id == "c"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let nodes = vec![node("r", 0), node("a", 1)];
        let edges = vec![edge("r", "a"), edge("a", "a")];

        let err = MindMapTree::build(&nodes, &edges).unwrap_err();
        // "a" already has a parent, so the self-loop is a second one
        assert!(matches!(err, GraphError::MultipleParents { .. }));

        let lonely = vec![node("r", 0), node("z", 1)];
        let err = MindMapTree::build(&lonely, &[edge("z", "z")]).unwrap_err();
        assert_eq!(err, GraphError::Cycle(Id::new("z")));
    }

    #[test]
    fn test_unreachable_node() {
        let nodes = vec![node("r", 0), node("a", 1), node("orphan", 1)];
        let err = MindMapTree::build(&nodes, &[edge("r", "a")]).unwrap_err();
        assert_eq!(err, GraphError::Unreachable(Id::new("orphan")));
    }

    #[test]
    fn test_level_mismatch() {
        let nodes = vec![node("r", 0), node("a", 1), node("deep", 1)];
        let edges = vec![edge("r", "a"), edge("a", "deep")];

        let err = MindMapTree::build(&nodes, &edges).unwrap_err();
        assert_eq!(
            err,
            GraphError::LevelMismatch {
                node: Id::new("deep"),
                expected: 2,
                found: 1,
            }
        );
    }
}

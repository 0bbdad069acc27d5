//! Side assignment for level-1 branches.

use std::collections::HashMap;

use log::debug;

use mindmap_core::{identifier::Id, node::Node, node::Side};

use crate::{error::GraphError, structure::MindMapTree};

/// Resolves the side of every level-1 node.
///
/// Declared sides are always kept. With `auto_balance`, a map that declares
/// no sides at all is split in half (the first half of the branches, in node
/// order, goes left) and a map that declares only some sides places the rest
/// on the right. Without it, every branch must declare its side.
pub(crate) fn resolve_sides(
    tree: &MindMapTree,
    nodes: &[Node],
    auto_balance: bool,
) -> Result<HashMap<Id, Side>, GraphError> {
    let declared: HashMap<Id, Side> = nodes
        .iter()
        .filter(|node| node.is_branch())
        .filter_map(|node| node.data().side().map(|side| (node.id(), side)))
        .collect();

    let branches = tree.branches();
    let any_declared = branches.iter().any(|id| declared.contains_key(id));
    let left_count = if any_declared { 0 } else { branches.len() / 2 };

    let mut sides = HashMap::with_capacity(branches.len());
    for (index, branch) in branches.into_iter().enumerate() {
        let side = match declared.get(&branch) {
            Some(side) => *side,
            None if !auto_balance => return Err(GraphError::MissingSide(branch)),
            None if index < left_count => Side::Left,
            None => Side::Right,
        };
        sides.insert(branch, side);
    }

    debug!(
        branches = sides.len(),
        left = sides.values().filter(|side| **side == Side::Left).count(),
        balanced = !any_declared && auto_balance;
        "Sides resolved"
    );
    Ok(sides)
}

#[cfg(test)]
mod tests {
    use mindmap_core::{edge::Edge, node::NodeData};

    use super::*;

    fn map(branches: &[(&str, Option<Side>)]) -> (MindMapTree, Vec<Node>) {
        let mut nodes = vec![Node::new("root", NodeData::new("Root", 0))];
        let mut edges = Vec::new();
        for (name, side) in branches {
            let mut data = NodeData::new(*name, 1);
            if let Some(side) = side {
                data = data.with_side(*side);
            }
            nodes.push(Node::new(*name, data));
            edges.push(Edge::new(format!("root-{name}").as_str(), "root", *name));
        }
        let tree = MindMapTree::build(&nodes, &edges).unwrap();
        (tree, nodes)
    }

    #[test]
    fn test_declared_sides_kept() {
        let (tree, nodes) = map(&[("a", Some(Side::Left)), ("b", Some(Side::Right))]);

        let sides = resolve_sides(&tree, &nodes, false).unwrap();

        assert_eq!(sides[&Id::new("a")], Side::Left);
        assert_eq!(sides[&Id::new("b")], Side::Right);
    }

    #[test]
    fn test_balance_when_nothing_declared() {
        let (tree, nodes) = map(&[
            ("a", None),
            ("b", None),
            ("c", None),
            ("d", None),
            ("e", None),
        ]);

        let sides = resolve_sides(&tree, &nodes, true).unwrap();

        assert_eq!(sides[&Id::new("a")], Side::Left);
        assert_eq!(sides[&Id::new("b")], Side::Left);
        assert_eq!(sides[&Id::new("c")], Side::Right);
        assert_eq!(sides[&Id::new("d")], Side::Right);
        assert_eq!(sides[&Id::new("e")], Side::Right);
    }

    #[test]
    fn test_single_branch_goes_right() {
        let (tree, nodes) = map(&[("only", None)]);
        let sides = resolve_sides(&tree, &nodes, true).unwrap();
        assert_eq!(sides[&Id::new("only")], Side::Right);
    }

    #[test]
    fn test_partial_declaration_defaults_right() {
        let (tree, nodes) = map(&[("a", None), ("b", Some(Side::Left)), ("c", None)]);

        let sides = resolve_sides(&tree, &nodes, true).unwrap();

        assert_eq!(sides[&Id::new("a")], Side::Right);
        assert_eq!(sides[&Id::new("b")], Side::Left);
        assert_eq!(sides[&Id::new("c")], Side::Right);
    }

    #[test]
    fn test_missing_side_without_balancing() {
        let (tree, nodes) = map(&[("a", Some(Side::Left)), ("b", None)]);

        let err = resolve_sides(&tree, &nodes, false).unwrap_err();
        assert_eq!(err, GraphError::MissingSide(Id::new("b")));
    }

    #[test]
    fn test_side_on_deeper_node_is_ignored() {
        let nodes = vec![
            Node::new("root", NodeData::new("Root", 0)),
            Node::new("a", NodeData::new("A", 1)),
            Node::new("a1", NodeData::new("A1", 2).with_side(Side::Left)),
        ];
        let edges = vec![Edge::new("e1", "root", "a"), Edge::new("e2", "a", "a1")];
        let tree = MindMapTree::build(&nodes, &edges).unwrap();

        let sides = resolve_sides(&tree, &nodes, true).unwrap();

        assert_eq!(sides.len(), 1);
        assert_eq!(sides[&Id::new("a")], Side::Right);
    }
}

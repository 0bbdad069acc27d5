//! Edge classification and sibling tagging.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::trace;

use mindmap_core::{
    edge::{DecoratedEdge, Edge, Handles, Routing, Siblings},
    identifier::Id,
    node::Side,
};

use crate::structure::MindMapTree;

/// Attaches routing hints to every edge, in input order.
///
/// An edge whose source has exactly one outgoing edge is `direct`, all
/// others are `routed`. Edges from the root to a level-1 node carry the
/// handle pair for that node's side. Siblings are ranked in edge order
/// within each source group.
pub(crate) fn decorate_edges(
    edges: &[Edge],
    tree: &MindMapTree,
    sides: &HashMap<Id, Side>,
) -> Vec<DecoratedEdge> {
    // Group sizes keyed by source, in order of first appearance
    let mut groups: IndexMap<Id, usize> = IndexMap::new();
    for edge in edges {
        *groups.entry(edge.source()).or_default() += 1;
    }
    let mut ranks: IndexMap<Id, usize> = IndexMap::with_capacity(groups.len());

    edges
        .iter()
        .map(|edge| {
            let rank = ranks.entry(edge.source()).or_default();
            let siblings = Siblings::new(*rank, groups[&edge.source()]);
            *rank += 1;

            let routing = if tree.out_degree(edge.source()) == 1 {
                Routing::Direct
            } else {
                Routing::Routed
            };

            let handles = if edge.source() == tree.root() {
                sides.get(&edge.target()).copied().map(Handles::toward)
            } else {
                None
            };

            trace!(
                edge:% = edge.id(),
                routing:? = routing,
                sibling_index = siblings.index();
                "Decorated edge"
            );
            DecoratedEdge::new(edge.clone(), routing, handles, siblings)
        })
        .collect()
}

//! Coordinate assignment for validated mind-map trees.
//!
//! The root is pinned to the origin. Level-1 branches are split by side and
//! stacked in bands sized by their descendant counts (see [`branch`]), and
//! deeper nodes share their parent's band equally (see [`placement`]).

mod branch;
mod descendants;
mod placement;

use std::collections::HashMap;

use log::debug;

use mindmap_core::{geometry::Point, identifier::Id, node::Side};

use crate::{config::LayoutConfig, error::GraphError, structure::MindMapTree};

use branch::partition_side;
use descendants::DescendantCounts;
use placement::ChildPlacer;

/// Computes node positions for one mind map.
#[derive(Debug, Clone, Default)]
pub(crate) struct Engine {
    config: LayoutConfig,
}

impl Engine {
    pub(crate) fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Returns a position for every node up to the configured depth.
    ///
    /// `sides` must hold a side for every level-1 node.
    pub(crate) fn calculate(
        &self,
        tree: &MindMapTree,
        sides: &HashMap<Id, Side>,
    ) -> Result<HashMap<Id, Point>, GraphError> {
        let root = tree.root();
        let counts = DescendantCounts::compute(tree, root)?;

        let mut positions = HashMap::with_capacity(tree.len());
        positions.insert(root, Point::default());

        let mut right = Vec::new();
        let mut left = Vec::new();
        for branch in tree.branches() {
            match sides.get(&branch) {
                Some(Side::Right) => right.push(branch),
                Some(Side::Left) => left.push(branch),
                None => return Err(GraphError::MissingSide(branch)),
            }
        }

        for (side, branches) in [(Side::Right, right), (Side::Left, left)] {
            let placer = ChildPlacer::new(tree, &self.config, side);
            for slot in partition_side(&branches, side, &counts, &self.config) {
                debug!(
                    branch:% = slot.node,
                    side:% = side,
                    y = slot.position.y();
                    "Placed branch"
                );
                positions.insert(slot.node, slot.position);
                placer.place(slot.node, slot.position, slot.band, 2, &mut positions);
            }
        }

        debug!(
            placed = positions.len(),
            total = tree.len();
            "Layout calculated"
        );
        Ok(positions)
    }
}

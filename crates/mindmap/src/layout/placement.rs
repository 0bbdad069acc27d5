//! Child placement within an allocated band.
//!
//! Below level 1 the band of a parent is divided into equal slices, one per
//! child, regardless of how large each child's own subtree is. Only the
//! branch partitioning is size-aware.

use std::collections::HashMap;

use log::trace;

use mindmap_core::{
    geometry::{Band, Point},
    identifier::Id,
    node::Side,
};

use crate::{config::LayoutConfig, structure::MindMapTree};

/// Places the descendants of one branch.
pub(crate) struct ChildPlacer<'a> {
    tree: &'a MindMapTree,
    config: &'a LayoutConfig,
    side: Side,
}

impl<'a> ChildPlacer<'a> {
    pub(crate) fn new(tree: &'a MindMapTree, config: &'a LayoutConfig, side: Side) -> Self {
        Self { tree, config, side }
    }

    /// Positions the descendants of `parent`, which sits at `parent_position`,
    /// inside `band`, down to `max_depth`.
    ///
    /// `level` is the tree level of the children being placed. Pending
    /// subtrees are kept on an explicit stack, so arbitrarily deep chains are
    /// placed without growing the call stack.
    pub(crate) fn place(
        &self,
        parent: Id,
        parent_position: Point,
        band: Band,
        level: u32,
        positions: &mut HashMap<Id, Point>,
    ) {
        let offset = Point::new(self.config.child_offset() * self.side.sign(), 0.0);
        let mut pending = vec![(parent, parent_position, band, level)];

        while let Some((parent, parent_position, band, level)) = pending.pop() {
            if level > self.config.max_depth() {
                continue;
            }

            let children = self.tree.children(parent);
            let count = children.len();
            let mut placed = Vec::with_capacity(count);

            for (index, child) in children.into_iter().enumerate() {
                let slice = band.slice(index, count);
                let position = parent_position.add_point(offset).with_y(slice.center());
                trace!(
                    node:% = child,
                    level = level,
                    x = position.x(),
                    y = position.y();
                    "Placed child"
                );
                positions.insert(child, position);
                placed.push((child, position, slice, level + 1));
            }

            // Reversed so the first child's subtree is placed next
            pending.extend(placed.into_iter().rev());
        }
    }
}

//! Branch partitioning for one side of the mind map.
//!
//! Every level-1 node on a side claims a vertical band whose height grows
//! with the size of its subtree. The bands are stacked top to bottom in
//! input order, separated by the branch margin, and the whole stack is
//! centered on the root's horizontal axis.

use log::debug;

use mindmap_core::{
    geometry::{Band, Point},
    identifier::Id,
    node::Side,
};

use super::descendants::DescendantCounts;
use crate::config::LayoutConfig;

/// Space and position assigned to one branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BranchSlot {
    pub(crate) node: Id,
    pub(crate) band: Band,
    pub(crate) position: Point,
}

/// Height reserved for a branch with `descendants` nodes below it.
///
/// A leaf branch still reserves one unit.
pub(crate) fn branch_height(descendants: usize, vertical_unit: f32) -> f32 {
    descendants.max(1) as f32 * vertical_unit
}

/// Stacks the branches of one side into bands centered on `y = 0`.
pub(crate) fn partition_side(
    branches: &[Id],
    side: Side,
    counts: &DescendantCounts,
    config: &LayoutConfig,
) -> Vec<BranchSlot> {
    if branches.is_empty() {
        return Vec::new();
    }

    let heights: Vec<f32> = branches
        .iter()
        .map(|id| branch_height(counts.get(*id), config.vertical_unit()))
        .collect();
    let total_height = heights.iter().sum::<f32>()
        + (branches.len() - 1) as f32 * config.branch_margin();

    debug!(
        side:% = side,
        branches = branches.len(),
        total_height = total_height;
        "Partitioning side"
    );

    let x = config.horizontal_unit() * side.sign();
    let mut cursor = -total_height / 2.0;

    let slots: Vec<BranchSlot> = branches
        .iter()
        .zip(heights)
        .map(|(node, height)| {
            let band = Band::new(cursor, height);
            cursor += height + config.branch_margin();
            BranchSlot {
                node: *node,
                band,
                position: Point::new(x, band.center()),
            }
        })
        .collect();

    debug_assert!(
        slots
            .windows(2)
            .all(|pair| !pair[0].band.overlaps(pair[1].band)),
        "Branch bands on the {side} side overlap"
    );
    slots
}

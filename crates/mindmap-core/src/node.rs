//! Mind-map nodes.
//!
//! A [`Node`] is a labeled concept placed at a tree [level](NodeData::level).
//! Level-1 nodes additionally carry a [`Side`], which every node below them
//! inherits during layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{geometry::Point, identifier::Id};

/// Tree level of the primary branches attached to the root.
pub const BRANCH_LEVEL: u32 = 1;

/// The half of the mind map a branch is drawn on.
///
/// Serialized in lowercase (`"left"`, `"right"`), which is also the name of
/// the connection handle on that side of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the sign applied to horizontal offsets on this side.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mindmap_core::node::Side;
    /// assert_eq!(Side::Right.sign(), 1.0);
    /// assert_eq!(Side::Left.sign(), -1.0);
    /// ```
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// Returns the mirrored side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Returns the lowercase name of the side.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive payload of a node.
///
/// Color and icon are rendering hints. The layout engine carries them
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    label: String,
    level: u32,
    #[serde(rename = "direction", default, skip_serializing_if = "Option::is_none")]
    side: Option<Side>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
}

impl NodeData {
    /// Creates node data with a label and a tree level, and no side or hints.
    pub fn new(label: impl Into<String>, level: u32) -> Self {
        Self {
            label: label.into(),
            level,
            side: None,
            color: None,
            icon: None,
        }
    }

    /// Sets the side (builder style).
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Sets the color hint (builder style).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the icon hint (builder style).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Replaces the side in place.
    pub fn set_side(&mut self, side: Side) {
        self.side = Some(side);
    }
}

/// A concept node of the mind map.
///
/// # Examples
///
/// ```
/// # use mindmap_core::node::{Node, NodeData, Side};
/// let node = Node::new("strategy", NodeData::new("Strategy", 1).with_side(Side::Right));
///
/// assert_eq!(node.id(), "strategy");
/// assert_eq!(node.data().side(), Some(Side::Right));
/// assert!(node.position().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: Id,
    data: NodeData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Point>,
}

impl Node {
    /// Creates a node without a position.
    pub fn new(id: impl Into<Id>, data: NodeData) -> Self {
        Self {
            id: id.into(),
            data,
            position: None,
        }
    }

    /// Sets the position (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut NodeData {
        &mut self.data
    }

    /// Shorthand for `self.data().level()`.
    pub fn level(&self) -> u32 {
        self.data.level
    }

    /// Returns true for level-1 nodes.
    pub fn is_branch(&self) -> bool {
        self.data.level == BRANCH_LEVEL
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Replaces the position in place.
    pub fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }
}

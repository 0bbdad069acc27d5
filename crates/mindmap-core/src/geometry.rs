//! Geometric primitives for mind-map layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in layout space
//! - [`Band`] - A vertical interval reserved for a subtree
//!
//! # Coordinate System
//!
//! The root of a mind map sits at the origin. Layout space follows the SVG
//! convention used by the drawing layer:
//!
//! ```text
//!        left side  │  right side
//!      (x < 0)      │      (x > 0)
//!   ────────────── (0,0) ──────────► +X
//!                   │
//!                   ▼
//!                  +Y
//! ```
//!
//! - **X-axis**: Increases rightward; left-side branches have negative x.
//! - **Y-axis**: Increases downward; each side is centered on `y = 0`.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in layout space.
///
/// # Examples
///
/// ```
/// # use mindmap_core::geometry::Point;
/// let parent = Point::new(300.0, -50.0);
/// let offset = Point::new(240.0, 0.0);
///
/// let child = parent.add_point(offset);
/// assert_eq!(child.x(), 540.0);
/// assert_eq!(child.y(), -50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns this point moved to the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// A vertical interval `[start, start + height]` reserved for a subtree.
///
/// Bands are what keep sibling subtrees apart: every branch claims one, and
/// its children subdivide it further.
///
/// # Examples
///
/// ```
/// # use mindmap_core::geometry::Band;
/// let band = Band::new(-60.0, 120.0);
/// assert_eq!(band.end(), 60.0);
/// assert_eq!(band.center(), 0.0);
///
/// // Split into two equal slices
/// let upper = band.slice(0, 2);
/// let lower = band.slice(1, 2);
/// assert_eq!(upper, Band::new(-60.0, 60.0));
/// assert_eq!(lower, Band::new(0.0, 60.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Band {
    start: f32,
    height: f32,
}

impl Band {
    /// Creates a new band starting at `start` spanning `height` downward
    pub fn new(start: f32, height: f32) -> Self {
        Self { start, height }
    }

    /// Returns the top edge of the band
    pub fn start(self) -> f32 {
        self.start
    }

    /// Returns the bottom edge of the band
    pub fn end(self) -> f32 {
        self.start + self.height
    }

    /// Returns the vertical midpoint of the band
    pub fn center(self) -> f32 {
        self.start + self.height / 2.0
    }

    /// Returns the `index`-th of `count` equal slices of this band.
    ///
    /// `count` must be non-zero.
    pub fn slice(self, index: usize, count: usize) -> Self {
        debug_assert!(count > 0, "Cannot slice a band into zero parts");
        let slice_height = self.height / count as f32;
        Self {
            start: self.start + index as f32 * slice_height,
            height: slice_height,
        }
    }

    /// Returns true if the interiors of the two bands intersect.
    ///
    /// Bands that only touch at an edge do not overlap.
    pub fn overlaps(self, other: Band) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

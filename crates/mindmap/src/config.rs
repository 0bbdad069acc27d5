//! Configuration types for mind-map layout.
//!
//! This module provides configuration structures that control how mind maps
//! are laid out and serialized. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and output settings.
//! - [`LayoutConfig`] - Spacing constants, depth guard and side balancing.
//! - [`OutputConfig`] - Controls how the laid-out document is written.
//!
//! # Example
//!
//! ```
//! # use mindmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().vertical_unit(), 60.0);
//! assert!(config.layout().validate().is_ok());
//! ```

use serde::Deserialize;

use crate::MindMapError;

/// Top-level application configuration combining layout and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and output configurations.
    pub fn new(layout: LayoutConfig, output: OutputConfig) -> Self {
        Self { layout, output }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Spacing constants and policies for the layout engine.
///
/// # Fields
///
/// - `vertical_unit` - Height reserved per descendant of a branch (minimum one unit).
/// - `branch_margin` - Gap between neighboring branch bands on one side.
/// - `horizontal_unit` - Horizontal distance from the root to a branch.
/// - `child_offset_ratio` - Horizontal step from a parent to its children, as a
///   fraction of `horizontal_unit`.
/// - `max_depth` - Deepest tree level that receives coordinates.
/// - `auto_balance` - Assign sides to branches that have none.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    vertical_unit: f32,
    branch_margin: f32,
    horizontal_unit: f32,
    child_offset_ratio: f32,
    max_depth: u32,
    auto_balance: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical_unit: 60.0,
            branch_margin: 40.0,
            horizontal_unit: 300.0,
            child_offset_ratio: 0.8,
            max_depth: 4,
            auto_balance: true,
        }
    }
}

impl LayoutConfig {
    /// Set the height reserved per descendant
    pub fn with_vertical_unit(mut self, unit: f32) -> Self {
        self.vertical_unit = unit;
        self
    }

    /// Set the gap between branch bands
    pub fn with_branch_margin(mut self, margin: f32) -> Self {
        self.branch_margin = margin;
        self
    }

    /// Set the root-to-branch horizontal distance
    pub fn with_horizontal_unit(mut self, unit: f32) -> Self {
        self.horizontal_unit = unit;
        self
    }

    /// Set the parent-to-child horizontal step ratio
    pub fn with_child_offset_ratio(mut self, ratio: f32) -> Self {
        self.child_offset_ratio = ratio;
        self
    }

    /// Set the deepest level that receives coordinates
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable automatic side assignment
    pub fn with_auto_balance(mut self, enabled: bool) -> Self {
        self.auto_balance = enabled;
        self
    }

    pub fn vertical_unit(&self) -> f32 {
        self.vertical_unit
    }

    pub fn branch_margin(&self) -> f32 {
        self.branch_margin
    }

    pub fn horizontal_unit(&self) -> f32 {
        self.horizontal_unit
    }

    pub fn child_offset_ratio(&self) -> f32 {
        self.child_offset_ratio
    }

    /// Horizontal distance between a node at depth ≥ 1 and its children.
    pub fn child_offset(&self) -> f32 {
        self.horizontal_unit * self.child_offset_ratio
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn auto_balance(&self) -> bool {
        self.auto_balance
    }

    /// Checks that the spacing values describe a usable layout.
    ///
    /// # Errors
    ///
    /// Returns [`MindMapError::Config`] if a unit is not a positive finite
    /// number, the margin is negative, or `max_depth` is zero.
    pub fn validate(&self) -> Result<(), MindMapError> {
        let positive = [
            ("vertical_unit", self.vertical_unit),
            ("horizontal_unit", self.horizontal_unit),
            ("child_offset_ratio", self.child_offset_ratio),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MindMapError::Config(format!(
                    "`{name}` must be a positive number, got {value}"
                )));
            }
        }

        if !self.branch_margin.is_finite() || self.branch_margin < 0.0 {
            return Err(MindMapError::Config(format!(
                "`branch_margin` must be zero or positive, got {}",
                self.branch_margin
            )));
        }

        if self.max_depth == 0 {
            return Err(MindMapError::Config(
                "`max_depth` must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Controls how the laid-out document is serialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the output JSON.
    pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

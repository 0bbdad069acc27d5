//! Mindmap - Balanced two-sided layout for hierarchical mind maps.
//!
//! Given a flat list of nodes tagged with tree levels and a flat list of
//! parent→child edges, this crate assigns a 2D position to every node and
//! routing hints to every edge. The root sits at the origin, level-1
//! branches are split onto a left and a right side, and sibling subtrees
//! never share vertical space.

pub mod config;
pub mod document;

mod balance;
mod error;
mod layout;
mod routing;
mod structure;

pub use mindmap_core::{edge, geometry, identifier, node};

pub use document::{Layout, MindMapDocument};
pub use error::{GraphError, MindMapError};

use log::{debug, info, trace, warn};

use mindmap_core::{edge::Edge, node::Node};

use config::AppConfig;
use structure::MindMapTree;

/// Builder for laying out mind maps.
///
/// Holds the configuration and exposes the parse, layout and render stages.
/// A builder keeps no state between calls; the same input always yields the
/// same output.
///
/// # Examples
///
/// ```rust
/// use mindmap::{MindMapBuilder, config::AppConfig};
///
/// let source = r#"{
///     "nodes": [
///         { "id": "root", "data": { "label": "Topic", "level": 0 } },
///         { "id": "a", "data": { "label": "A", "level": 1, "direction": "right" } }
///     ],
///     "edges": [ { "id": "e1", "source": "root", "target": "a" } ]
/// }"#;
///
/// let builder = MindMapBuilder::new(AppConfig::default());
/// let document = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout_document(&document).expect("Failed to lay out");
///
/// let a = layout.node("a").and_then(|node| node.position()).unwrap();
/// assert_eq!((a.x(), a.y()), (300.0, 0.0));
///
/// let json = builder.render_json(&layout).expect("Failed to render");
/// assert!(json.contains("\"routing\": \"direct\""));
/// ```
#[derive(Debug, Default)]
pub struct MindMapBuilder {
    config: AppConfig,
}

impl MindMapBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON document into nodes and edges.
    ///
    /// # Errors
    ///
    /// Returns [`MindMapError::Document`] with the source text attached when
    /// the input is not a valid document.
    pub fn parse(&self, source: &str) -> Result<MindMapDocument, MindMapError> {
        info!(bytes = source.len(); "Parsing document");

        let document: MindMapDocument = serde_json::from_str(source)
            .map_err(|err| MindMapError::new_document_error(err, source))?;

        debug!(
            nodes = document.nodes().len(),
            edges = document.edges().len();
            "Document parsed successfully"
        );
        Ok(document)
    }

    /// Compute positions and edge hints for a mind map.
    ///
    /// The returned nodes are copies of the input with `position` set and,
    /// for level-1 nodes, the resolved side written back. Nodes deeper than
    /// `max_depth` keep whatever position they came with. An empty node list
    /// yields an empty layout.
    ///
    /// # Errors
    ///
    /// Returns [`MindMapError::Config`] for an unusable configuration and
    /// [`MindMapError::Graph`] when the input is not a single rooted tree.
    pub fn layout(&self, nodes: &[Node], edges: &[Edge]) -> Result<Layout, MindMapError> {
        let layout_config = self.config.layout();
        layout_config.validate()?;

        if nodes.is_empty() {
            info!("Empty mind map, nothing to lay out");
            return Ok(Layout::default());
        }

        info!(nodes = nodes.len(), edges = edges.len(); "Building mind map tree");
        let tree = MindMapTree::build(nodes, edges)?;

        let sides = balance::resolve_sides(&tree, nodes, layout_config.auto_balance())?;

        info!("Calculating positions");
        let positions = layout::Engine::new(layout_config.clone()).calculate(&tree, &sides)?;

        let mut unplaced = 0usize;
        let positioned: Vec<Node> = nodes
            .iter()
            .map(|node| {
                let mut node = node.clone();
                if let Some(side) = sides.get(&node.id()) {
                    node.data_mut().set_side(*side);
                }
                match positions.get(&node.id()) {
                    Some(position) => node.set_position(*position),
                    None => {
                        unplaced += 1;
                        trace!(node:% = node.id(), level = node.level(); "Beyond max depth");
                    }
                }
                node
            })
            .collect();

        if unplaced > 0 {
            warn!(
                count = unplaced,
                max_depth = layout_config.max_depth();
                "Nodes deeper than max_depth were not positioned"
            );
        }

        let decorated = routing::decorate_edges(edges, &tree, &sides);

        info!(
            nodes = positioned.len(),
            edges = decorated.len();
            "Layout completed"
        );
        Ok(Layout::new(positioned, decorated))
    }

    /// Lay out a parsed document.
    ///
    /// # Errors
    ///
    /// See [`MindMapBuilder::layout`].
    pub fn layout_document(&self, document: &MindMapDocument) -> Result<Layout, MindMapError> {
        self.layout(document.nodes(), document.edges())
    }

    /// Serialize a layout to JSON.
    ///
    /// Output is pretty-printed unless the output configuration says otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`MindMapError::Serialize`] if serialization fails.
    pub fn render_json(&self, layout: &Layout) -> Result<String, MindMapError> {
        let json = if self.config.output().pretty() {
            serde_json::to_string_pretty(layout)?
        } else {
            serde_json::to_string(layout)?
        };

        debug!(bytes = json.len(); "Layout rendered");
        Ok(json)
    }
}

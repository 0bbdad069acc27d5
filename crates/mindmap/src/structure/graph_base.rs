//! Low-level graph data structures and primitives.
//!
//! This module provides the adjacency storage the mind-map tree is built on.
//! It is a lightweight directed graph keyed by interned [`Id`]s that keeps
//! insertion order everywhere, so every traversal is deterministic.
//!
//! # Architecture
//!
//! - [`EdgeIndex`]: Index of an edge in insertion order
//! - [`GraphInternal`]: Core graph with nodes, edges and per-node edge lists
//!
//! Capabilities:
//! - Node storage in insertion order with O(1) lookup by ID
//! - Tracking of both incoming and outgoing edges per node
//!
//! This is an internal module; [`MindMapTree`](super::MindMapTree) wraps it
//! and enforces the tree invariants.

use std::collections::HashMap;

use mindmap_core::identifier::Id;

/// Index of an edge in the order it was added.
#[derive(Debug, Clone, Copy)]
struct EdgeIndex(usize);

/// A directed edge in the graph.
#[derive(Debug)]
struct Edge {
    source: Id,
    target: Id,
}

/// Core graph data structure.
///
/// The graph is directed and allows self-loops and multiple edges between
/// nodes; rejecting those is the job of the tree built on top of it.
///
/// Edges carry no payload; the tree only needs their endpoints. `N` is the
/// node data type.
#[derive(Debug)]
pub(super) struct GraphInternal<N>
where
    N: Copy + std::fmt::Debug,
{
    nodes: HashMap<Id, N>,
    node_order: Vec<Id>,
    edges: Vec<Edge>,
    income_edges: HashMap<Id, Vec<EdgeIndex>>,
    outgoing_edges: HashMap<Id, Vec<EdgeIndex>>,
}

impl<N> GraphInternal<N>
where
    N: Copy + std::fmt::Debug,
{
    /// Creates a new empty graph.
    pub(super) fn new() -> Self {
        GraphInternal {
            nodes: HashMap::new(),
            node_order: Vec::new(),
            edges: Vec::new(),
            income_edges: HashMap::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Returns the node data for the given ID, if it exists.
    pub(super) fn node(&self, id: Id) -> Option<N> {
        self.nodes.get(&id).copied()
    }

    /// Returns an iterator over `(id, data)` pairs in insertion order.
    pub(super) fn nodes(&self) -> impl Iterator<Item = (Id, N)> + '_ {
        self.node_order.iter().map(|id| (*id, self.nodes[id]))
    }

    /// Returns the total number of nodes in the graph.
    pub(super) fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if a node with the given ID exists in the graph.
    pub(super) fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns an iterator over `(source, target)` for all edges in insertion order.
    pub(super) fn edges(&self) -> impl Iterator<Item = (Id, Id)> + '_ {
        self.edges.iter().map(|edge| (edge.source, edge.target))
    }

    /// Returns the sources of all edges pointing into `target`, in insertion order.
    pub(super) fn incoming_sources(&self, target: Id) -> impl Iterator<Item = Id> + '_ {
        self.income_edges
            .get(&target)
            .into_iter()
            .flatten()
            .map(|idx| self.edges[idx.0].source)
    }

    /// Returns the targets of all edges leaving `source`, in insertion order.
    ///
    /// Returns an empty iterator if the source node has no outgoing edges.
    pub(super) fn outgoing_targets(&self, source: Id) -> impl Iterator<Item = Id> + '_ {
        self.outgoing_edges
            .get(&source)
            .into_iter()
            .flatten()
            .map(|idx| self.edges[idx.0].target)
    }

    /// Returns the number of edges leaving `source`.
    pub(super) fn out_degree(&self, source: Id) -> usize {
        self.outgoing_edges.get(&source).map_or(0, Vec::len)
    }

    /// Adds a node to the graph with the given ID and data.
    ///
    /// Returns the previous data if a node with the same ID already existed;
    /// in that case the data is replaced and the original position in the
    /// insertion order is kept.
    pub(super) fn add_node(&mut self, id: Id, node: N) -> Option<N> {
        let previous = self.nodes.insert(id, node);
        if previous.is_none() {
            self.node_order.push(id);
        }
        previous
    }

    /// Adds a directed edge to the graph between two nodes.
    ///
    /// # Panics
    /// Panics in debug mode if either the source or target node does not exist in the graph.
    /// Callers are expected to check references before adding edges.
    pub(super) fn add_edge(&mut self, source_id: Id, target_id: Id) {
        debug_assert!(
            self.nodes.contains_key(&source_id),
            "Adding edge: Source node {source_id} does not exist",
        );
        debug_assert!(
            self.nodes.contains_key(&target_id),
            "Adding edge: Target node {target_id} does not exist",
        );

        let idx = EdgeIndex(self.edges.len());
        self.edges.push(Edge {
            source: source_id,
            target: target_id,
        });
        self.outgoing_edges.entry(source_id).or_default().push(idx);
        self.income_edges.entry(target_id).or_default().push(idx);
    }
}

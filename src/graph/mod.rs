//! Weighted directed graphs
//!
//! [`WeightedDigraph`] is the contract every representation satisfies:
//!
//! - `add` is idempotent and reports whether the vertex was new.
//! - `remove` deletes a vertex together with every edge it touches.
//! - `set` upserts an edge (auto-inserting both endpoints) when the weight is
//!   positive and deletes it when the weight is zero; negative weights are
//!   rejected before any mutation.
//! - Queries return owned snapshots, never views into the graph.
//!
//! Two representations are provided: [`EdgeListGraph`] (a vertex set plus a
//! flat list of edges) and [`AdjacencyGraph`] (a label→id map plus one
//! outgoing adjacency map per vertex). Neither guarantees any iteration
//! order.

pub mod adjacency;
pub mod builder;
pub mod edges;

use crate::errors::{PoetError, Result};
use crate::types::Weight;
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

pub use adjacency::AdjacencyGraph;
pub use edges::EdgeListGraph;

/// Bound on vertex labels: value equality plus hashing.
pub trait Label: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Label for T {}

/// A mutable, weighted, directed graph over labels of type `L`.
pub trait WeightedDigraph<L: Label> {
    /// Create an empty graph
    fn empty() -> Self
    where
        Self: Sized;

    /// Add a vertex. Returns `false` if it was already present.
    fn add(&mut self, vertex: L) -> bool;

    /// Remove a vertex and every edge into or out of it.
    /// Returns `false` if the vertex was not present.
    fn remove(&mut self, vertex: &L) -> bool;

    /// Set the weight of the edge `source -> target`.
    ///
    /// A positive weight inserts or overwrites the edge, adding either
    /// endpoint that is missing. A zero weight deletes the edge if present and
    /// leaves the vertex set untouched. Returns the previous weight, or `0`
    /// if there was no such edge.
    ///
    /// # Errors
    ///
    /// [`PoetError::InvalidArgument`] if `weight` is negative. The graph is
    /// not modified.
    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// Snapshot of all vertex labels
    fn vertices(&self) -> FxHashSet<L>;

    /// Snapshot of the vertices with an edge into `target`, with weights.
    /// Empty if `target` is absent or has no incoming edges.
    fn sources(&self, target: &L) -> FxHashMap<L, Weight>;

    /// Snapshot of the vertices `source` has an edge to, with weights.
    /// Empty if `source` is absent or has no outgoing edges.
    fn targets(&self, source: &L) -> FxHashMap<L, Weight>;

    /// Check whether a vertex is present
    fn contains(&self, vertex: &L) -> bool {
        self.vertices().contains(vertex)
    }

    /// Weight of `source -> target`, or `0` if there is no such edge
    fn weight(&self, source: &L, target: &L) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// Number of vertices
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of directed edges
    fn edge_count(&self) -> usize {
        self.vertices().iter().map(|v| self.targets(v).len()).sum()
    }

    /// Check if the graph has no vertices
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// Representation returned by [`empty`]
pub type DefaultGraph<L> = AdjacencyGraph<L>;

/// Create an empty graph without naming a representation
pub fn empty<L: Label>() -> DefaultGraph<L> {
    DefaultGraph::empty()
}

/// Reject negative weights before a mutation touches the graph
pub(crate) fn check_weight(weight: Weight) -> Result<()> {
    if weight < 0 {
        return Err(PoetError::invalid_argument(format!(
            "edge weight must be >= 0, got {}",
            weight
        )));
    }
    Ok(())
}

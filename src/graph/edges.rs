//! Edge-list graph representation
//!
//! Stores the vertex set alongside a flat list of edges. Every edge query is
//! a linear scan over the edge list, which keeps mutations simple and the
//! representation easy to audit.

use super::{check_weight, Label, WeightedDigraph};
use crate::errors::Result;
use crate::types::Weight;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A directed edge with a strictly positive weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<L> {
    /// Source vertex
    pub source: L,
    /// Target vertex
    pub target: L,
    /// Edge weight (> 0)
    pub weight: Weight,
}

impl<L> Edge<L> {
    /// Create a new edge
    pub fn new(source: L, target: L, weight: Weight) -> Self {
        debug_assert!(weight > 0, "edge weight must be positive");
        Self {
            source,
            target,
            weight,
        }
    }

    fn touches(&self, vertex: &L) -> bool
    where
        L: PartialEq,
    {
        &self.source == vertex || &self.target == vertex
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [weight={}]", self.source, self.target, self.weight)
    }
}

/// Weighted digraph stored as a vertex set plus an edge list
#[derive(Debug, Clone)]
pub struct EdgeListGraph<L> {
    vertices: FxHashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L: Label> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> EdgeListGraph<L> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            vertices: FxHashSet::default(),
            edges: Vec::new(),
        }
    }

    /// Iterate over the stored edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> {
        self.edges.iter()
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| &e.source == source && &e.target == target)
    }

    #[inline]
    fn check_rep(&self) {
        debug_assert!(
            self.edges.iter().all(|e| e.weight > 0),
            "stored edge weights must be positive"
        );
        debug_assert!(
            self.edges
                .iter()
                .all(|e| self.vertices.contains(&e.source) && self.vertices.contains(&e.target)),
            "edge endpoints must be vertices"
        );
    }
}

impl<L: Label> WeightedDigraph<L> for EdgeListGraph<L> {
    fn empty() -> Self {
        Self::new()
    }

    fn add(&mut self, vertex: L) -> bool {
        let added = self.vertices.insert(vertex);
        self.check_rep();
        added
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        self.edges.retain(|e| !e.touches(vertex));
        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        check_weight(weight)?;

        let existing = self.position(&source, &target);
        let previous = existing.map(|i| self.edges[i].weight).unwrap_or(0);

        match (existing, weight > 0) {
            (Some(i), true) => self.edges[i].weight = weight,
            (Some(i), false) => {
                self.edges.swap_remove(i);
            }
            (None, true) => {
                self.vertices.insert(source.clone());
                self.vertices.insert(target.clone());
                self.edges.push(Edge::new(source, target, weight));
            }
            (None, false) => {}
        }

        self.check_rep();
        Ok(previous)
    }

    fn vertices(&self) -> FxHashSet<L> {
        self.vertices.clone()
    }

    fn sources(&self, target: &L) -> FxHashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| &e.target == target)
            .map(|e| (e.source.clone(), e.weight))
            .collect()
    }

    fn targets(&self, source: &L) -> FxHashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| &e.source == source)
            .map(|e| (e.target.clone(), e.weight))
            .collect()
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.position(source, target)
            .map(|i| self.edges[i].weight)
            .unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L: Label + fmt::Display> fmt::Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph with vertices:")?;
        for vertex in &self.vertices {
            writeln!(f, "{}", vertex)?;
        }
        writeln!(f, "And edges:")?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}

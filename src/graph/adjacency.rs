//! Adjacency-map graph representation
//!
//! Each vertex gets a dense `u32` id and owns a map of its outgoing edges
//! keyed by target id, giving O(1) edge lookups for `set`, `targets` and
//! `weight`. `sources` scans every vertex.

use super::{check_weight, Label, WeightedDigraph};
use crate::errors::Result;
use crate::types::Weight;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// A vertex in the adjacency graph
#[derive(Debug, Clone)]
pub struct VertexNode<L> {
    /// The label for this vertex
    pub label: L,
    /// Outgoing adjacency: target vertex ID -> edge weight
    pub edges: FxHashMap<u32, Weight>,
}

impl<L> VertexNode<L> {
    /// Create a new vertex with no outgoing edges
    pub fn new(label: L) -> Self {
        Self {
            label,
            edges: FxHashMap::default(),
        }
    }
}

/// Weighted digraph stored as per-vertex outgoing adjacency maps
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L> {
    /// Maps label -> vertex ID
    label_to_id: FxHashMap<L, u32>,
    /// Vertex storage, indexed by ID
    nodes: Vec<VertexNode<L>>,
}

impl<L: Label> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> AdjacencyGraph<L> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            label_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a vertex for the given label, returning its ID
    fn get_or_create_node(&mut self, label: L) -> u32 {
        if let Some(&id) = self.label_to_id.get(&label) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.label_to_id.insert(label.clone(), id);
        self.nodes.push(VertexNode::new(label));
        id
    }

    /// Get a vertex ID by label
    pub fn get_node_id(&self, label: &L) -> Option<u32> {
        self.label_to_id.get(label).copied()
    }

    /// Get a vertex by ID
    pub fn get_node(&self, id: u32) -> Option<&VertexNode<L>> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all vertices
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &VertexNode<L>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    fn label(&self, id: u32) -> &L {
        &self.nodes[id as usize].label
    }

    #[inline]
    fn check_rep(&self) {
        debug_assert_eq!(self.label_to_id.len(), self.nodes.len());
        debug_assert!(
            self.nodes
                .iter()
                .enumerate()
                .all(|(i, n)| self.label_to_id.get(&n.label) == Some(&(i as u32))),
            "label index out of sync with vertex storage"
        );
        debug_assert!(
            self.nodes.iter().all(|n| n
                .edges
                .iter()
                .all(|(&t, &w)| (t as usize) < self.nodes.len() && w > 0)),
            "edges must point at live vertices with positive weight"
        );
    }
}

impl<L: Label> WeightedDigraph<L> for AdjacencyGraph<L> {
    fn empty() -> Self {
        Self::new()
    }

    fn add(&mut self, vertex: L) -> bool {
        if self.label_to_id.contains_key(&vertex) {
            return false;
        }
        self.get_or_create_node(vertex);
        self.check_rep();
        true
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(removed) = self.label_to_id.remove(vertex) else {
            return false;
        };

        // The last vertex takes over the removed vertex's ID.
        let last = (self.nodes.len() - 1) as u32;
        self.nodes.swap_remove(removed as usize);
        if removed != last {
            let moved = &self.nodes[removed as usize].label;
            if let Some(id) = self.label_to_id.get_mut(moved) {
                *id = removed;
            }
        }

        for node in &mut self.nodes {
            node.edges.remove(&removed);
            if removed != last {
                if let Some(weight) = node.edges.remove(&last) {
                    node.edges.insert(removed, weight);
                }
            }
        }

        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        check_weight(weight)?;

        let previous = if weight > 0 {
            let from = self.get_or_create_node(source);
            let to = self.get_or_create_node(target);
            self.nodes[from as usize].edges.insert(to, weight)
        } else {
            match (self.get_node_id(&source), self.get_node_id(&target)) {
                (Some(from), Some(to)) => self.nodes[from as usize].edges.remove(&to),
                _ => None,
            }
        };

        self.check_rep();
        Ok(previous.unwrap_or(0))
    }

    fn vertices(&self) -> FxHashSet<L> {
        self.label_to_id.keys().cloned().collect()
    }

    fn sources(&self, target: &L) -> FxHashMap<L, Weight> {
        let Some(to) = self.get_node_id(target) else {
            return FxHashMap::default();
        };
        self.nodes
            .iter()
            .filter_map(|n| n.edges.get(&to).map(|&w| (n.label.clone(), w)))
            .collect()
    }

    fn targets(&self, source: &L) -> FxHashMap<L, Weight> {
        let Some(from) = self.get_node_id(source) else {
            return FxHashMap::default();
        };
        self.nodes[from as usize]
            .edges
            .iter()
            .map(|(&to, &w)| (self.label(to).clone(), w))
            .collect()
    }

    fn contains(&self, vertex: &L) -> bool {
        self.label_to_id.contains_key(vertex)
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        match (self.get_node_id(source), self.get_node_id(target)) {
            (Some(from), Some(to)) => self.nodes[from as usize]
                .edges
                .get(&to)
                .copied()
                .unwrap_or(0),
            _ => 0,
        }
    }

    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }
}

impl<L: Label + fmt::Display> fmt::Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph with vertices:")?;
        for node in &self.nodes {
            write!(f, "{} -> {{", node.label)?;
            for (i, (&to, weight)) in node.edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", self.label(to), weight)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

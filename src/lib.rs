//! # graph_poet
//!
//! Mutable weighted directed graphs, and a poet that uses one to bridge words.
//!
//! The graph is generic over any hashable label type and comes in two
//! interchangeable representations behind the [`WeightedDigraph`] trait.
//! The poet builds an affinity graph from a corpus, where the weight of
//! `a -> b` counts how often `b` directly follows `a`. It then inserts the
//! best two-hop "bridge word" between adjacent words of an input phrase.
//!
//! ## Features
//!
//! - **Generic**: labels only need `Clone + Eq + Hash`
//! - **Two representations**: edge list ([`EdgeListGraph`]) and adjacency
//!   maps ([`AdjacencyGraph`], the default)
//! - **Snapshot queries**: `vertices`, `sources` and `targets` return owned
//!   collections that never alias graph storage
//! - **Optional tracing**: enable the `tracing` feature for spans and events

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod poet;
pub mod types;

// Re-export commonly used types
pub use errors::{PoetError, Result};
pub use types::{Bridge, DeterminismMode, PoetConfig, Token, Weight};

// Re-export main functionality
pub use graph::{
    builder::AffinityBuilder, AdjacencyGraph, DefaultGraph, EdgeListGraph, Label, WeightedDigraph,
};
pub use nlp::tokenizer::Tokenizer;
pub use poet::{bridge::BridgeSelector, GraphPoet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

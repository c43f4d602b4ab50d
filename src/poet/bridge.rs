//! Bridge word selection
//!
//! A bridge between `w1` and `w2` is a vertex `b` with edges `w1 -> b` and
//! `b -> w2`. Its score is `weight(w1 -> b) + weight(b -> w2)`; the highest
//! score wins.

use crate::graph::{Label, WeightedDigraph};
use crate::types::{Bridge, DeterminismMode, PoetConfig, Weight};

/// Finds the best two-hop connector between two words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeSelector {
    determinism: DeterminismMode,
    /// Candidates must score strictly above this
    min_score: Weight,
}

impl BridgeSelector {
    /// Create a selector with default tie-breaking and no score threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector from the poet configuration
    pub fn from_config(config: &PoetConfig) -> Self {
        Self {
            determinism: config.determinism,
            min_score: config.min_bridge_score,
        }
    }

    /// Set the tie-break policy
    pub fn with_determinism(mut self, determinism: DeterminismMode) -> Self {
        self.determinism = determinism;
        self
    }

    /// Set the score threshold
    pub fn with_min_score(mut self, min_score: Weight) -> Self {
        self.min_score = min_score;
        self
    }

    /// Find the best bridge from `w1` to `w2`
    ///
    /// Neither word needs to be in the graph. Returns `None` when no two-hop
    /// path scores above the threshold.
    ///
    /// Under [`DeterminismMode::Default`] a tie between equally scored
    /// candidates goes to whichever the unordered `targets(w1)` enumeration
    /// yields first, so which one wins is unspecified. Under
    /// [`DeterminismMode::Deterministic`] the smallest label wins.
    pub fn bridge<L, G>(&self, graph: &G, w1: &L, w2: &L) -> Option<Bridge<L>>
    where
        L: Label + Ord,
        G: WeightedDigraph<L>,
    {
        let mut best: Option<Bridge<L>> = None;

        for (candidate, first) in graph.targets(w1) {
            let second = graph.weight(&candidate, w2);
            if second == 0 {
                continue;
            }

            let score = first + second;
            if score <= self.min_score {
                continue;
            }

            let replace = match &best {
                None => true,
                Some(current) if score > current.score => true,
                Some(current) => {
                    self.determinism.is_deterministic()
                        && score == current.score
                        && candidate < current.word
                }
            };
            if replace {
                best = Some(Bridge::new(candidate, score));
            }
        }

        best
    }
}

//! Core types for graph_poet
//!
//! This module defines the data structures shared between the graph, the
//! affinity builder and the poet: edge weights, tokens, bridge results and
//! configuration.

use crate::errors::{PoetError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Weights
// ============================================================================

/// Edge weight.
///
/// Stored weights are always strictly positive. A weight of zero passed to
/// [`WeightedDigraph::set`](crate::graph::WeightedDigraph::set) means "no
/// edge"; negative weights are rejected.
pub type Weight = i64;

// ============================================================================
// Token
// ============================================================================

/// A whitespace-delimited token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Original text, punctuation and casing kept verbatim
    pub text: String,
    /// Normalized form used as a graph key (lower-cased when case folding)
    pub normalized: String,
    /// Position of the token in its source text
    pub token_idx: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, normalized: impl Into<String>, token_idx: usize) -> Self {
        Self {
            text: text.into(),
            normalized: normalized.into(),
            token_idx,
        }
    }
}

// ============================================================================
// Bridge
// ============================================================================

/// A bridge word found between two words of a poem
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bridge<L> {
    /// The connecting vertex `b` with `w1 -> b -> w2`
    pub word: L,
    /// `weight(w1 -> b) + weight(b -> w2)`
    pub score: Weight,
}

impl<L> Bridge<L> {
    /// Create a new bridge
    pub fn new(word: L, score: Weight) -> Self {
        Self { word, score }
    }
}

// ============================================================================
// Determinism
// ============================================================================

/// Controls how ties between equally scored bridge candidates are broken.
///
/// `Default` takes the first best candidate in the graph's outgoing-edge
/// enumeration, which is unordered: callers must not rely on which of the
/// tied candidates wins. `Deterministic` picks the smallest label among the
/// tied candidates so the same corpus always yields the same poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeterminismMode {
    /// First-encountered candidate wins; enumeration order is unspecified.
    #[default]
    Default,
    /// Stable, reproducible results: ties go to the smallest label.
    Deterministic,
}

impl DeterminismMode {
    /// Returns `true` when deterministic execution is requested.
    pub fn is_deterministic(self) -> bool {
        matches!(self, DeterminismMode::Deterministic)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the poet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoetConfig {
    /// Tie-break policy among equally scored bridge candidates
    #[serde(default)]
    pub determinism: DeterminismMode,
    /// Lower-case tokens before using them as graph keys
    #[serde(default = "default_case_fold")]
    pub case_fold: bool,
    /// Only insert bridges whose score is strictly greater than this
    #[serde(default)]
    pub min_bridge_score: Weight,
}

fn default_case_fold() -> bool {
    true
}

impl Default for PoetConfig {
    fn default() -> Self {
        Self {
            determinism: DeterminismMode::Default,
            case_fold: default_case_fold(),
            min_bridge_score: 0,
        }
    }
}

impl PoetConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_bridge_score < 0 {
            return Err(PoetError::invalid_config(format!(
                "min_bridge_score must be >= 0, got {}",
                self.min_bridge_score
            )));
        }
        Ok(())
    }

    /// Builder: set determinism mode
    pub fn with_determinism(mut self, determinism: DeterminismMode) -> Self {
        self.determinism = determinism;
        self
    }

    /// Builder: enable or disable case folding
    pub fn with_case_fold(mut self, case_fold: bool) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Builder: set the minimum bridge score threshold
    pub fn with_min_bridge_score(mut self, min_bridge_score: Weight) -> Self {
        self.min_bridge_score = min_bridge_score;
        self
    }
}

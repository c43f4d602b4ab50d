//! Bridge-word poet
//!
//! A [`GraphPoet`] learns word adjacencies from a corpus and uses them to
//! insert bridge words into an input phrase: between every pair of adjacent
//! input words `w1 w2` it inserts the word `b` that maximizes
//! `weight(w1 -> b) + weight(b -> w2)` in the corpus affinity graph.
//!
//! ```
//! use graph_poet::GraphPoet;
//!
//! let poet: GraphPoet = GraphPoet::from_corpus_text("This is a test of the Mugar Omni Theater sound system.").unwrap();
//! assert_eq!(
//!     poet.poem("Test the system."),
//!     "Test of the system."
//! );
//! ```

pub mod bridge;

use crate::errors::{PoetError, Result};
use crate::graph::builder::AffinityBuilder;
use crate::graph::{DefaultGraph, WeightedDigraph};
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Bridge, PoetConfig};
use bridge::BridgeSelector;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Enter a tracing span for a poet stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("poet_stage", stage = $name).entered();
    };
}

/// Generates poems by bridging words through a corpus affinity graph
#[derive(Debug, Clone)]
pub struct GraphPoet<G = DefaultGraph<String>> {
    graph: G,
    tokenizer: Tokenizer,
    selector: BridgeSelector,
    config: PoetConfig,
}

impl<G: WeightedDigraph<String>> GraphPoet<G> {
    /// Create a poet from a corpus file, using the default configuration
    ///
    /// # Errors
    ///
    /// [`PoetError::Io`] if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with_config(path, PoetConfig::default())
    }

    /// Create a poet from a corpus file
    pub fn from_path_with_config(path: impl AsRef<Path>, config: PoetConfig) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|e| PoetError::io(origin.as_str(), &e))?;
        Self::load(BufReader::new(file), &origin, config)
    }

    /// Create a poet from any line-oriented reader
    pub fn from_reader<R: BufRead>(reader: R, config: PoetConfig) -> Result<Self> {
        Self::load(reader, "<reader>", config)
    }

    /// Create a poet from in-memory corpus text, using the default configuration
    pub fn from_corpus_text(corpus: &str) -> Result<Self> {
        Self::with_config(corpus, PoetConfig::default())
    }

    /// Create a poet from in-memory corpus text
    pub fn with_config(corpus: &str, config: PoetConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new().with_case_fold(config.case_fold);
        let graph: G = {
            trace_stage!("build_graph");
            AffinityBuilder::from_text(corpus, &tokenizer)?
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "affinity graph built"
        );

        Ok(Self {
            graph,
            tokenizer,
            selector: BridgeSelector::from_config(&config),
            config,
        })
    }

    /// Read the whole corpus, then build. Nothing is built if any read fails.
    fn load<R: BufRead>(reader: R, origin: &str, config: PoetConfig) -> Result<Self> {
        trace_stage!("load_corpus");
        let mut corpus = String::new();
        for line in reader.lines() {
            let line = line.map_err(|e| PoetError::io(origin, &e))?;
            corpus.push_str(&line);
            corpus.push('\n');
        }
        Self::with_config(&corpus, config)
    }

    /// Generate a poem from `input`
    ///
    /// Input words keep their original casing and punctuation. Bridge words
    /// are inserted in their normalized (graph) form. Words are joined by a
    /// single space.
    pub fn poem(&self, input: &str) -> String {
        trace_stage!("poem");
        let tokens = self.tokenizer.tokenize(input);
        let mut words: Vec<String> = Vec::with_capacity(tokens.len() * 2);

        let mut previous: Option<&str> = None;
        for token in &tokens {
            if let Some(prev) = previous {
                if let Some(bridge) = self.bridge_normalized(prev, &token.normalized) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        from = prev,
                        to = token.normalized.as_str(),
                        bridge = bridge.word.as_str(),
                        score = bridge.score,
                        "bridge inserted"
                    );
                    words.push(bridge.word);
                }
            }
            words.push(token.text.clone());
            previous = Some(token.normalized.as_str());
        }

        words.join(" ")
    }

    /// Find the bridge between two words, normalizing them first
    pub fn bridge(&self, w1: &str, w2: &str) -> Option<Bridge<String>> {
        self.bridge_normalized(&self.tokenizer.normalize(w1), &self.tokenizer.normalize(w2))
    }

    fn bridge_normalized(&self, w1: &str, w2: &str) -> Option<Bridge<String>> {
        self.selector
            .bridge(&self.graph, &w1.to_string(), &w2.to_string())
    }

    /// The affinity graph built from the corpus
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// The configuration this poet was built with
    pub fn config(&self) -> &PoetConfig {
        &self.config
    }
}

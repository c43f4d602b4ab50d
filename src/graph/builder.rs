//! Affinity graph construction
//!
//! Builds a word-adjacency graph from a token sequence: the weight of
//! `a -> b` is the number of times token `b` immediately follows token `a`.

use super::{DefaultGraph, WeightedDigraph};
use crate::errors::Result;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Token, Weight};

/// Incremental builder for an affinity graph
#[derive(Debug)]
pub struct AffinityBuilder<G = DefaultGraph<String>> {
    graph: G,
    /// The most recently pushed token
    previous: Option<String>,
    token_count: usize,
}

impl<G: WeightedDigraph<String>> Default for AffinityBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: WeightedDigraph<String>> AffinityBuilder<G> {
    /// Create a builder over an empty graph
    pub fn new() -> Self {
        Self::with_graph(G::empty())
    }

    /// Create a builder that extends an existing graph
    pub fn with_graph(graph: G) -> Self {
        Self {
            graph,
            previous: None,
            token_count: 0,
        }
    }

    /// Increment the weight of `from -> to` by one
    ///
    /// An absent edge counts as weight 0, so the first call creates it with
    /// weight 1. Returns the new weight.
    pub fn increment_edge(graph: &mut G, from: &str, to: &str) -> Result<Weight> {
        let (from, to) = (from.to_string(), to.to_string());
        let weight = graph.weight(&from, &to) + 1;
        graph.set(from, to, weight)?;
        Ok(weight)
    }

    /// Feed the next token of the corpus
    pub fn push(&mut self, token: &str) -> Result<()> {
        self.graph.add(token.to_string());
        if let Some(previous) = self.previous.as_deref() {
            Self::increment_edge(&mut self.graph, previous, token)?;
        }
        self.previous = Some(token.to_string());
        self.token_count += 1;
        Ok(())
    }

    /// Number of tokens pushed so far
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Finish building and return the graph
    pub fn build(self) -> G {
        self.graph
    }

    /// Build a graph from normalized words, in corpus order
    pub fn from_words<I, S>(words: I) -> Result<G>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for word in words {
            builder.push(word.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Build a graph from tokens, keyed by their normalized form
    pub fn from_tokens(tokens: &[Token]) -> Result<G> {
        Self::from_words(tokens.iter().map(|t| t.normalized.as_str()))
    }

    /// Tokenize `text` and build its affinity graph
    pub fn from_text(text: &str, tokenizer: &Tokenizer) -> Result<G> {
        Self::from_tokens(&tokenizer.tokenize(text))
    }
}

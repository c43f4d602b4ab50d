//! Property-based tests using proptest
//!
//! Random operation sequences are applied to both graph representations and
//! to a plain map model; all three must agree after every step.

use graph_poet::*;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u8),
    Set(u8, u8, Weight),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6).prop_map(Op::Add),
        (0u8..6).prop_map(Op::Remove),
        (0u8..6, 0u8..6, 0i64..5).prop_map(|(s, t, w)| Op::Set(s, t, w)),
    ]
}

/// Reference model: vertex set plus edge map
#[derive(Debug, Default)]
struct Model {
    vertices: BTreeSet<u8>,
    edges: BTreeMap<(u8, u8), Weight>,
}

impl Model {
    fn apply(&mut self, op: &Op) -> Weight {
        match *op {
            Op::Add(v) => self.vertices.insert(v) as Weight,
            Op::Remove(v) => {
                self.edges.retain(|&(s, t), _| s != v && t != v);
                self.vertices.remove(&v) as Weight
            }
            Op::Set(s, t, w) if w > 0 => {
                self.vertices.insert(s);
                self.vertices.insert(t);
                self.edges.insert((s, t), w).unwrap_or(0)
            }
            Op::Set(s, t, _) => self.edges.remove(&(s, t)).unwrap_or(0),
        }
    }
}

fn apply<G: WeightedDigraph<u8>>(graph: &mut G, op: &Op) -> Weight {
    match *op {
        Op::Add(v) => graph.add(v) as Weight,
        Op::Remove(v) => graph.remove(&v) as Weight,
        Op::Set(s, t, w) => graph.set(s, t, w).unwrap(),
    }
}

fn edges_of<G: WeightedDigraph<u8>>(graph: &G) -> BTreeMap<(u8, u8), Weight> {
    graph
        .vertices()
        .into_iter()
        .flat_map(|s| graph.targets(&s).into_iter().map(move |(t, w)| ((s, t), w)))
        .collect()
}

fn check_invariants<G: WeightedDigraph<u8>>(graph: &G) -> std::result::Result<(), TestCaseError> {
    let vertices = graph.vertices();
    for v in &vertices {
        for (t, w) in graph.targets(v) {
            prop_assert!(w > 0, "stored weight {} for {} -> {}", w, v, t);
            prop_assert!(vertices.contains(&t), "dangling target {}", t);
            prop_assert_eq!(graph.sources(&t).get(v).copied(), Some(w));
        }
        for (s, w) in graph.sources(v) {
            prop_assert!(vertices.contains(&s), "dangling source {}", s);
            prop_assert_eq!(graph.targets(&s).get(v).copied(), Some(w));
        }
    }
    prop_assert_eq!(graph.vertex_count(), vertices.len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_representations_match_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut model = Model::default();
        let mut edge_list = EdgeListGraph::<u8>::new();
        let mut adjacency = AdjacencyGraph::<u8>::new();

        for op in &ops {
            let expected = model.apply(op);
            prop_assert_eq!(apply(&mut edge_list, op), expected, "edge list on {:?}", op);
            prop_assert_eq!(apply(&mut adjacency, op), expected, "adjacency on {:?}", op);

            check_invariants(&edge_list)?;
            check_invariants(&adjacency)?;

            let vertices: BTreeSet<u8> = adjacency.vertices().into_iter().collect();
            prop_assert_eq!(&vertices, &model.vertices);
            prop_assert_eq!(edges_of(&adjacency), model.edges.clone());
            prop_assert_eq!(edges_of(&edge_list), model.edges.clone());
            prop_assert_eq!(adjacency.edge_count(), model.edges.len());
            prop_assert_eq!(edge_list.edge_count(), model.edges.len());
        }
    }

    #[test]
    fn test_negative_weight_leaves_graph_untouched(
        ops in prop::collection::vec(op_strategy(), 0..30),
        s in 0u8..8,
        t in 0u8..8,
        w in i64::MIN..0
    ) {
        let mut graph = AdjacencyGraph::<u8>::new();
        for op in &ops {
            apply(&mut graph, op);
        }
        let before_vertices = graph.vertices();
        let before_edges = edges_of(&graph);

        let err = graph.set(s, t, w).unwrap_err();
        prop_assert!(err.is_invalid_argument());
        prop_assert_eq!(graph.vertices(), before_vertices);
        prop_assert_eq!(edges_of(&graph), before_edges);
    }

    #[test]
    fn test_add_twice(v in any::<u16>()) {
        let mut graph = EdgeListGraph::<u16>::new();
        prop_assert!(graph.add(v));
        prop_assert!(!graph.add(v));
        prop_assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_builder_weights_count_adjacent_pairs(
        words in prop::collection::vec("[a-d]", 0..40)
    ) {
        let graph: AdjacencyGraph<String> = AffinityBuilder::from_words(&words).unwrap();

        let mut expected: BTreeMap<(String, String), Weight> = BTreeMap::new();
        for pair in words.windows(2) {
            *expected.entry((pair[0].clone(), pair[1].clone())).or_insert(0) += 1;
        }

        let total: Weight = expected.values().sum();
        prop_assert_eq!(total, words.len().saturating_sub(1) as Weight);
        for ((from, to), weight) in &expected {
            prop_assert_eq!(graph.weight(from, to), *weight);
        }
        prop_assert_eq!(graph.edge_count(), expected.len());
    }

    #[test]
    fn test_poem_preserves_input_words(
        corpus in prop::collection::vec("[a-d]", 0..40),
        input in prop::collection::vec("[A-Da-d]{1,2}", 0..10)
    ) {
        let poet: GraphPoet = GraphPoet::from_corpus_text(&corpus.join(" ")).unwrap();
        let poem = poet.poem(&input.join(" "));

        // Removing inserted bridges must give back the input, in order
        let mut remaining = input.iter();
        let mut next = remaining.next();
        for word in poem.split(' ').filter(|w| !w.is_empty()) {
            if Some(&word.to_string()) == next {
                next = remaining.next();
            }
        }
        prop_assert!(next.is_none(), "input word {:?} missing from {:?}", next, poem);
        prop_assert!(!poem.starts_with(' ') && !poem.ends_with(' '));
    }

    #[test]
    fn test_deterministic_poems_are_stable(
        corpus in prop::collection::vec("[a-e]", 0..60),
        input in prop::collection::vec("[a-e]", 0..8)
    ) {
        let config = PoetConfig::default().with_determinism(DeterminismMode::Deterministic);
        let adjacency: GraphPoet<AdjacencyGraph<String>> =
            GraphPoet::with_config(&corpus.join(" "), config.clone()).unwrap();
        let edge_list: GraphPoet<EdgeListGraph<String>> =
            GraphPoet::with_config(&corpus.join(" "), config).unwrap();

        let input = input.join(" ");
        prop_assert_eq!(adjacency.poem(&input), edge_list.poem(&input));
    }
}

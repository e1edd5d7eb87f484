//! Phase 3 tests: randomized operation sequences checked against a flat edge set.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bipartite_graph::graph::{copy, Graph};

const A_RANGE: u16 = 40;
const B_RANGE: u16 = 25;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Check every structural invariant of `graph` against the reference edge set.
fn check(graph: &Graph<u16, u16>, model: &HashSet<(u16, u16)>) {
    assert_eq!(graph.edge_count(), model.len());

    let model_as: HashSet<u16> = model.iter().map(|(a, _)| *a).collect();
    let model_bs: HashSet<u16> = model.iter().map(|(_, b)| *b).collect();
    let as_: HashSet<u16> = graph.a_nodes().into_iter().collect();
    let bs: HashSet<u16> = graph.b_nodes().into_iter().collect();
    assert_eq!(as_, model_as);
    assert_eq!(bs, model_bs);
    assert_eq!(graph.na(), as_.len());
    assert_eq!(graph.nb(), bs.len());

    let mut deg_sum_a = 0;
    for a in 0..A_RANGE {
        let adj = graph.adj_to_a(&a);
        let unique: HashSet<u16> = adj.iter().copied().collect();
        assert_eq!(unique.len(), adj.len(), "duplicate neighbors of A-node {}", a);
        assert_eq!(graph.deg_a(&a), adj.len());
        // Present nodes always have at least one edge.
        assert_eq!(graph.contains_a(&a), !adj.is_empty());
        deg_sum_a += adj.len();
        for b in 0..B_RANGE {
            let adjacent = graph.adjacent(&a, &b);
            assert_eq!(adjacent, model.contains(&(a, b)));
            assert_eq!(adjacent, graph.adj_to_b(&b).contains(&a), "asymmetric ({}, {})", a, b);
        }
    }

    let mut deg_sum_b = 0;
    for b in 0..B_RANGE {
        assert_eq!(graph.deg_b(&b), graph.adj_to_b(&b).len());
        assert_eq!(graph.contains_b(&b), graph.deg_b(&b) > 0);
        deg_sum_b += graph.deg_b(&b);
    }
    assert_eq!(deg_sum_a, model.len());
    assert_eq!(deg_sum_b, model.len());
}

// ==================== Randomized Sequences ====================

#[test]
fn test_random_operations_keep_invariants() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graph: Graph<u16, u16> = Graph::new();
    let mut model: HashSet<(u16, u16)> = HashSet::new();

    for step in 0..2_000 {
        let a = rng.gen_range(0..A_RANGE);
        let b = rng.gen_range(0..B_RANGE);
        match rng.gen_range(0..10) {
            0..=5 => {
                graph.add(a, b);
                model.insert((a, b));
            }
            6..=7 => {
                graph.delete(&a, &b);
                model.remove(&(a, b));
            }
            8 => {
                graph.remove_a(&a);
                model.retain(|(x, _)| *x != a);
            }
            _ => {
                graph.remove_b(&b);
                model.retain(|(_, y)| *y != b);
            }
        }
        if step % 50 == 0 {
            check(&graph, &model);
        }
    }
    check(&graph, &model);
}

#[test]
fn test_random_teardown_empties_graph() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph: Graph<u16, u16> = Graph::new();
    for _ in 0..500 {
        graph.add(rng.gen_range(0..A_RANGE), rng.gen_range(0..B_RANGE));
    }

    let mut as_ = graph.a_nodes();
    as_.sort_unstable();
    for a in as_ {
        let bs = graph.adj_to_a(&a);
        graph.remove_a(&a);
        assert!(!graph.contains_a(&a));
        for b in bs {
            assert!(!graph.adjacent(&a, &b));
        }
    }
    assert!(graph.is_empty());
    assert_eq!(graph.nb(), 0);
    assert_eq!(graph, Graph::new());
}

#[test]
fn test_random_copy_independence() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph: Graph<u16, u16> = Graph::new();
    let mut model: HashSet<(u16, u16)> = HashSet::new();
    for _ in 0..300 {
        let (a, b) = (rng.gen_range(0..A_RANGE), rng.gen_range(0..B_RANGE));
        graph.add(a, b);
        model.insert((a, b));
    }

    let mut copied = copy(&graph);
    assert_eq!(copied, graph);
    for _ in 0..300 {
        let (a, b) = (rng.gen_range(0..A_RANGE), rng.gen_range(0..B_RANGE));
        if rng.gen_bool(0.5) {
            copied.add(a, b);
        } else {
            copied.delete(&a, &b);
        }
    }
    copied.remove_b(&0);

    check(&graph, &model);
}

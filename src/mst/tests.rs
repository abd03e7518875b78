use std::collections::BinaryHeap;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::graph::{AdjListGraph, MutableWeightedGraph, WeightT};

// Builds an undirected graph from (a, b, weight) triples
fn undirected_graph(n: usize, edges: &[(IndexT, IndexT, WeightT)]) -> AdjListGraph {
    let mut graph = AdjListGraph::new(n);
    for &(a, b, w) in edges {
        graph.add_edge_bidirectional(a, b, w).unwrap();
    }
    graph
}

// A connected graph: a random spanning chain plus `extra` random edges
fn random_connected_edges(
    rng: &mut StdRng,
    n: usize,
    extra: usize,
    max_weight: WeightT,
) -> Vec<(IndexT, IndexT, WeightT)> {
    let mut edges: Vec<(IndexT, IndexT, WeightT)> = (1..n as IndexT)
        .map(|i| (rng.random_range(0..i), i, rng.random_range(0..=max_weight)))
        .collect();
    for _ in 0..extra {
        edges.push((
            rng.random_range(0..n as IndexT),
            rng.random_range(0..n as IndexT),
            rng.random_range(0..=max_weight),
        ));
    }
    edges
}

#[test]
fn test_frontier_heap_pops_lightest_first() {
    let mut heap = BinaryHeap::new();
    for (dest, weight) in [(1, 9), (2, 3), (3, 7), (4, 0), (5, 3)] {
        heap.push(FrontierEdge {
            source: 0,
            dest,
            weight,
        });
    }

    let weights: Vec<WeightT> = std::iter::from_fn(|| heap.pop().map(|e| e.weight)).collect();
    assert_eq!(weights, vec![0, 3, 3, 7, 9]);
}

#[test]
fn test_triangle() {
    // 0-1 (1), 1-2 (2), 0-2 (10): the heavy edge is never used
    let graph = undirected_graph(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 10)]);

    let result = prim_mst(&graph, 0).unwrap();
    assert_eq!(result.total_weight, 3);
    assert_eq!(result.visited, 3);
    assert_eq!(result.tree_edges, vec![(0, 1, 1), (1, 2, 2)]);
}

#[test]
fn test_single_node() {
    let graph = AdjListGraph::new(1);

    let result = prim_mst(&graph, 0).unwrap();
    assert_eq!(result.total_weight, 0);
    assert!(result.spans(1));
    assert!(result.tree_edges.is_empty());
}

#[test]
fn test_start_out_of_range() {
    let graph = AdjListGraph::new(3);

    assert_eq!(
        total_mst_weight(&graph, 3),
        Err(MstError::StartOutOfRange { start: 3, n: 3 })
    );
    assert!(prim_mst(&AdjListGraph::new(0), 0).is_err());
}

#[test]
fn test_seeds_from_start_not_node_zero() {
    // node 0 only has a heavy one-way edge into the component of node 2;
    // seeding from node 0 instead of the start would pick it up
    let mut graph = undirected_graph(4, &[(1, 2, 5), (2, 3, 1)]);
    graph.add_edge_oneway(0, 1, 100).unwrap();

    let result = prim_mst(&graph, 2).unwrap();
    assert_eq!(result.total_weight, 6);
    assert_eq!(result.visited, 3);
    assert!(!result.spans(4));
    assert!(result.tree_edges.iter().all(|&(s, d, _)| s != 0 && d != 0));
}

#[test]
fn test_disconnected_component_is_ignored() {
    let graph = undirected_graph(5, &[(0, 1, 2), (1, 2, 2), (3, 4, 1)]);

    let result = prim_mst(&graph, 0).unwrap();
    assert_eq!(result.total_weight, 4);
    assert_eq!(result.visited, 3);
    assert!(!result.spans(graph.n()));

    // Kruskal sees the whole forest
    assert_eq!(kruskal_total_weight(&graph), 5);
}

#[test]
fn test_kruskal_can_use_oneway_edges_backwards() {
    // 2 -> 1 does not leave the start, so Prim's cannot use it to reach 1
    let mut graph = AdjListGraph::new(3);
    graph.add_edge_oneway(0, 1, 10).unwrap();
    graph.add_edge_oneway(0, 2, 10).unwrap();
    graph.add_edge_oneway(2, 1, 1).unwrap();

    assert_eq!(total_mst_weight(&graph, 0).unwrap(), 20);
    assert_eq!(kruskal_total_weight(&graph), 11);
}

#[test]
fn test_parallel_edges_pick_cheapest() {
    let graph = undirected_graph(2, &[(0, 1, 5), (0, 1, 2), (0, 1, 5)]);

    assert_eq!(total_mst_weight(&graph, 0).unwrap(), 2);
    assert_eq!(total_mst_weight(&graph, 1).unwrap(), 2);
}

#[test]
fn test_square_with_diagonal() {
    // node 3 is reachable from 0 (10) and from 2 (1); the cheap path wins
    let graph = undirected_graph(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 10), (0, 2, 4)]);

    let result = prim_mst(&graph, 0).unwrap();
    assert_eq!(result.total_weight, 3);
    assert_eq!(result.tree_edges.len(), 3);
}

#[test]
fn test_stale_entries_are_discarded() {
    // node 2 is pushed from 0 (5) and then from 1 (1) before it settles;
    // node 3 is isolated so the heap is drained instead of stopping early
    let graph = undirected_graph(4, &[(0, 1, 1), (0, 2, 5), (1, 2, 1)]);

    let result = prim_mst(&graph, 0).unwrap();
    assert_eq!(result.total_weight, 2);
    assert_eq!(result.visited, 3);
    assert_eq!(result.stale_entries, 1);
    assert_eq!(result.tree_edges, vec![(0, 1, 1), (1, 2, 1)]);
}

#[test]
fn test_no_stale_entries_on_a_path() {
    let graph = undirected_graph(3, &[(0, 1, 4), (1, 2, 4)]);

    let result = prim_mst(&graph, 0).unwrap();
    assert_eq!(result.total_weight, 8);
    assert_eq!(result.stale_entries, 0);
}

#[test]
fn test_zero_weight_edges() {
    let graph = undirected_graph(4, &[(0, 1, 0), (1, 2, 0), (2, 3, 0)]);
    assert_eq!(total_mst_weight(&graph, 3).unwrap(), 0);
}

#[test]
fn test_total_does_not_overflow_32_bits() {
    let mut graph = AdjListGraph::new(4);
    for i in 1..4 {
        graph.add_edge_oneway(0, i, WeightT::MAX).unwrap();
    }

    assert_eq!(
        total_mst_weight(&graph, 0).unwrap(),
        3 * TotalT::from(WeightT::MAX)
    );
}

#[test]
fn test_tree_edges_sum_to_total() {
    let mut rng = StdRng::seed_from_u64(7);
    let edges = random_connected_edges(&mut rng, 40, 120, 50);
    let graph = undirected_graph(40, &edges);

    let result = prim_mst(&graph, 0).unwrap();
    let sum: TotalT = result.tree_edges.iter().map(|&(_, _, w)| TotalT::from(w)).sum();

    assert_eq!(result.tree_edges.len(), 39);
    assert_eq!(sum, result.total_weight);
}

#[test]
fn test_prim_matches_kruskal() {
    let mut rng = StdRng::seed_from_u64(42);

    for trial in 0..50 {
        let n = rng.random_range(1..60);
        let extra = rng.random_range(0..3 * n);
        let edges = random_connected_edges(&mut rng, n, extra, 20);
        let graph = undirected_graph(n, &edges);

        let start = rng.random_range(0..n as IndexT);
        assert_eq!(
            total_mst_weight(&graph, start).unwrap(),
            kruskal_total_weight(&graph),
            "trial {} (n = {}, start = {})",
            trial,
            n,
            start
        );
    }
}

#[test]
fn test_insertion_order_does_not_matter() {
    let edges = [(0, 1, 3), (1, 2, 3), (2, 3, 1), (3, 0, 2), (1, 3, 2)];
    let expected = total_mst_weight(&undirected_graph(4, &edges), 0).unwrap();
    assert_eq!(expected, 5);

    for permutation in edges.iter().copied().permutations(edges.len()) {
        let graph = undirected_graph(4, &permutation);
        assert_eq!(
            total_mst_weight(&graph, 0).unwrap(),
            expected,
            "order {:?}",
            permutation
        );
    }
}

#[test]
fn test_weight_changes_are_monotone() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..30 {
        let n = rng.random_range(2..30);
        let extra = rng.random_range(0..2 * n);
        let mut edges = random_connected_edges(&mut rng, n, extra, 30);
        let before = total_mst_weight(&undirected_graph(n, &edges), 0).unwrap();

        let i = rng.random_range(0..edges.len());
        let original = edges[i].2;

        edges[i].2 = original + rng.random_range(1..10);
        let heavier = total_mst_weight(&undirected_graph(n, &edges), 0).unwrap();
        assert!(heavier >= before);

        edges[i].2 = original.saturating_sub(rng.random_range(1..10));
        let lighter = total_mst_weight(&undirected_graph(n, &edges), 0).unwrap();
        assert!(lighter <= before);
    }
}

//! Prim's algorithm over a weighted adjacency-list graph
//!
//! Uses a plain min-heap without decrease-key. A node can be pushed several
//! times; entries whose destination is already in the tree are dropped when
//! they are popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::graph::{IndexT, WeightT, WeightedGraph};

use super::{MstError, TotalT};

/// a candidate edge on the frontier of the growing tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEdge {
    pub source: IndexT,
    pub dest: IndexT,
    pub weight: WeightT,
}

// Reversed so that BinaryHeap (a max-heap) pops the lightest edge first.
impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.dest.cmp(&self.dest))
            .then_with(|| other.source.cmp(&self.source))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// result of a single Prim's run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MstResult {
    /// sum of the weights of `tree_edges`
    pub total_weight: TotalT,
    /// number of nodes reached, including the start node
    pub visited: usize,
    /// `(parent, child, weight)` in the order the children were settled
    pub tree_edges: Vec<(IndexT, IndexT, WeightT)>,
    /// frontier entries popped after their destination was already settled
    pub stale_entries: usize,
}

impl MstResult {
    /// true if every node of a graph with `n` nodes was reached
    pub fn spans(&self, n: usize) -> bool {
        self.visited == n
    }
}

fn push_edges(
    graph: &dyn WeightedGraph,
    node: IndexT,
    visited: &[bool],
    frontier: &mut BinaryHeap<FrontierEdge>,
) {
    for edge in graph.edges(node) {
        // already settled; it could only ever be popped as a stale entry
        if visited[edge.dest as usize] {
            continue;
        }
        frontier.push(FrontierEdge {
            source: node,
            dest: edge.dest,
            weight: edge.weight,
        });
    }
}

/// Builds a minimum spanning tree of the component containing `start`.
///
/// Nodes outside that component are never visited and contribute nothing to
/// the total; callers that need a spanning tree should check
/// [`MstResult::spans`]. Visited state lives only for the duration of the call.
pub fn prim_mst(graph: &dyn WeightedGraph, start: IndexT) -> Result<MstResult, MstError> {
    let n = graph.n();
    if start as usize >= n {
        return Err(MstError::StartOutOfRange { start, n });
    }

    let mut visited = vec![false; n];
    let mut frontier: BinaryHeap<FrontierEdge> = BinaryHeap::new();
    let mut result = MstResult {
        total_weight: 0,
        visited: 1,
        tree_edges: Vec::with_capacity(n - 1),
        stale_entries: 0,
    };
    let mut unpopped = 0usize;

    visited[start as usize] = true;
    push_edges(graph, start, &visited, &mut frontier);

    // repeatedly take the lightest edge so far and attempt to add it to the tree
    while let Some(cheapest) = frontier.pop() {
        let dest = cheapest.dest as usize;
        if visited[dest] {
            result.stale_entries += 1;
            continue;
        }

        trace!(
            source = cheapest.source,
            dest = cheapest.dest,
            weight = cheapest.weight,
            "settled node"
        );
        visited[dest] = true;
        result.visited += 1;
        result.total_weight += TotalT::from(cheapest.weight);
        result
            .tree_edges
            .push((cheapest.source, cheapest.dest, cheapest.weight));

        // every node reached: whatever is left in the heap is stale
        if result.visited == n {
            unpopped = frontier.len();
            break;
        }
        push_edges(graph, cheapest.dest, &visited, &mut frontier);
    }

    debug!(
        start,
        nodes = n,
        visited = result.visited,
        stale_entries = result.stale_entries,
        unpopped,
        total = result.total_weight,
        "prim's mst complete"
    );

    Ok(result)
}

/// total weight of the minimum spanning tree grown from `start`
pub fn total_mst_weight(graph: &dyn WeightedGraph, start: IndexT) -> Result<TotalT, MstError> {
    prim_mst(graph, start).map(|result| result.total_weight)
}

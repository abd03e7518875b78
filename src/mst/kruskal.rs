//! Kruskal's algorithm, an independent check on Prim's totals

use tracing::debug;

use crate::graph::{IndexT, WeightT, WeightedGraph};
use crate::util::DisjointSets;

use super::TotalT;

/// Total weight of a minimum spanning forest of `graph`.
///
/// Every stored edge is treated as undirected, so the two halves of a
/// bidirectional edge are simply considered twice. This equals the Prim's
/// total from a root only when the graph is connected and every one-way edge
/// leaves that root, as in a query's augmented graph. Other one-way edges can
/// be used backwards here but never by Prim's.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal_total_weight(graph: &dyn WeightedGraph) -> TotalT {
    let n = graph.n();

    let mut edges: Vec<(WeightT, IndexT, IndexT)> = (0..n as IndexT)
        .flat_map(move |u| graph.edges(u).iter().map(move |e| (e.weight, u, e.dest)))
        .collect();
    edges.sort_unstable();

    let mut sets = DisjointSets::new(n);
    let mut total: TotalT = 0;
    let mut joined = 0usize;

    for (weight, u, v) in edges {
        if sets.union(u as usize, v as usize) {
            total += TotalT::from(weight);
            joined += 1;

            // Stop when we have n-1 edges
            if joined + 1 == n {
                break;
            }
        }
    }

    debug!(nodes = n, tree_edges = joined, total, "kruskal's mst complete");
    total
}

//! Library-or-road queries and their reduction to a minimum spanning tree
//!
//! Each city must either get a library or be connected by roads to a city
//! that has one. Adding a synthetic root connected to every city at the
//! library cost turns this into an MST problem: the MST weight of the
//! augmented graph, grown from the root, is the minimum total cost.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{AdjListGraph, IndexT, MutableWeightedGraph, WeightT};
use crate::mst::{kruskal_total_weight, prim_mst, MstResult, TotalT};

pub mod parse;


pub use parse::parse_queries;

/// index of the synthetic root ("build a library here") in every query graph
pub const SYNTHETIC_ROOT: IndexT = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub cities: u32,
    pub library_cost: WeightT,
    pub road_cost: WeightT,
    /// 1-based city pairs
    pub roads: Vec<(u32, u32)>,
}

impl Query {
    /// Builds the augmented graph: `cities + 1` nodes with the synthetic root at
    /// index 0, a one-way root edge per city at the library cost, and a
    /// bidirectional edge per road at the road cost.
    pub fn build_graph(&self) -> Result<AdjListGraph> {
        let mut graph = AdjListGraph::new(self.cities as usize + 1);

        for city in 1..=self.cities {
            graph.add_edge_oneway(SYNTHETIC_ROOT, city, self.library_cost)?;
        }

        for (r, &(c1, c2)) in self.roads.iter().enumerate() {
            if c1 == 0 || c2 == 0 {
                return Err(Error::invalid_input(format!(
                    "road {r} ({c1}, {c2}) uses city 0; cities are numbered from 1"
                )));
            }
            graph.add_edge_bidirectional(c1, c2, self.road_cost)?;
        }

        Ok(graph)
    }

    /// minimum total cost to give every city access to a library
    pub fn solve(&self) -> Result<TotalT> {
        let graph = self.build_graph()?;
        let result = prim_mst(&graph, SYNTHETIC_ROOT)?;

        ensure_spanning(&result, graph.n())?;

        debug!(
            cities = self.cities,
            roads = self.roads.len(),
            total = result.total_weight,
            "solved query"
        );
        Ok(result.total_weight)
    }

    /// like [`Query::solve`], but cross-checks the answer with Kruskal's algorithm
    pub fn solve_verified(&self) -> Result<TotalT> {
        let total = self.solve()?;
        let expected = kruskal_total_weight(&self.build_graph()?);
        ensure_totals_agree(total, expected)
    }
}

/// Fails with `InvariantViolation` unless the tree reached all `n` nodes.
///
/// Every city has an edge from the synthetic root, so a tree grown from the
/// root over a query graph always spans it.
pub fn ensure_spanning(result: &MstResult, n: usize) -> Result<()> {
    if result.spans(n) {
        Ok(())
    } else {
        Err(Error::InvariantViolation {
            message: format!(
                "spanning tree reached {} of {} nodes from the synthetic root",
                result.visited, n
            ),
        })
    }
}

/// returns the Prim's total if it agrees with an independently computed one
pub fn ensure_totals_agree(prim: TotalT, kruskal: TotalT) -> Result<TotalT> {
    if prim == kruskal {
        Ok(prim)
    } else {
        Err(Error::InvariantViolation {
            message: format!("prim's total {prim} differs from kruskal's total {kruskal}"),
        })
    }
}

/// Solves every query, returning the answers in input order.
///
/// Queries share no state, so `parallel` simply fans them out over rayon's pool.
pub fn solve_all(queries: &[Query], parallel: bool) -> Result<Vec<TotalT>> {
    info!(queries = queries.len(), parallel, "solving queries");

    if parallel {
        queries.par_iter().map(Query::solve).collect()
    } else {
        queries.iter().map(Query::solve).collect()
    }
}

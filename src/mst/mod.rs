//! Minimum spanning tree algorithms

#[cfg(test)]
mod tests;

pub mod kruskal;
pub mod prim;

pub use kruskal::kruskal_total_weight;
pub use prim::{prim_mst, total_mst_weight, FrontierEdge, MstResult};

use crate::graph::IndexT;

/// MST totals are accumulated in 64 bits; a sum of 32-bit weights overflows 32 bits quickly.
pub type TotalT = u64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MstError {
    #[error("start node {start} is out of range for a graph with {n} nodes")]
    StartOutOfRange { start: IndexT, n: usize },
}

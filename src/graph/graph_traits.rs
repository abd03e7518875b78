//! Traits for weighted graph interfaces

use super::GraphConstructionError;

pub type IndexT = u32;
pub type WeightT = u32;

/// an outgoing edge, stored on its source node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub dest: IndexT,
    pub weight: WeightT,
}

impl Edge {
    pub fn new(dest: IndexT, weight: WeightT) -> Edge {
        Edge { dest, weight }
    }
}

pub trait WeightedGraph {
    /// number of nodes
    fn n(&self) -> usize;

    /// outgoing edges of a node, in insertion order
    fn edges(&self, i: IndexT) -> &[Edge];
}

pub trait MutableWeightedGraph {
    fn add_edge_oneway(
        &mut self,
        source: IndexT,
        dest: IndexT,
        weight: WeightT,
    ) -> Result<(), GraphConstructionError>;

    fn add_edge_bidirectional(
        &mut self,
        a: IndexT,
        b: IndexT,
        weight: WeightT,
    ) -> Result<(), GraphConstructionError>;
}

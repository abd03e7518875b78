//! Weighted graph implementation and associated functionality


mod adj_list_graph;
mod graph_traits;

pub use adj_list_graph::*;
pub use graph_traits::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphConstructionError {
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: IndexT, n: usize },
}

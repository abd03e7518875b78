//! a weighted graph implementation using a vector of adjacency lists

use std::fmt;

use itertools::Itertools;

use super::{Edge, GraphConstructionError, IndexT, MutableWeightedGraph, WeightT, WeightedGraph};

/// a node owns its outgoing edges; neighbors are referenced by index, never by address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    edges: Vec<Edge>,
}

impl Node {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Adjacency-list graph over a fixed number of nodes.
///
/// The node count is set at construction and never changes. Edges can only be
/// appended; there is no removal and no de-duplication, so inserting the same
/// edge twice produces a parallel edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjListGraph {
    nodes: Vec<Node>,
}

impl AdjListGraph {
    /// constructs a new AdjListGraph with `n` nodes and no edges
    pub fn new(n: usize) -> AdjListGraph {
        AdjListGraph {
            nodes: vec![Node::default(); n],
        }
    }

    /// returns the number of nodes in the graph
    pub fn n(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// returns the outgoing edges of a node
    pub fn get_edges(&self, i: IndexT) -> &[Edge] {
        assert!((i as usize) < self.n());
        self.nodes[i as usize].edges()
    }

    /// out-degree of a node
    pub fn degree(&self, i: IndexT) -> usize {
        self.get_edges(i).len()
    }

    /// sum of degrees of all nodes
    pub fn total_edges(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// maximum degree of the graph
    pub fn max_degree(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| n.edges.len())
            .max()
            .unwrap_or(0)
    }

    /// Moves the node collection out, leaving this graph empty.
    pub fn take(&mut self) -> AdjListGraph {
        std::mem::take(self)
    }

    fn check_node(&self, node: IndexT) -> Result<(), GraphConstructionError> {
        if (node as usize) < self.n() {
            Ok(())
        } else {
            Err(GraphConstructionError::NodeOutOfRange { node, n: self.n() })
        }
    }
}

impl WeightedGraph for AdjListGraph {
    fn n(&self) -> usize {
        self.n()
    }

    fn edges(&self, i: IndexT) -> &[Edge] {
        self.get_edges(i)
    }
}

impl MutableWeightedGraph for AdjListGraph {
    /// adds a ONE-WAY edge from `source` to `dest`; `dest` is not modified
    fn add_edge_oneway(
        &mut self,
        source: IndexT,
        dest: IndexT,
        weight: WeightT,
    ) -> Result<(), GraphConstructionError> {
        self.check_node(source)?;
        self.check_node(dest)?;
        self.nodes[source as usize].edges.push(Edge::new(dest, weight));
        Ok(())
    }

    /// adds two independent one-way edges `a -> b` and `b -> a` with the same weight.
    ///
    /// Both endpoints are checked before either edge is inserted.
    fn add_edge_bidirectional(
        &mut self,
        a: IndexT,
        b: IndexT,
        weight: WeightT,
    ) -> Result<(), GraphConstructionError> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.nodes[a as usize].edges.push(Edge::new(b, weight));
        self.nodes[b as usize].edges.push(Edge::new(a, weight));
        Ok(())
    }
}

/// one line per node: `i: (dest weight) (dest weight) ...`
impl fmt::Display for AdjListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            write!(f, "{i}:")?;
            if !node.edges.is_empty() {
                write!(
                    f,
                    " {}",
                    node.edges
                        .iter()
                        .format_with(" ", |e, g| g(&format_args!("({} {})", e.dest, e.weight)))
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

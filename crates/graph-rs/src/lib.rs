use std::{error::Error, fmt::Display};

use graph::Edge;

pub mod algorithms;
pub mod graph;
pub mod input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    InvalidVertex(usize),
    InvalidEdge { source: usize, destiny: usize },
    TooManyVertices(usize),
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVertex(node) => write!(f, "vertex {} not found in graph", node),
            Self::InvalidEdge { source, destiny } => {
                write!(f, "edge ({}, {}) has an endpoint outside the graph", source, destiny)
            }
            Self::TooManyVertices(count) => {
                write!(f, "cannot allocate adjacency lists for {} vertices", count)
            }
        }
    }
}

/// Adjacency-list contract the traversals in [`algorithms`] are written against.
///
/// Vertex ids are dense: every id `< node_count()` is a vertex. Each stored
/// [`Edge`] lives in the list of its source only, so undirected graphs are
/// represented by inserting both directions.
pub trait Graph {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Edges leaving `node`, in insertion order.
    fn neighbors(&self, node: usize) -> Result<&[Edge], GraphError>;

    fn degree(&self, node: usize) -> Result<usize, GraphError> {
        self.neighbors(node).map(<[Edge]>::len)
    }

    fn edges(&self) -> impl Iterator<Item = &Edge> + '_;

    /// Inserts `edge` unless an edge with the same `(source, destiny)` is already
    /// stored. Returns whether the graph changed.
    fn insert(&mut self, edge: Edge) -> Result<bool, GraphError>;

    fn is_edge(&self, source: usize, destiny: usize) -> Result<bool, GraphError>;

    /// Returns the stored edge or [`Edge::absent`] if there is none.
    fn get_edge(&self, source: usize, destiny: usize) -> Result<Edge, GraphError>;
}

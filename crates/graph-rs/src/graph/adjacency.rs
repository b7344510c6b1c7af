use log::{debug, trace};

use crate::{Graph, GraphError, graph::Edge};

/// Graph over the vertices `0..number_of_vertices` storing one edge list per
/// vertex.
///
/// The vertex set is fixed at construction and the graph only grows. Edges are
/// kept in insertion order and an edge is only stored in the list of its
/// source, `is_directed` does not change that.
#[derive(Debug, PartialEq)]
pub struct AdjacencyGraph {
    number_of_edges: usize,
    is_directed: bool,
    adjacency: Vec<Vec<Edge>>,
}

impl AdjacencyGraph {
    pub fn new(number_of_vertices: usize, is_directed: bool) -> AdjacencyGraph {
        Self {
            number_of_edges: 0,
            is_directed,
            adjacency: vec![Vec::new(); number_of_vertices],
        }
    }

    /// Like [`AdjacencyGraph::new`], but fails instead of aborting when the
    /// adjacency lists for `number_of_vertices` cannot be allocated.
    pub fn try_new(number_of_vertices: usize, is_directed: bool) -> Result<AdjacencyGraph, GraphError> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(number_of_vertices)
            .map_err(|_| GraphError::TooManyVertices(number_of_vertices))?;
        adjacency.resize_with(number_of_vertices, Vec::new);

        Ok(Self {
            number_of_edges: 0,
            is_directed,
            adjacency,
        })
    }

    /// Builds a graph with `number_of_vertices` vertices from `edges`.
    pub fn from_edges(
        number_of_vertices: usize,
        is_directed: bool,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<AdjacencyGraph, GraphError> {
        let mut graph = AdjacencyGraph::try_new(number_of_vertices, is_directed)?;
        for edge in edges {
            graph.insert(edge)?;
        }
        debug!(
            "Built graph with {} vertices and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Inserts `(a, b)` and `(b, a)` with the same weight. Returns whether
    /// either direction was new.
    pub fn insert_undirected(&mut self, a: usize, b: usize, weight: f64) -> Result<bool, GraphError> {
        self.check_edge(a, b)?;
        let forward = self.insert(Edge::with_weight(a, b, weight))?;
        let backward = self.insert(Edge::with_weight(b, a, weight))?;

        Ok(forward || backward)
    }

    /// Mutable view of the edges leaving `node`.
    ///
    /// The slice has a fixed length so the edge count stays consistent, callers
    /// may reorder it but must not store two edges with the same destiny.
    pub fn neighbors_mut(&mut self, node: usize) -> Result<&mut [Edge], GraphError> {
        self.adjacency
            .get_mut(node)
            .map(Vec::as_mut_slice)
            .ok_or(GraphError::InvalidVertex(node))
    }

    fn check_edge(&self, source: usize, destiny: usize) -> Result<(), GraphError> {
        if source >= self.node_count() || destiny >= self.node_count() {
            return Err(GraphError::InvalidEdge { source, destiny });
        }
        Ok(())
    }

    fn find(&self, source: usize, destiny: usize) -> Result<Option<&Edge>, GraphError> {
        self.check_edge(source, destiny)?;

        Ok(self.adjacency[source]
            .iter()
            .find(|edge| edge.destiny() == destiny))
    }
}

impl Graph for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.number_of_edges
    }

    fn is_directed(&self) -> bool {
        self.is_directed
    }

    fn neighbors(&self, node: usize) -> Result<&[Edge], GraphError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidVertex(node))
    }

    fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }

    fn insert(&mut self, edge: Edge) -> Result<bool, GraphError> {
        if self.is_edge(edge.source(), edge.destiny())? {
            trace!("skipping duplicate edge {}", edge);
            return Ok(false);
        }

        self.adjacency[edge.source()].push(edge);
        self.number_of_edges += 1;

        Ok(true)
    }

    fn is_edge(&self, source: usize, destiny: usize) -> Result<bool, GraphError> {
        Ok(self.find(source, destiny)?.is_some())
    }

    fn get_edge(&self, source: usize, destiny: usize) -> Result<Edge, GraphError> {
        Ok(self
            .find(source, destiny)?
            .copied()
            .unwrap_or_else(|| Edge::absent(source, destiny)))
    }
}

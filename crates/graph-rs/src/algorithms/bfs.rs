use std::collections::VecDeque;

use log::trace;

use crate::{Graph, GraphError};

struct BfsData {
    visited: Vec<bool>,
    queue: VecDeque<(usize, usize)>,
}

impl BfsData {
    fn new(node_count: usize) -> Self {
        BfsData {
            visited: vec![false; node_count],
            queue: VecDeque::new(),
        }
    }

    /// Visits every node reachable from `start` along stored edges and calls
    /// `on_visit` with the node and its hop count. Stops early when `on_visit`
    /// returns `false`.
    fn run<G, F>(&mut self, g: &G, start: usize, mut on_visit: F) -> Result<(), GraphError>
    where
        G: Graph,
        F: FnMut(usize, usize) -> bool,
    {
        if start >= g.node_count() {
            return Err(GraphError::InvalidVertex(start));
        }

        self.visited[start] = true;
        self.queue.push_back((start, 0));

        while let Some((node, depth)) = self.queue.pop_front() {
            if !on_visit(node, depth) {
                trace!("bfs from {} stopped at node {}", start, node);
                break;
            }

            for edge in g.neighbors(node)? {
                let neighbor = edge.destiny();
                if !self.visited[neighbor] {
                    self.visited[neighbor] = true;
                    self.queue.push_back((neighbor, depth + 1));
                }
            }
        }

        Ok(())
    }
}

/// Breadth-first traversals following the stored edges from their source.
pub trait Bfs {
    /// Nodes reachable from `start` in visiting order, `start` first.
    fn bfs_order(&self, start: usize) -> Result<Vec<usize>, GraphError>;

    /// Number of nodes reachable from `start`, not counting `start` itself.
    fn reachable_count(&self, start: usize) -> Result<usize, GraphError> {
        Ok(self.bfs_order(start)?.len() - 1)
    }

    /// Fewest edges on a path from `start` to `target`, `None` if `target` is
    /// not reachable.
    fn hop_distance(&self, start: usize, target: usize) -> Result<Option<usize>, GraphError>;
}

impl<G> Bfs for G
where
    G: Graph,
{
    fn bfs_order(&self, start: usize) -> Result<Vec<usize>, GraphError> {
        let mut order = Vec::new();
        BfsData::new(self.node_count()).run(self, start, |node, _| {
            order.push(node);
            true
        })?;

        Ok(order)
    }

    fn hop_distance(&self, start: usize, target: usize) -> Result<Option<usize>, GraphError> {
        if target >= self.node_count() {
            return Err(GraphError::InvalidVertex(target));
        }

        let mut distance = None;
        BfsData::new(self.node_count()).run(self, start, |node, depth| {
            if node == target {
                distance = Some(depth);
            }
            distance.is_none()
        })?;

        Ok(distance)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        Graph, GraphError,
        graph::{Edge, adjacency::AdjacencyGraph},
    };

    use super::Bfs;

    fn setup() -> AdjacencyGraph {
        let mut g = AdjacencyGraph::new(6, false);
        for (a, b) in [(0, 1), (1, 2), (0, 3), (3, 2)] {
            g.insert_undirected(a, b, 1.0).unwrap();
        }
        g.insert(Edge::new(4, 5)).unwrap();
        g
    }

    #[test]
    fn bfs_order() {
        let g = setup();

        assert_eq!(g.bfs_order(0), Ok(vec![0, 1, 3, 2]));
        assert_eq!(g.bfs_order(4), Ok(vec![4, 5]));
        assert_eq!(g.bfs_order(5), Ok(vec![5]));
    }

    #[test]
    fn reachable_count() {
        let g = setup();

        assert_eq!(g.reachable_count(2), Ok(3));
        assert_eq!(g.reachable_count(4), Ok(1));
        assert_eq!(g.reachable_count(5), Ok(0), "Edge 4 -> 5 is one-directional.");
    }

    #[test]
    fn hop_distance() {
        let g = setup();

        assert_eq!(g.hop_distance(0, 0), Ok(Some(0)));
        assert_eq!(g.hop_distance(0, 2), Ok(Some(2)));
        assert_eq!(g.hop_distance(1, 3), Ok(Some(2)));
        assert_eq!(g.hop_distance(0, 4), Ok(None));
        assert_eq!(g.hop_distance(5, 4), Ok(None));
        assert_eq!(g.hop_distance(4, 5), Ok(Some(1)));
    }

    #[test]
    fn invalid_start() {
        let g = setup();

        assert_eq!(g.bfs_order(6), Err(GraphError::InvalidVertex(6)));
        assert_eq!(g.reachable_count(9), Err(GraphError::InvalidVertex(9)));
        assert_eq!(g.hop_distance(0, 6), Err(GraphError::InvalidVertex(6)));
        assert_eq!(g.hop_distance(6, 0), Err(GraphError::InvalidVertex(6)));
    }
}

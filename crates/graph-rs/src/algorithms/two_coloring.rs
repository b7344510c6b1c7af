use std::{collections::VecDeque, error::Error, fmt::Display};

use log::{debug, info, trace};

use crate::{Graph, graph::Edge};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    A,
    B,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
        }
    }
}

/// Edge whose endpoints ended up with the same color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OddCycle {
    pub edge: Edge,
}

impl Error for OddCycle {}

impl Display for OddCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge {} closes an odd cycle", self.edge)
    }
}

struct TwoColoringData {
    colors: Vec<Option<Color>>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
    // Every stored edge, filed under both of its endpoints.
    links: Vec<Vec<Edge>>,
}

impl TwoColoringData {
    fn new<G: Graph>(g: &G) -> Self {
        let mut links = vec![Vec::new(); g.node_count()];
        for edge in g.edges() {
            links[edge.source()].push(*edge);
            if !edge.is_loop() {
                links[edge.destiny()].push(*edge);
            }
        }

        TwoColoringData {
            colors: vec![None; g.node_count()],
            visited: vec![false; g.node_count()],
            queue: VecDeque::new(),
            links,
        }
    }

    fn run(&mut self) -> Result<(), OddCycle> {
        info!("Two-coloring graph with {} nodes", self.colors.len());

        for v in 0..self.colors.len() {
            if !self.visited[v] {
                trace!("new component at node {}", v);
                self.colors[v] = Some(Color::A);
                self.queue.push_back(v);
                self.visit_component()?;
            }
        }

        Ok(())
    }

    fn visit_component(&mut self) -> Result<(), OddCycle> {
        while let Some(u) = self.queue.pop_front() {
            self.visited[u] = true;
            let Some(color) = self.colors[u] else {
                continue;
            };

            for edge in &self.links[u] {
                let w = if edge.source() == u {
                    edge.destiny()
                } else {
                    edge.source()
                };

                match self.colors[w] {
                    None => {
                        self.colors[w] = Some(color.opposite());
                        self.queue.push_back(w);
                    }
                    Some(other) if other == color => {
                        debug!("conflict on edge {}", edge);
                        return Err(OddCycle { edge: *edge });
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }
}

/// Two-coloring by one breadth-first pass that starts a new component at every
/// vertex not reached so far.
///
/// Each stored edge constrains both of its endpoints, no matter in which
/// adjacency list it is stored. Self-loops can never be colored.
pub trait TwoColoring {
    /// Color of every vertex, indexed by vertex id, or the first conflicting
    /// edge found.
    fn two_coloring(&self) -> Result<Vec<Color>, OddCycle>;

    fn is_two_colorable(&self) -> bool {
        self.two_coloring().is_ok()
    }
}

impl<G> TwoColoring for G
where
    G: Graph,
{
    fn two_coloring(&self) -> Result<Vec<Color>, OddCycle> {
        let mut data = TwoColoringData::new(self);

        data.run()?;

        Ok(data.colors.into_iter().flatten().collect())
    }
}

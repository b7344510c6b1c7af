use std::fmt::Display;

use graph_rs::{
    Graph,
    algorithms::bfs::Bfs,
    graph::adjacency::AdjacencyGraph,
    input::{ParseError, numbered_lines},
};
use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::GrafosError;

pub const DEFAULT_REFERENCE: &str = "Kevin Bacon";

/// Dense ids for names in order of first appearance.
#[derive(Debug, Default)]
pub struct Interner {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl Interner {
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(id) = self.index.get(name) {
            return *id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Metric {
    /// Actors reachable from the queried actor.
    #[default]
    Reachable,
    /// Hops between the queried actor and the reference actor.
    Distance,
}

/// Actors linked by the movies they share.
///
/// Every line `actor;movie;actor` connects both actors in both directions, the
/// edge weight is the id of the movie.
#[derive(Debug)]
pub struct CastGraph {
    graph: AdjacencyGraph,
    actors: Interner,
    movies: Interner,
}

impl CastGraph {
    pub fn parse(text: &str) -> Result<CastGraph, GrafosError> {
        let mut actors = Interner::default();
        let mut movies = Interner::default();
        let mut links = Vec::new();

        for (line, record) in numbered_lines(text) {
            let fields: Vec<&str> = record.split(';').map(str::trim).collect();
            let [first, movie, second] = fields[..] else {
                return Err(ParseError::FieldCount {
                    line,
                    expected: 3,
                    found: fields.len(),
                }
                .into());
            };
            for (field, expected) in [(first, "actor"), (movie, "movie"), (second, "actor")] {
                if field.is_empty() {
                    return Err(ParseError::MissingToken { line, expected }.into());
                }
            }

            let first = actors.intern(first);
            let movie = movies.intern(movie);
            let second = actors.intern(second);
            links.push((first, movie, second));
        }

        let mut graph = AdjacencyGraph::new(actors.len(), false);
        for (first, movie, second) in links {
            graph.insert_undirected(first, second, movie as f64)?;
        }

        info!(
            "Loaded cast with {} actors, {} movies and {} edges",
            actors.len(),
            movies.len(),
            graph.edge_count()
        );

        Ok(CastGraph {
            graph,
            actors,
            movies,
        })
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn actors(&self) -> &Interner {
        &self.actors
    }

    pub fn movies(&self) -> &Interner {
        &self.movies
    }

    fn actor_id(&self, actor: &str) -> Result<usize, GrafosError> {
        self.actors
            .get(actor)
            .ok_or_else(|| GrafosError::ActorNotFound(actor.to_string()))
    }

    /// Number of actors reachable from `actor`, not counting `actor`.
    pub fn bacon_number(&self, actor: &str) -> Result<usize, GrafosError> {
        Ok(self.graph.reachable_count(self.actor_id(actor)?)?)
    }

    /// Fewest co-starring hops between `actor` and `reference`, `None` if they
    /// are not connected.
    pub fn bacon_distance(
        &self,
        actor: &str,
        reference: &str,
    ) -> Result<Option<usize>, GrafosError> {
        let target = self.actor_id(reference)?;
        Ok(self.graph.hop_distance(self.actor_id(actor)?, target)?)
    }

    /// Movie of the first edge stored for `actor`.
    pub fn first_movie(&self, actor: &str) -> Result<Option<&str>, GrafosError> {
        let neighbors = self.graph.neighbors(self.actor_id(actor)?)?;

        Ok(neighbors
            .first()
            .and_then(|edge| self.movies.name(edge.weight() as usize)))
    }

    /// One entry per actor, sorted by name.
    pub fn report(
        &self,
        reference: &str,
        metric: Metric,
    ) -> Result<Vec<BaconEntry<'_>>, GrafosError> {
        let mut names: Vec<&str> = self.actors.names().collect();
        names.sort_unstable();

        names
            .into_iter()
            .map(|actor| -> Result<BaconEntry, GrafosError> {
                let number = match metric {
                    Metric::Reachable => Some(self.bacon_number(actor)?),
                    Metric::Distance => self.bacon_distance(actor, reference)?,
                };
                let movie = if actor == reference {
                    None
                } else {
                    self.first_movie(actor)?
                };
                debug!("{}: {:?} via {:?}", actor, number, movie);

                Ok(BaconEntry {
                    actor,
                    number,
                    movie,
                })
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaconEntry<'a> {
    pub actor: &'a str,
    /// `None` when the actor cannot reach the reference actor.
    pub number: Option<usize>,
    pub movie: Option<&'a str>,
}

impl Display for BaconEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "O numero de Bacon de {} é ", self.actor)?;
        match self.number {
            Some(number) => write!(f, "{}", number)?,
            None => write!(f, "infinito")?,
        }
        write!(f, " pelo filme {}", self.movie.unwrap_or_default())
    }
}

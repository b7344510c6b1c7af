use std::{fmt::Display, hash::Hash};

use serde::{Deserialize, Serialize};

pub mod adjacency;

pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Connection from `source` to `destiny`.
///
/// Two edges are equal when they connect the same pair, the weight is not part
/// of the identity. Lookups that miss return an [`Edge::absent`] edge with an
/// infinite weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    source: usize,
    destiny: usize,
    weight: f64,
}

impl Edge {
    pub fn new(source: usize, destiny: usize) -> Edge {
        Self::with_weight(source, destiny, DEFAULT_WEIGHT)
    }

    pub fn with_weight(source: usize, destiny: usize, weight: f64) -> Edge {
        Self {
            source,
            destiny,
            weight,
        }
    }

    pub fn absent(source: usize, destiny: usize) -> Edge {
        Self::with_weight(source, destiny, f64::INFINITY)
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn destiny(&self) -> usize {
        self.destiny
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_absent(&self) -> bool {
        self.weight == f64::INFINITY
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.destiny
    }
}

impl Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destiny.hash(state);
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.destiny == other.destiny
    }
}

impl Eq for Edge {}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.destiny, self.weight)
    }
}

use std::{error::Error, fmt::Display};

use graph_rs::{GraphError, input::ParseError};

pub mod cast;
pub mod coloring;
pub mod input;

pub const DEFAULT_INPUT: &str = "grafos.txt";

#[derive(Debug, Clone, PartialEq)]
pub enum GrafosError {
    Parse(ParseError),
    Graph(GraphError),
    ActorNotFound(String),
}

impl Error for GrafosError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Graph(err) => Some(err),
            Self::ActorNotFound(_) => None,
        }
    }
}

impl Display for GrafosError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed input: {}", err),
            Self::Graph(err) => write!(f, "invalid graph: {}", err),
            Self::ActorNotFound(actor) => write!(f, "actor '{}' not found", actor),
        }
    }
}

impl From<ParseError> for GrafosError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<GraphError> for GrafosError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

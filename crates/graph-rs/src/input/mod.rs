use std::{error::Error, fmt::Display};

pub mod edgelist;

/// Malformed input, `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingToken { line: usize, expected: &'static str },
    InvalidToken { line: usize, token: String },
    TrailingToken { line: usize, token: String },
    UnexpectedEnd { line: usize, expected: usize, found: usize },
    FieldCount { line: usize, expected: usize, found: usize },
    ExtraGraph { line: usize },
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingToken { line, expected } => write!(f, "line {}: no {} found", line, expected),
            Self::InvalidToken { line, token } => {
                write!(f, "line {}: '{}' is not a vertex id", line, token)
            }
            Self::TrailingToken { line, token } => {
                write!(f, "line {}: unexpected trailing token '{}'", line, token)
            }
            Self::UnexpectedEnd {
                line,
                expected,
                found,
            } => write!(
                f,
                "graph declared on line {} expects {} edges but input ends after {}",
                line, expected, found
            ),
            Self::FieldCount {
                line,
                expected,
                found,
            } => write!(f, "line {}: expected {} fields, found {}", line, expected, found),
            Self::ExtraGraph { line } => write!(f, "line {}: input holds more than one graph", line),
        }
    }
}

/// Non-blank lines of `input` paired with their 1-based line number.
pub fn numbered_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

use std::{iter::Copied, slice::Iter, str::FromStr};

use log::debug;

use crate::{
    Graph, GraphError,
    graph::{Edge, adjacency::AdjacencyGraph},
};

use super::{ParseError, numbered_lines};

/// Vertex count and edge lines of one graph, as read from text.
///
/// The text format is a header line `<number_of_vertices> <number_of_edges>`
/// followed by that many `<source> <destiny>` lines. Several graphs may follow
/// each other in one input.
#[derive(Debug, PartialEq)]
pub struct EdgeList {
    number_of_vertices: usize,
    edges: Box<[(usize, usize)]>,
}

impl EdgeList {
    pub fn new(number_of_vertices: usize, edges: Vec<(usize, usize)>) -> Self {
        Self {
            number_of_vertices,
            edges: edges.into_boxed_slice(),
        }
    }

    pub fn number_of_vertices(&self) -> usize {
        self.number_of_vertices
    }

    pub fn edges(&self) -> Copied<Iter<'_, (usize, usize)>> {
        self.edges.iter().copied()
    }

    /// Reads every graph in `input` in order.
    pub fn parse_all(input: &str) -> Result<Vec<EdgeList>, ParseError> {
        let result = EdgeList::parse_iter(input).collect::<Result<Vec<_>, _>>()?;

        debug!("Parsed {} graphs", result.len());

        Ok(result)
    }

    /// Reads the graphs in `input` one at a time. A graph is only parsed once
    /// the previous one has been taken, and the iterator stops after the
    /// first error.
    pub fn parse_iter(input: &str) -> impl Iterator<Item = Result<EdgeList, ParseError>> + '_ {
        let mut lines = numbered_lines(input);
        let mut failed = false;

        std::iter::from_fn(move || {
            if failed {
                return None;
            }
            let (header_line, header) = lines.next()?;
            let result = parse_graph(header_line, header, &mut lines);
            failed = result.is_err();
            Some(result)
        })
    }
}

impl TryFrom<&str> for EdgeList {
    type Error = ParseError;

    /// Reads exactly one graph.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut lines = numbered_lines(value);
        let (header_line, header) = lines.next().ok_or(ParseError::MissingToken {
            line: 1,
            expected: "vertex count",
        })?;

        let edge_list = parse_graph(header_line, header, &mut lines)?;

        match lines.next() {
            Some((line, _)) => Err(ParseError::ExtraGraph { line }),
            None => Ok(edge_list),
        }
    }
}

impl TryFrom<EdgeList> for AdjacencyGraph {
    type Error = GraphError;

    fn try_from(edge_list: EdgeList) -> Result<Self, Self::Error> {
        AdjacencyGraph::from_edges(
            edge_list.number_of_vertices,
            false,
            edge_list.edges().map(|(s, t)| Edge::new(s, t)),
        )
    }
}

impl From<&AdjacencyGraph> for EdgeList {
    fn from(graph: &AdjacencyGraph) -> Self {
        EdgeList::new(
            graph.node_count(),
            graph.edges().map(|e| (e.source(), e.destiny())).collect(),
        )
    }
}

/// Reads the edge lines of the graph whose header is `header`.
fn parse_graph<'a>(
    header_line: usize,
    header: &str,
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Result<EdgeList, ParseError> {
    let (number_of_vertices, number_of_edges) =
        parse_pair(header_line, header, "vertex count", "edge count")?;

    let mut edges = Vec::new();
    for found in 0..number_of_edges {
        let (line, text) = lines.next().ok_or(ParseError::UnexpectedEnd {
            line: header_line,
            expected: number_of_edges,
            found,
        })?;
        edges.push(parse_pair(line, text, "source", "destiny")?);
    }

    Ok(EdgeList::new(number_of_vertices, edges))
}

fn parse_pair(
    line: usize,
    text: &str,
    first: &'static str,
    second: &'static str,
) -> Result<(usize, usize), ParseError> {
    let mut tokens = text.split_whitespace();

    let a = tokens.next().ok_or(ParseError::MissingToken {
        line,
        expected: first,
    })?;
    let b = tokens.next().ok_or(ParseError::MissingToken {
        line,
        expected: second,
    })?;

    if let Some(token) = tokens.next() {
        return Err(ParseError::TrailingToken {
            line,
            token: token.to_string(),
        });
    }

    Ok((parse_token(line, a)?, parse_token(line, b)?))
}

fn parse_token(line: usize, token: &str) -> Result<usize, ParseError> {
    usize::from_str(token).map_err(|_| ParseError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::{Graph, GraphError, graph::adjacency::AdjacencyGraph, input::ParseError};

    use super::EdgeList;

    #[test]
    fn edgelist_from_string() {
        let string = "5 4\n\
            1 2\n\
            1 4\n\
            2 3\n\
            4 0";

        let edge_list = EdgeList::try_from(string).unwrap();

        assert_eq!(edge_list.number_of_vertices(), 5);
        assert_eq!(
            edge_list.edges().collect::<Vec<(usize, usize)>>(),
            vec![(1, 2), (1, 4), (2, 3), (4, 0)]
        );
    }

    #[test]
    fn several_graphs() {
        let string = "3 3\n0 1\n1 2\n2 0\n\n4 2\n0 1\n  2 3  \n2 0\n";

        let graphs = EdgeList::parse_all(string).unwrap();

        assert_eq!(
            graphs,
            vec![
                EdgeList::new(3, vec![(0, 1), (1, 2), (2, 0)]),
                EdgeList::new(4, vec![(0, 1), (2, 3)]),
                EdgeList::new(2, vec![]),
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(EdgeList::parse_all(" \n\n"), Ok(vec![]));
        assert!(EdgeList::try_from("").is_err());
    }

    #[test]
    fn single_graph_rejects_more() {
        let err = EdgeList::try_from("2 1\n0 1\n1 0").unwrap_err();

        assert_eq!(err, ParseError::ExtraGraph { line: 3 });
        assert_eq!(err.to_string(), "line 3: input holds more than one graph");

        let err = EdgeList::try_from("2 0\n\n 5 1 \n0 4\n").unwrap_err();

        assert_eq!(err, ParseError::ExtraGraph { line: 3 });
    }

    #[test]
    fn parse_one_at_a_time() {
        let mut graphs = EdgeList::parse_iter("2 1\n0 1\n3 x\n2 0\n");

        assert_eq!(graphs.next(), Some(Ok(EdgeList::new(2, vec![(0, 1)]))));
        assert_eq!(
            graphs.next(),
            Some(Err(ParseError::InvalidToken {
                line: 3,
                token: "x".to_string()
            }))
        );
        assert_eq!(graphs.next(), None);
    }

    #[test]
    fn truncated_graph() {
        assert_eq!(
            EdgeList::parse_all("3 3\n0 1\n1 2"),
            Err(ParseError::UnexpectedEnd {
                line: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn malformed_lines() {
        assert_eq!(
            EdgeList::parse_all("3 1\n0"),
            Err(ParseError::MissingToken {
                line: 2,
                expected: "destiny"
            })
        );
        assert_eq!(
            EdgeList::parse_all("3 1\n0 -1"),
            Err(ParseError::InvalidToken {
                line: 2,
                token: "-1".to_string()
            })
        );
        assert_eq!(
            EdgeList::parse_all("3 1 7\n0 1"),
            Err(ParseError::TrailingToken {
                line: 1,
                token: "7".to_string()
            })
        );
    }

    #[test]
    #[should_panic(expected = "MissingToken")]
    fn edge_list_from_string_panic() {
        let string = "5 3\n\
            1\n\
            1 4\n\
            2 3";

        EdgeList::try_from(string).unwrap();
    }

    #[test]
    fn into_graph() {
        let edge_list = EdgeList::new(4, vec![(0, 1), (0, 1), (3, 2)]);

        let graph = AdjacencyGraph::try_from(edge_list).unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_directed());
        assert_eq!(EdgeList::from(&graph), EdgeList::new(4, vec![(0, 1), (3, 2)]));
    }

    #[test]
    fn into_graph_out_of_range() {
        let edge_list = EdgeList::new(2, vec![(0, 1), (1, 2)]);

        assert_eq!(
            AdjacencyGraph::try_from(edge_list),
            Err(GraphError::InvalidEdge {
                source: 1,
                destiny: 2
            })
        );
    }
}

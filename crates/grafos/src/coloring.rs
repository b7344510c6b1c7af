use graph_rs::{
    Graph,
    algorithms::two_coloring::TwoColoring,
    graph::adjacency::AdjacencyGraph,
    input::edgelist::EdgeList,
};
use log::{debug, info};

use crate::GrafosError;

pub const YES: &str = "SIM";
pub const NO: &str = "NAO";

pub fn verdict(colorable: bool) -> &'static str {
    if colorable { YES } else { NO }
}

/// Graphs of `text` in input order, each parsed and built only when asked for.
pub fn graphs(text: &str) -> impl Iterator<Item = Result<AdjacencyGraph, GrafosError>> + '_ {
    EdgeList::parse_iter(text)
        .map(|edge_list| -> Result<AdjacencyGraph, GrafosError> { Ok(AdjacencyGraph::try_from(edge_list?)?) })
}

/// Builds every graph in `text`, in input order.
pub fn load(text: &str) -> Result<Vec<AdjacencyGraph>, GrafosError> {
    let graphs = graphs(text).collect::<Result<Vec<_>, _>>()?;

    info!("Loaded {} graphs", graphs.len());

    Ok(graphs)
}

/// Whether each graph in `text` is bipartite, in input order.
///
/// A graph is colored before the next one is read, so every verdict ahead of
/// a malformed graph is yielded before its error.
pub fn bipartite(text: &str) -> impl Iterator<Item = Result<bool, GrafosError>> + '_ {
    graphs(text).enumerate().map(|(i, graph)| -> Result<bool, GrafosError> {
        let graph = graph?;
        let colorable = match graph.two_coloring() {
            Ok(_) => true,
            Err(odd_cycle) => {
                debug!("graph {}: {}", i, odd_cycle);
                false
            }
        };
        debug!(
            "graph {}: {} nodes, {} edges, colorable: {}",
            i,
            graph.node_count(),
            graph.edge_count(),
            colorable
        );
        Ok(colorable)
    })
}

use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use grafos::{
    DEFAULT_INPUT,
    cast::{CastGraph, DEFAULT_REFERENCE, Metric},
    coloring,
    input::InputFile,
};
use graph_rs::Graph;
use log::info;

#[derive(Parser)]
#[command(version, about = "Breadth-first graph exercises")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Print SIM or NAO for every graph in <IN_FILE>, depending on whether it
    /// is bipartite.
    Bipartite {
        #[arg(default_value = DEFAULT_INPUT)]
        in_file: PathBuf,
    },

    /// Print the Bacon number of every actor in <IN_FILE>, one
    /// 'actor;movie;actor' line per credit.
    Bacon {
        #[arg(default_value = DEFAULT_INPUT)]
        in_file: PathBuf,

        /// Actor printed without a movie and used as target by --distance.
        #[arg(short, long, default_value = DEFAULT_REFERENCE)]
        reference: String,

        /// Print the number of hops to the reference actor instead of the
        /// number of reachable actors.
        #[arg(short, long)]
        distance: bool,
    },

    /// Only build the graphs in <IN_FILE>.
    Load {
        #[arg(default_value = DEFAULT_INPUT)]
        in_file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let working_dir = std::env::current_dir()?;
    info!("Current working dir '{}'", working_dir.display());

    match cli.command {
        Commands::Bipartite { in_file } => {
            info!("Checking bipartiteness of graphs in {:?}", in_file);
            let input = InputFile::open(&in_file)?;

            for colorable in coloring::bipartite(input.text()?) {
                println!("{}", coloring::verdict(colorable?));
            }
        }
        Commands::Bacon {
            in_file,
            reference,
            distance,
        } => {
            info!("Computing Bacon numbers for {:?}", in_file);
            let input = InputFile::open(&in_file)?;
            let cast = CastGraph::parse(input.text()?)?;

            let metric = if distance {
                Metric::Distance
            } else {
                Metric::Reachable
            };

            for entry in cast.report(&reference, metric)? {
                println!("{}", entry);
            }
        }
        Commands::Load { in_file } => {
            let input = InputFile::open(&in_file)?;

            for (i, graph) in coloring::load(input.text()?)?.iter().enumerate() {
                info!(
                    "Graph {}: {} nodes, {} edges",
                    i,
                    graph.node_count(),
                    graph.edge_count()
                );
            }
        }
    }

    Ok(())
}

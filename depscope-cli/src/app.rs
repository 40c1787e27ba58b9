use std::path::PathBuf;

use clap::{Parser, Subcommand};
use depscope::graph::algorithms::DEFAULT_TOP_K;

/// Student count of the bundled enrollment dataset.
pub const DEFAULT_TOTAL_NODES: u32 = 29;

/// depscope - reachability, transitive closure and shortest paths over dependency graphs
#[derive(Debug, Parser)]
#[command(name = "depscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reject irregular lines in the edge list instead of skipping them.
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank nodes by how many other nodes reach them.
    Rank {
        /// Path to the edge list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Rank the dense range 1..=N instead of the nodes named in the file.
        #[arg(short, long, value_name = "N")]
        nodes: Option<u32>,

        /// Number of entries to show.
        #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
        top: usize,

        /// Run the per-node searches on all cores.
        #[arg(long)]
        parallel: bool,
    },

    /// Count the ancestors and descendants of a single node.
    Reach {
        /// Path to the edge list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// The node to inspect.
        #[arg(value_name = "NODE")]
        node: u32,
    },

    /// Compute the transitive closure with Warshall's algorithm.
    Closure {
        /// Path to the edge list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Size of the node range 1..=N (defaults to the largest node in the file).
        #[arg(short, long, value_name = "N")]
        nodes: Option<usize>,

        /// Matrix row to print, as a 1-based node identifier.
        #[arg(short, long, default_value_t = 1, conflicts_with = "all")]
        row: u32,

        /// Print every row of the matrix.
        #[arg(long)]
        all: bool,
    },

    /// Compute shortest distances from a source node (weighted edge list).
    Paths {
        /// Path to the weighted edge list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Source node.
        #[arg(short, long, default_value_t = 1)]
        source: u32,
    },

    /// Run the complete analysis: ranking, reach count, closure row and distances.
    Report {
        /// Path to the weighted edge list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Size of the node range 1..=N.
        #[arg(short, long, value_name = "N", default_value_t = DEFAULT_TOTAL_NODES)]
        nodes: u32,

        /// Source node for the shortest-path section.
        #[arg(short, long, default_value_t = 1)]
        source: u32,

        /// Node for the reach section (defaults to the top-ranked node).
        #[arg(long, value_name = "NODE")]
        node: Option<u32>,
    },
}

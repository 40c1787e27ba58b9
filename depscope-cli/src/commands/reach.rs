use std::path::Path;

use depscope::graph::{
    algorithms::count_reachable, build_forward_adjacency, build_reverse_adjacency, Edge,
};
use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_edges, output::print_output};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ReachOutput {
    pub node: u32,
    /// Nodes with a path to `node`
    pub reached_by: usize,
    /// Nodes `node` has a path to
    pub reaches: usize,
}

pub fn reach(edges: &[Edge], node: u32) -> ReachOutput {
    ReachOutput {
        node,
        reached_by: count_reachable(&build_reverse_adjacency(edges), node),
        reaches: count_reachable(&build_forward_adjacency(edges), node),
    }
}

pub fn print_reach(output: &ReachOutput) {
    println!("Nodes reaching {}: {}", output.node, output.reached_by);
    println!("Nodes reached from {}: {}", output.node, output.reaches);
}

pub fn run(path: &Path, node: u32, opts: &GlobalOptions) -> anyhow::Result<()> {
    let edges = load_edges(path, opts)?;
    let output = reach(&edges, node);
    print_output(&output, opts, print_reach)
}

use std::path::Path;

use depscope::graph::{algorithms::DEFAULT_TOP_K, Edge, WeightedEdge};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::{
        closure::{closure, print_row, ClosureRow},
        common::{load_edges, load_weighted_edges},
        paths::{paths, print_paths, PathsOutput},
        rank::{print_ranking, rank, RankEntry},
        reach::{print_reach, reach, ReachOutput},
    },
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub nodes: u32,
    pub ranking: Vec<RankEntry>,
    pub reach: ReachOutput,
    pub closure_row: ClosureRow,
    pub paths: PathsOutput,
}

/// The four classic questions over one dataset: the best-reached nodes, the reach of a single
/// node, the first closure row and the distances from `source`.
pub fn report(
    edges: &[Edge],
    weighted: &[WeightedEdge],
    nodes: u32,
    source: u32,
    node: Option<u32>,
) -> anyhow::Result<ReportOutput> {
    let ranking = rank(edges, Some(nodes), DEFAULT_TOP_K, false).ranking;
    let node = node
        .or_else(|| ranking.first().map(|entry| entry.node))
        .unwrap_or(1);

    let mut first_row = closure(edges, Some(nodes as usize), Some(1))?;
    let closure_row = first_row.rows.remove(0);

    Ok(ReportOutput {
        nodes,
        ranking,
        reach: reach(edges, node),
        closure_row,
        paths: paths(weighted, source),
    })
}

pub fn run(
    path: &Path,
    nodes: u32,
    source: u32,
    node: Option<u32>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let edges = load_edges(path, opts)?;
    let weighted = load_weighted_edges(path, opts)?;
    let output = report(&edges, &weighted, nodes, source, node)?;

    print_output(&output, opts, |output| {
        println!("=== Most reached nodes ===");
        print_ranking(&output.ranking, "  ");

        println!("\n=== Reachability ===");
        print_reach(&output.reach);

        println!("\n=== Transitive closure (Warshall) ===");
        print_row(&output.closure_row);

        println!("\n=== Shortest distances (Dijkstra) ===");
        println!("From {}:", output.paths.source);
        print_paths(&output.paths, "  ");
    })
}

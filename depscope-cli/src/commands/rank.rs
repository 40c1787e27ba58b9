use std::path::Path;

use depscope::graph::{
    algorithms::{par_rank_by_reachability, rank_by_reachability_in, Reachability},
    build_reverse_adjacency, Edge, NodeUniverse,
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_edges,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct RankOutput {
    pub universe_size: usize,
    pub ranking: Vec<RankEntry>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub node: u32,
    pub reached_by: usize,
}

impl From<Reachability<u32>> for RankEntry {
    fn from(entry: Reachability<u32>) -> Self {
        RankEntry {
            node: entry.node,
            reached_by: entry.count,
        }
    }
}

/// Rank by ancestor count over `1..=nodes`, or over the nodes named in `edges`.
pub fn rank(edges: &[Edge], nodes: Option<u32>, top: usize, parallel: bool) -> RankOutput {
    let reverse = build_reverse_adjacency(edges);
    let universe = match nodes {
        Some(total) => NodeUniverse::dense(total),
        None => NodeUniverse::from_edges(edges),
    };

    let ranking = if parallel {
        par_rank_by_reachability(&reverse, &universe, top)
    } else {
        rank_by_reachability_in(&reverse, &universe, top)
    };

    RankOutput {
        universe_size: universe.len(),
        ranking: ranking.into_iter().map(RankEntry::from).collect(),
    }
}

pub fn print_ranking(ranking: &[RankEntry], indent: &str) {
    let mut tw = TabWriter::new(&[
        ("#", Align::Right),
        ("Node", Align::Right),
        ("Reached by", Align::Right),
    ])
    .indent(indent);
    for (position, entry) in ranking.iter().enumerate() {
        tw.row(vec![
            (position + 1).to_string(),
            entry.node.to_string(),
            entry.reached_by.to_string(),
        ]);
    }
    tw.print();
}

pub fn run(
    path: &Path,
    nodes: Option<u32>,
    top: usize,
    parallel: bool,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let edges = load_edges(path, opts)?;
    let output = rank(&edges, nodes, top, parallel);

    print_output(&output, opts, |output| {
        println!(
            "Top {} of {} nodes by number of nodes reaching them:",
            output.ranking.len(),
            output.universe_size
        );
        print_ranking(&output.ranking, "  ");
    })
}

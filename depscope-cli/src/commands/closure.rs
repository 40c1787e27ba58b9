use std::path::Path;

use anyhow::{bail, Context};
use depscope::graph::{
    algorithms::{compute_closure, ClosureMatrix},
    Edge,
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_edges, max_node},
    output::{format_bits, print_output},
};

#[derive(Debug, Serialize)]
pub struct ClosureOutput {
    pub nodes: usize,
    pub rows: Vec<ClosureRow>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ClosureRow {
    pub node: u32,
    pub bits: Vec<u8>,
    pub reaches: Vec<u32>,
}

impl ClosureRow {
    /// Row of the matrix belonging to 1-based `node`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_matrix(matrix: &ClosureMatrix, node: u32) -> Self {
        let row = matrix.row(node as usize - 1);
        ClosureRow {
            node,
            bits: row.iter().map(|&set| u8::from(set)).collect(),
            reaches: row
                .iter()
                .enumerate()
                .filter(|(_, set)| **set)
                .map(|(j, _)| j as u32 + 1)
                .collect(),
        }
    }
}

/// Compute the closure over `1..=nodes` and select `row` (or every row).
pub fn closure(edges: &[Edge], nodes: Option<usize>, row: Option<u32>) -> anyhow::Result<ClosureOutput> {
    let nodes = nodes.unwrap_or(max_node(edges) as usize);
    if let Some(row) = row {
        if row == 0 || row as usize > nodes {
            bail!("row {row} is outside the node range 1..={nodes}");
        }
    }

    let matrix = compute_closure(nodes, edges)
        .with_context(|| format!("failed to compute closure over {nodes} nodes"))?;

    let rows = match row {
        Some(row) => vec![ClosureRow::from_matrix(&matrix, row)],
        None => (1..=nodes as u32)
            .map(|node| ClosureRow::from_matrix(&matrix, node))
            .collect(),
    };

    Ok(ClosureOutput { nodes, rows })
}

pub fn print_row(row: &ClosureRow) {
    println!("Row {}: {}", row.node, format_bits(&row.bits));
}

pub fn run(
    path: &Path,
    nodes: Option<usize>,
    row: Option<u32>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let edges = load_edges(path, opts)?;
    let output = closure(&edges, nodes, row)?;

    print_output(&output, opts, |output| {
        println!("Transitive closure over {} nodes:", output.nodes);
        for row in &output.rows {
            print_row(row);
        }
    })
}

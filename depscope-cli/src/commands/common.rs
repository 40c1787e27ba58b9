use std::path::Path;

use anyhow::Context;
use depscope::{
    graph::{Edge, WeightedEdge},
    EdgeFile, LoaderConfig,
};

use crate::app::GlobalOptions;

/// Loader configuration selected by the global `--strict` flag.
pub fn loader_config(opts: &GlobalOptions) -> LoaderConfig {
    if opts.strict {
        LoaderConfig::strict()
    } else {
        LoaderConfig::lenient()
    }
}

fn open(path: &Path) -> anyhow::Result<EdgeFile> {
    EdgeFile::from_path(path)
        .with_context(|| format!("failed to open edge list: {}", path.display()))
}

/// Load an unweighted edge list (`origin destination` per line).
pub fn load_edges(path: &Path, opts: &GlobalOptions) -> anyhow::Result<Vec<Edge>> {
    let edges = open(path)?
        .edges(&loader_config(opts))
        .with_context(|| format!("failed to parse edge list: {}", path.display()))?;
    log::info!("loaded {} edges from {}", edges.len(), file_display_name(path));
    Ok(edges)
}

/// Load a weighted edge list (`origin destination weight` per line).
pub fn load_weighted_edges(path: &Path, opts: &GlobalOptions) -> anyhow::Result<Vec<WeightedEdge>> {
    let edges = open(path)?
        .weighted_edges(&loader_config(opts))
        .with_context(|| format!("failed to parse weighted edge list: {}", path.display()))?;
    log::info!(
        "loaded {} weighted edges from {}",
        edges.len(),
        file_display_name(path)
    );
    Ok(edges)
}

/// Largest node identifier mentioned by `edges`, or 0 for an empty list.
pub fn max_node(edges: &[Edge]) -> u32 {
    edges
        .iter()
        .map(|edge| edge.origin.max(edge.destination))
        .max()
        .unwrap_or(0)
}

/// Extract a display-friendly filename from a path.
pub fn file_display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}

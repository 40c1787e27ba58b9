use std::path::Path;

use depscope::graph::{algorithms::dijkstra, build_weighted_adjacency, WeightedEdge};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_weighted_edges,
    output::{format_distance, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct PathsOutput {
    pub source: u32,
    pub distances: Vec<DistanceEntry>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DistanceEntry {
    pub node: u32,
    /// `None` when the node cannot be reached
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<u32>>,
}

pub fn paths(edges: &[WeightedEdge], source: u32) -> PathsOutput {
    let result = dijkstra(&build_weighted_adjacency(edges), source);
    let distances = result
        .iter()
        .map(|(node, distance)| DistanceEntry {
            node,
            distance: distance.value(),
            path: result.path_to(node),
        })
        .collect();

    PathsOutput { source, distances }
}

pub fn print_paths(output: &PathsOutput, indent: &str) {
    let mut tw = TabWriter::new(&[
        ("Node", Align::Right),
        ("Distance", Align::Right),
        ("Path", Align::Left),
    ])
    .indent(indent);
    for entry in &output.distances {
        let path = entry.path.as_ref().map_or_else(String::new, |path| {
            path.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" -> ")
        });
        tw.row(vec![
            entry.node.to_string(),
            format_distance(entry.distance),
            path,
        ]);
    }
    tw.print();
}

pub fn run(path: &Path, source: u32, opts: &GlobalOptions) -> anyhow::Result<()> {
    let edges = load_weighted_edges(path, opts)?;
    let output = paths(&edges, source);

    print_output(&output, opts, |output| {
        println!("Shortest distances from {}:", output.source);
        print_paths(output, "  ");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_triangle() {
        let edges = vec![
            WeightedEdge::new(1, 2, 5.0),
            WeightedEdge::new(2, 3, 2.0),
            WeightedEdge::new(1, 3, 10.0),
        ];
        let output = paths(&edges, 1);

        assert_eq!(output.distances.len(), 3);
        assert_eq!(
            output.distances[2],
            DistanceEntry {
                node: 3,
                distance: Some(7.0),
                path: Some(vec![1, 2, 3]),
            }
        );
    }

    #[test]
    fn test_paths_unreachable_serializes_null() {
        let edges = vec![WeightedEdge::new(1, 2, 1.0), WeightedEdge::new(3, 1, 1.0)];
        let output = paths(&edges, 1);
        let json = serde_json::to_value(&output).unwrap();

        let unreachable = &json["distances"][2];
        assert_eq!(unreachable["node"], 3);
        assert!(unreachable["distance"].is_null());
        assert!(unreachable.get("path").is_none());
    }
}

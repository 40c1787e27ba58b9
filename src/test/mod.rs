use crate::graph::{Edge, WeightedEdge};

// 1 -> 2 -> 3 with the shortcut 1 -> 3
pub fn triangle_edges() -> Vec<Edge> {
    vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)]
}

// The weighted triangle; the cheapest route 1 -> 3 goes through 2
pub fn triangle_weighted_edges() -> Vec<WeightedEdge> {
    vec![
        WeightedEdge::new(1, 2, 5.0),
        WeightedEdge::new(2, 3, 2.0),
        WeightedEdge::new(1, 3, 10.0),
    ]
}

// 1 -> {2, 3} -> 4
pub fn diamond_edges() -> Vec<Edge> {
    vec![
        Edge::new(1, 2),
        Edge::new(1, 3),
        Edge::new(2, 4),
        Edge::new(3, 4),
    ]
}

// 1 -> 2 -> 3 -> 1
pub fn cycle_edges() -> Vec<Edge> {
    vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)]
}

// 1 -> 2 -> ... -> n
pub fn chain_edges(n: u32) -> Vec<Edge> {
    (1..n).map(|i| Edge::new(i, i + 1)).collect()
}

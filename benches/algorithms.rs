extern crate depscope;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use depscope::{
    graph::{
        algorithms::{
            compute_closure, count_reachable, dijkstra, par_rank_by_reachability,
            rank_by_reachability,
        },
        build_reverse_adjacency, build_weighted_adjacency, Edge, NodeUniverse, WeightedEdge,
    },
    EdgeFile, LoaderConfig,
};
use std::{hint::black_box, path::PathBuf};

/// Layered synthetic graph: every node depends on up to three earlier nodes.
fn layered_edges(n: u32) -> Vec<WeightedEdge> {
    let mut edges = Vec::new();
    for v in 2..=n {
        for step in [1, 7, 31] {
            if v > step {
                let weight = f64::from((v * step) % 10) + 0.5;
                edges.push(WeightedEdge::new(v - step, v, weight));
            }
        }
    }
    edges
}

fn unweighted(edges: &[WeightedEdge]) -> Vec<Edge> {
    edges.iter().map(WeightedEdge::edge).collect()
}

/// Benchmark the full report over the bundled 29-student dataset
fn bench_sample_report(c: &mut Criterion) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/enrollment.txt");
    let file = EdgeFile::from_path(&path).expect("Failed to open sample dataset");
    let config = LoaderConfig::default();

    c.bench_function("sample_report", |b| {
        b.iter(|| {
            let edges = file.edges(&config).unwrap();
            let weighted = file.weighted_edges(&config).unwrap();
            let reverse = build_reverse_adjacency(&edges);
            let ranking = rank_by_reachability(&reverse, 29, 2);
            let closure = compute_closure(29, &edges).unwrap();
            let paths = dijkstra(&build_weighted_adjacency(&weighted), 1);
            black_box((ranking, closure.row(0), paths.len()))
        });
    });
}

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");
    for n in [100u32, 1_000, 10_000] {
        let edges = unweighted(&layered_edges(n));
        let reverse = build_reverse_adjacency(&edges);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::new("count_reachable", n), &n, |b, &n| {
            b.iter(|| count_reachable(black_box(&reverse), n));
        });
    }
    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    for n in [100u32, 500, 1_000] {
        let edges = unweighted(&layered_edges(n));
        let reverse = build_reverse_adjacency(&edges);
        let universe = NodeUniverse::dense(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| rank_by_reachability(black_box(&reverse), n, 2));
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| par_rank_by_reachability(black_box(&reverse), &universe, 2));
        });
    }
    group.finish();
}

fn bench_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure");
    for n in [64u32, 256, 512] {
        let edges = unweighted(&layered_edges(n));
        group.bench_with_input(BenchmarkId::new("warshall", n), &n, |b, &n| {
            b.iter(|| compute_closure(n as usize, black_box(&edges)).unwrap());
        });
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for n in [1_000u32, 10_000, 100_000] {
        let graph = build_weighted_adjacency(&layered_edges(n));
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        group.bench_with_input(BenchmarkId::new("from_root", n), &n, |b, _| {
            b.iter(|| dijkstra(black_box(&graph), 1));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sample_report,
    bench_reachability,
    bench_ranking,
    bench_closure,
    bench_dijkstra
);
criterion_main!(benches);

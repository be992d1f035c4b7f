//! Benchmarks for the analysis operations.
//!
//! Measures each algorithm on generated graphs of fixed shape:
//! - Traversals on a grid (high branching, snapshot cost dominates)
//! - Connectivity analyses on a chained-cycles graph (many cut vertices)
//! - SCC on a layered directed graph
//! - Max flow on a multi-path capacitated network

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use vistra::prelude::*;

const GRID_SIDE: u64 = 40;
const CYCLE_COUNT: u64 = 500;

/// Undirected grid of `side * side` nodes.
fn create_grid_graph(side: u64) -> Graph {
    let mut graph = Graph::undirected();
    for row in 0..side {
        for col in 0..side {
            let node = NodeId::new(row * side + col);
            if col + 1 < side {
                graph.add_edge(node, NodeId::new(row * side + col + 1));
            }
            if row + 1 < side {
                graph.add_edge(node, NodeId::new((row + 1) * side + col));
            }
        }
    }
    graph
}

/// Triangles chained through shared cut vertices: every junction node is an
/// articulation point.
fn create_chained_cycles_graph(cycles: u64) -> Graph {
    let mut graph = Graph::undirected();
    for i in 0..cycles {
        let base = i * 2;
        graph.add_edge(NodeId::new(base), NodeId::new(base + 1));
        graph.add_edge(NodeId::new(base + 1), NodeId::new(base + 2));
        graph.add_edge(NodeId::new(base + 2), NodeId::new(base));
    }
    graph
}

/// Directed graph of `layers` 3-cycles, each feeding the next.
fn create_layered_cycles_graph(layers: u64) -> Graph {
    let mut graph = Graph::directed();
    for i in 0..layers {
        let base = i * 3;
        graph.add_edge(NodeId::new(base), NodeId::new(base + 1));
        graph.add_edge(NodeId::new(base + 1), NodeId::new(base + 2));
        graph.add_edge(NodeId::new(base + 2), NodeId::new(base));
        if i + 1 < layers {
            graph.add_edge(NodeId::new(base), NodeId::new(base + 3));
        }
    }
    graph
}

/// Capacitated diamond lattice from one source to one sink.
fn create_flow_network(width: u64) -> Graph {
    let mut graph = Graph::directed();
    let source = NodeId::new(0);
    let sink = NodeId::new(width + 1);
    for i in 1..=width {
        graph.add_edge_with_capacity(source, NodeId::new(i), i);
        graph.add_edge_with_capacity(NodeId::new(i), sink, width - i + 1);
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let graph = create_grid_graph(GRID_SIDE);
    let start = NodeId::new(0);

    let mut group = c.benchmark_group("traversal");
    group.throughput(Throughput::Elements(graph.node_count() as u64));
    group.bench_function("breadth_first", |b| {
        b.iter(|| breadth_first(black_box(&graph), start).unwrap());
    });
    group.bench_function("depth_first", |b| {
        b.iter(|| depth_first(black_box(&graph), start).unwrap());
    });
    group.finish();
}

fn bench_connectivity(c: &mut Criterion) {
    let graph = create_chained_cycles_graph(CYCLE_COUNT);

    let mut group = c.benchmark_group("connectivity");
    group.throughput(Throughput::Elements(graph.node_count() as u64));
    group.bench_function("connected_components", |b| {
        b.iter(|| connected_components(black_box(&graph)));
    });
    group.bench_function("articulation_points", |b| {
        b.iter(|| articulation_points(black_box(&graph)));
    });
    group.bench_function("biconnected_components", |b| {
        b.iter(|| biconnected_components(black_box(&graph)));
    });
    group.finish();
}

fn bench_scc(c: &mut Criterion) {
    let graph = create_layered_cycles_graph(CYCLE_COUNT);

    let mut group = c.benchmark_group("scc");
    group.throughput(Throughput::Elements(graph.node_count() as u64));
    group.bench_function("strongly_connected_components", |b| {
        b.iter(|| strongly_connected_components(black_box(&graph)).unwrap());
    });
    group.finish();
}

fn bench_max_flow(c: &mut Criterion) {
    let graph = create_flow_network(64);
    let source = NodeId::new(0);
    let sink = NodeId::new(65);

    let mut group = c.benchmark_group("max_flow");
    group.bench_function("diamond_lattice_64", |b| {
        b.iter(|| max_flow(black_box(&graph), source, sink).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_traversal,
    bench_connectivity,
    bench_scc,
    bench_max_flow
);
criterion_main!(benches);

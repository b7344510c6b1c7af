use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graph_rs::{
    algorithms::{bfs::Bfs, two_coloring::TwoColoring},
    graph::{Edge, adjacency::AdjacencyGraph},
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

fn random_graph(rng: &mut SmallRng, node_count: usize, edge_count: usize) -> AdjacencyGraph {
    let edges = std::iter::repeat_with(|| {
        Edge::new(rng.random_range(0..node_count), rng.random_range(0..node_count))
    })
    .take(edge_count)
    .collect::<Vec<_>>();

    AdjacencyGraph::from_edges(node_count, false, edges).unwrap()
}

// Even cycle, the coloring has to visit every edge.
fn cycle(node_count: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(node_count, false);
    for v in 0..node_count {
        graph
            .insert_undirected(v, (v + 1) % node_count, 1.0)
            .unwrap();
    }
    graph
}

pub fn two_coloring_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_coloring");
    let mut rng = SmallRng::seed_from_u64(42);

    for node_count in [1_000, 10_000, 100_000] {
        let graph = cycle(node_count);
        group.bench_with_input(BenchmarkId::new("cycle", node_count), &graph, |b, g| {
            b.iter(|| g.is_two_colorable())
        });

        let graph = random_graph(&mut rng, node_count, node_count * 2);
        group.bench_with_input(BenchmarkId::new("random", node_count), &graph, |b, g| {
            b.iter(|| g.is_two_colorable())
        });
    }

    group.finish();
}

pub fn reachable_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");

    for node_count in [1_000, 10_000, 100_000] {
        let graph = cycle(node_count);
        group.bench_with_input(BenchmarkId::new("reachable_count", node_count), &graph, |b, g| {
            b.iter(|| g.reachable_count(0))
        });
    }

    group.finish();
}

criterion_group!(two_coloring, two_coloring_bench, reachable_bench);
criterion_main!(two_coloring);

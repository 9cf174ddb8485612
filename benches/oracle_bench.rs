use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gomory_hu::oracle::{CutOracle, EdmondsKarpOracle, ExhaustiveOracle};
use gomory_hu::presets::{DEMONSTRATION, VARIANT_24};
use gomory_hu::tree::TreeBuilder;
use gomory_hu::graph::WeightGraph;

// Erdos-Renyi graph with weights in 1..=20
fn random_graph(n: usize, p: f64, seed: u64) -> WeightGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.r#gen::<f64>() < p {
                edges.push((u, v, rng.gen_range(1..=20u64)));
            }
        }
    }
    WeightGraph::from_edges(n, &edges).expect("valid random graph")
}

fn bench_single_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_cut");
    for &n in &[8usize, 12, 16] {
        let graph = random_graph(n, 0.4, 42);
        group.bench_with_input(BenchmarkId::new("exhaustive", n), &graph, |b, g| {
            let oracle = ExhaustiveOracle::new();
            b.iter(|| oracle.min_cut(black_box(g), 0, n - 1).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("edmonds-karp", n), &graph, |b, g| {
            let oracle = EdmondsKarpOracle::new();
            b.iter(|| oracle.min_cut(black_box(g), 0, n - 1).unwrap());
        });
    }
    group.finish();
}

fn bench_full_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_tree");
    let presets = [
        ("demonstration", WeightGraph::from_rows(&DEMONSTRATION).expect("preset")),
        ("variant_24", WeightGraph::from_rows(&VARIANT_24).expect("preset")),
        ("random_12", random_graph(12, 0.3, 7)),
    ];
    for (name, graph) in &presets {
        group.bench_with_input(BenchmarkId::new("exhaustive", name), graph, |b, g| {
            b.iter(|| TreeBuilder::new(g).run().unwrap());
        });
        group.bench_with_input(BenchmarkId::new("edmonds-karp", name), graph, |b, g| {
            b.iter(|| {
                TreeBuilder::with_oracle(g, EdmondsKarpOracle::new())
                    .run()
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_cut, bench_full_tree);
criterion_main!(benches);

use std::hint::black_box;

use bench::apply_runtime_for_edges;
use bench::apply_small_runtime_config;
use bench::case_seed;
use bench::dense_matrix_fits;
use bench::default_rng;
use bench::random_pairs;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use mst::ALL_STRATEGIES;
use mst::AdjacencyList;
use mst::AdjacencyMatrix;
use mst::Algorithm;
use mst::DisjointSets;
use mst::EdgeHeap;
use mst::EdgeList;
use mst::ExplicitSets;
use mst::FixedPoint;
use mst::ImplicitSets;
use mst::MatrixStorage;
use mst::generator::GraphCase;
use mst::generator::generate_case;
use mst::graph::RepresentationKind;
use mst::graph::Triangular;
use mst::parse_graph;
use mst::solve_bytes;

type Weights = FixedPoint<2>;

const CASES: [GraphCase; 5] = [
    GraphCase::Tree,
    GraphCase::Sparse,
    GraphCase::HalfDense,
    GraphCase::Dense,
    GraphCase::Euclidean,
];

const SIZES: [usize; 3] = [4_096, 65_536, 262_144];

fn bench_strategies(c: &mut Criterion) {
    for (i, case) in CASES.into_iter().enumerate() {
        let mut group = c.benchmark_group(format!("mst/{}", case.label()));

        for &size in &SIZES {
            let graph = generate_case(case, size, case_seed(i, size));
            let input = graph.render();
            apply_runtime_for_edges(&mut group, graph.edge_count());

            for strategy in ALL_STRATEGIES {
                if strategy.representation() == RepresentationKind::AdjacencyMatrix
                    && !dense_matrix_fits(graph.vertex_count)
                {
                    continue;
                }
                group.bench_function(BenchmarkId::new(strategy.label(), size), |bencher| {
                    bencher.iter(|| {
                        let solution = solve_bytes::<Weights>(
                            &input,
                            Algorithm::Fixed(strategy),
                            MatrixStorage::Full,
                        );
                        black_box(solution.map(|s| s.tree.total).ok());
                    });
                });
            }
            group.bench_function(BenchmarkId::new("best", size), |bencher| {
                bencher.iter(|| {
                    let solution =
                        solve_bytes::<Weights>(&input, Algorithm::Best, MatrixStorage::Full);
                    black_box(solution.map(|s| s.tree.total).ok());
                });
            });
        }

        group.finish();
    }
}

fn bench_load(c: &mut Criterion) {
    let size = 65_536;
    let input = generate_case(GraphCase::Dense, size, case_seed(0x10AD, size)).render();
    let mut group = c.benchmark_group("load/dense");
    apply_small_runtime_config(&mut group);

    group.bench_function("edge_list", |bencher| {
        bencher.iter(|| black_box(parse_graph::<EdgeList<u64>, Weights>(&input).ok()));
    });
    group.bench_function("edge_heap", |bencher| {
        bencher.iter(|| black_box(parse_graph::<EdgeHeap<u64>, Weights>(&input).ok()));
    });
    group.bench_function("adjacency_list", |bencher| {
        bencher.iter(|| black_box(parse_graph::<AdjacencyList<u64>, Weights>(&input).ok()));
    });
    group.bench_function("matrix_full", |bencher| {
        bencher.iter(|| black_box(parse_graph::<AdjacencyMatrix<u64>, Weights>(&input).ok()));
    });
    group.bench_function("matrix_triangular", |bencher| {
        bencher.iter(|| {
            black_box(parse_graph::<AdjacencyMatrix<u64, Triangular>, Weights>(&input).ok())
        });
    });

    group.finish();
}

fn union_all<D: DisjointSets>(n: usize, pairs: &[(usize, usize)]) -> usize {
    let mut sets = D::new(n);
    pairs.iter().filter(|&&(x, y)| sets.union(x, y)).count()
}

fn bench_union_find(c: &mut Criterion) {
    let n = 100_000;
    let pairs = random_pairs(&mut default_rng(), n, n * 2);
    let mut group = c.benchmark_group("union_find");
    apply_small_runtime_config(&mut group);

    group.bench_function(BenchmarkId::new("explicit", n), |bencher| {
        bencher.iter(|| black_box(union_all::<ExplicitSets>(n, &pairs)));
    });
    group.bench_function(BenchmarkId::new("implicit", n), |bencher| {
        bencher.iter(|| black_box(union_all::<ImplicitSets>(n, &pairs)));
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_load, bench_union_find);
criterion_main!(benches);

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::SamplingMode;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Inputs at or below this many edges are measured with the small preset.
pub const SMALL_INPUT_EDGES: usize = 20_000;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a preset from the input's edge count.
pub fn apply_runtime_for_edges<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, edges: usize) {
    if edges <= SMALL_INPUT_EDGES {
        apply_small_runtime_config(group);
    } else if edges <= SMALL_INPUT_EDGES * 10 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Largest vertex count benchmarked with an `n × n` matrix (128 MiB of
/// `u64` cells).
pub const MAX_MATRIX_VERTICES: usize = 4_096;

pub fn dense_matrix_fits(vertex_count: usize) -> bool {
    vertex_count <= MAX_MATRIX_VERTICES
}

/// Seed for one generated input, distinct per case and size.
pub fn case_seed(case: usize, size: usize) -> u64 {
    RNG_SEED ^ ((size as u64) << 7) ^ case as u64
}

/// `count` random vertex pairs over `vertex_count` vertices.
pub fn random_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    count: usize,
) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| {
            (
                rng.random_range(0..vertex_count),
                rng.random_range(0..vertex_count),
            )
        })
        .collect()
}

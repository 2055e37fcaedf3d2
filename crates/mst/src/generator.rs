use std::collections::HashSet;
use std::io;
use std::io::Write;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::selector::density;
use crate::selector::packing_ratio;

/// Most decimal places a generated weight may carry; `f64` cannot faithfully
/// hold more.
pub const MAX_PRECISION: usize = 15;

const DEFAULT_PRECISION: usize = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    Tree,
    Sparse,
    HalfDense,
    Dense,
    Complete,
    Euclidean,
}

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Sparse => "sparse",
            Self::HalfDense => "half_dense",
            Self::Dense => "dense",
            Self::Complete => "complete",
            Self::Euclidean => "euclidean",
        }
    }
}

pub const ALL_CASES: [GraphCase; 6] = [
    GraphCase::Tree,
    GraphCase::Sparse,
    GraphCase::HalfDense,
    GraphCase::Dense,
    GraphCase::Complete,
    GraphCase::Euclidean,
];

/// Inclusive range edge weights (or vertex coordinates) are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100_000.0,
        }
    }
}

/// A generated connected graph with no self-loops or parallel edges.
///
/// Weights are integer ticks of `10^-precision`, so the rendered file is
/// exact under a fixed-point reader with `precision` places.
#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub vertex_count: usize,
    pub precision: usize,
    pub edges: Vec<(u32, u32, u64)>,
    pub about: String,
}

impl GeneratedGraph {
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn write_to<O: Write>(&self, out: &mut O) -> io::Result<()> {
        writeln!(out, "{}", self.vertex_count)?;
        writeln!(out, "{}", self.edge_count())?;

        let scale = 10_u64.pow(self.precision as u32);
        for &(u, v, ticks) in &self.edges {
            if self.precision == 0 {
                writeln!(out, "{u} {v} {ticks}")?;
            } else {
                writeln!(
                    out,
                    "{u} {v} {}.{:0width$}",
                    ticks / scale,
                    ticks % scale,
                    width = self.precision
                )?;
            }
        }

        // The loader stops after the last record, so a trailing comment is
        // free to describe the input.
        writeln!(
            out,
            "# {} density={:.2} pom={:.2}",
            self.about,
            density(self.vertex_count, self.edge_count()),
            packing_ratio(self.vertex_count, self.edge_count())
        )
    }

    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + self.edges.len() * 16);
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut out);
        out
    }
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    let range = WeightRange::default();
    match case {
        GraphCase::Tree => {
            let n = size.max(2);
            random_connected(n, n - 1, range, DEFAULT_PRECISION, seed)
        }
        GraphCase::Sparse => {
            let n = size.max(8);
            random_connected(n, n.saturating_mul(4), range, DEFAULT_PRECISION, seed)
        }
        GraphCase::HalfDense => {
            let n = floor_sqrt(size).max(8);
            random_connected(n, edges_for_packing(n, 0.5), range, DEFAULT_PRECISION, seed)
        }
        GraphCase::Dense => {
            let n = floor_sqrt(size).max(8);
            random_connected(n, edges_for_packing(n, 0.9), range, DEFAULT_PRECISION, seed)
        }
        GraphCase::Complete => {
            let n = floor_sqrt(size).max(8);
            random_connected(n, complete_edges(n), range, DEFAULT_PRECISION, seed)
        }
        GraphCase::Euclidean => {
            let n = floor_sqrt(size).max(8);
            euclidean_complete(n, 2, range, DEFAULT_PRECISION, seed)
        }
    }
}

/// Edge count whose packing ratio is `packing`.
pub fn edges_for_packing(vertex_count: usize, packing: f64) -> usize {
    let tree = vertex_count.saturating_sub(1);
    let choices = complete_edges(vertex_count) - tree;
    tree + (choices as f64 * packing.clamp(0.0, 1.0)).round() as usize
}

/// Random connected graph with `edge_count` distinct edges.
///
/// A random spanning tree is laid first (vertex `i` joins a random earlier
/// vertex), then the remaining edges are added between unconnected pairs.
/// `edge_count` is clamped to `[n - 1, n(n - 1) / 2]`.
pub fn random_connected(
    vertex_count: usize,
    edge_count: usize,
    range: WeightRange,
    precision: usize,
    seed: u64,
) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let precision = precision.min(MAX_PRECISION);
    let n = vertex_count;
    let m = edge_count.clamp(n.saturating_sub(1), complete_edges(n));
    let (lo, hi) = tick_range(range, precision);
    let mut edges = Vec::with_capacity(m);

    if m == complete_edges(n) {
        for u in 0..n {
            for v in (u + 1)..n {
                edges.push((u as u32, v as u32, rng.random_range(lo..=hi)));
            }
        }
    } else {
        let mut used = HashSet::with_capacity(m * 2 + 1);
        for i in 1..n {
            let j = rng.random_range(0..i);
            push_unique_edge(&mut edges, &mut used, i, j, rng.random_range(lo..=hi));
        }

        if packing_ratio(n, m) > 0.5 {
            let mut missing = Vec::with_capacity(complete_edges(n) - edges.len());
            for u in 0..n {
                for v in (u + 1)..n {
                    if !used.contains(&edge_key(u, v)) {
                        missing.push((u, v));
                    }
                }
            }
            missing.shuffle(&mut rng);
            for (u, v) in missing.into_iter().take(m - edges.len()) {
                push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(lo..=hi));
            }
        } else {
            while edges.len() < m {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(lo..=hi));
            }
        }
    }

    edges.shuffle(&mut rng);
    GeneratedGraph {
        vertex_count: n,
        precision,
        edges,
        about: format!(
            "n={n} m={m} min={:.1} max={:.1} prec={precision} seed={seed}",
            range.min, range.max
        ),
    }
}

/// Complete graph over random points in `dims` dimensions, each coordinate
/// drawn from `range`; edge weights are Euclidean distances.
pub fn euclidean_complete(
    vertex_count: usize,
    dims: usize,
    range: WeightRange,
    precision: usize,
    seed: u64,
) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let precision = precision.min(MAX_PRECISION);
    let n = vertex_count;
    let scale = 10_f64.powi(precision as i32);
    let coords: Vec<f64> = (0..n * dims)
        .map(|_| rng.random_range(range.min..=range.max))
        .collect();

    let mut edges = Vec::with_capacity(complete_edges(n));
    for u in 0..n {
        let pu = &coords[u * dims..(u + 1) * dims];
        for v in (u + 1)..n {
            let pv = &coords[v * dims..(v + 1) * dims];
            let dist = pu
                .iter()
                .zip(pv)
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt();
            edges.push((u as u32, v as u32, (dist * scale).round() as u64));
        }
    }

    GeneratedGraph {
        vertex_count: n,
        precision,
        edges,
        about: format!(
            "n={n} m={} d={dims} min={:.1} max={:.1} prec={precision} seed={seed}",
            complete_edges(n),
            range.min,
            range.max
        ),
    }
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn tick_range(range: WeightRange, precision: usize) -> (u64, u64) {
    let scale = 10_f64.powi(precision as i32);
    let lo = (range.min.max(0.0) * scale).round() as u64;
    let hi = (range.max.max(0.0) * scale).round() as u64;
    (lo.min(hi), hi.max(lo))
}

#[inline]
fn edge_key(u: usize, v: usize) -> u64 {
    let (a, b) = if u < v { (u, v) } else { (v, u) };
    ((a as u64) << 32) | b as u64
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(u32, u32, u64)>,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    if used.insert(edge_key(u, v)) {
        edges.push((u as u32, v as u32, weight));
        true
    } else {
        false
    }
}

//! Writes a random connected graph in the input format read by `mst`.
//!
//! ```bash
//! mst-gen 1000 -n 5000 -p 2 -r 7 -o inputs/sparse-1000.g
//! mst-gen 300 --euclidean 2,0,1000 > inputs/points-300.g
//! ```

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mst::generator::GeneratedGraph;
use mst::generator::MAX_PRECISION;
use mst::generator::WeightRange;
use mst::generator::euclidean_complete;
use mst::generator::random_connected;
use mst_cli::CliError;
use mst_cli::Result;
use mst_cli::setup_logging;
use tracing::debug;
use tracing::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeTarget {
    Count(usize),
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Points {
    dims: usize,
    range: WeightRange,
}

/// Random connected graph generator (no self-loops, no parallel edges)
#[derive(Parser)]
#[command(name = "mst-gen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of vertices
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    vertices: u32,

    /// Number of edges, or `complete`
    #[arg(short = 'n', long, default_value = "complete", value_parser = parse_edges)]
    edges: EdgeTarget,

    /// Decimal places of every edge weight
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    precision: u8,

    /// Random seed [default: drawn from the OS]
    #[arg(short = 'r', long)]
    seed: Option<u64>,

    /// Inclusive edge weight range as MIN,MAX
    #[arg(short = 'e', long, default_value = "0.1,100000", value_parser = parse_range)]
    weights: WeightRange,

    /// Place vertices at random points (DIMS,MIN,MAX) and weight each pair by distance
    #[arg(long, value_parser = parse_points, conflicts_with_all = ["edges", "weights"])]
    euclidean: Option<Points>,

    /// Output file [default: stdout]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_number<T: std::str::FromStr>(s: &str, what: &str) -> std::result::Result<T, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid {what}: {s:?}"))
}

fn parse_edges(s: &str) -> std::result::Result<EdgeTarget, String> {
    if s.eq_ignore_ascii_case("complete") {
        return Ok(EdgeTarget::Complete);
    }
    parse_number(s, "edge count").map(EdgeTarget::Count)
}

fn parse_bounds(min: &str, max: &str) -> std::result::Result<WeightRange, String> {
    let range = WeightRange {
        min: parse_number(min, "minimum")?,
        max: parse_number(max, "maximum")?,
    };
    if !(0.0..=range.max).contains(&range.min) {
        return Err(format!("need 0 <= MIN <= MAX, got {},{}", range.min, range.max));
    }
    Ok(range)
}

fn parse_range(s: &str) -> std::result::Result<WeightRange, String> {
    match s.split(',').collect::<Vec<_>>()[..] {
        [min, max] => parse_bounds(min, max),
        _ => Err(format!("expected MIN,MAX, got {s:?}")),
    }
}

fn parse_points(s: &str) -> std::result::Result<Points, String> {
    match s.split(',').collect::<Vec<_>>()[..] {
        [dims, min, max] => {
            let dims = parse_number(dims, "dimension count")?;
            if dims == 0 {
                return Err("need at least one dimension".to_owned());
            }
            Ok(Points {
                dims,
                range: parse_bounds(min, max)?,
            })
        }
        _ => Err(format!("expected DIMS,MIN,MAX, got {s:?}")),
    }
}

fn generate(args: &Args, seed: u64) -> GeneratedGraph {
    let n = args.vertices as usize;
    let precision = args.precision as usize;
    match args.euclidean {
        Some(points) => euclidean_complete(n, points.dims, points.range, precision, seed),
        None => {
            let m = match args.edges {
                EdgeTarget::Count(m) => m,
                EdgeTarget::Complete => usize::MAX,
            };
            random_connected(n, m, args.weights, precision, seed)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let graph = generate(args, seed);
    debug!(
        vertices = graph.vertex_count,
        edges = graph.edge_count(),
        seed,
        "generated graph"
    );

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(|source| CliError::Create {
            path: path.clone(),
            source,
        })?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(sink);
    graph.write_to(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(args.verbose, false);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

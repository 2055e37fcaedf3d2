//! Computes the minimum spanning tree of one input graph file.
//!
//! ```bash
//! mst inputs/dense-1000.g
//! mst inputs/sparse.g --algorithm prim-heap --weights fixed1 --edges
//! MST_MATRIX=triangular mst inputs/dense-1000.g -a prim-dense
//! ```

use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::ValueEnum;
use mst::Algorithm;
use mst::Decimal;
use mst::FixedPoint;
use mst::Integer;
use mst::MatrixStorage;
use mst::WeightParser;
use mst::solve_file;
use mst_cli::Result;
use mst_cli::setup_logging;
use tracing::debug;
use tracing::error;
use tracing::info;

/// How edge weights in the input are lexed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum WeightFormat {
    /// Any number of fractional digits, summed as f64
    #[default]
    Decimal,
    /// Exactly one fractional digit, summed exactly
    Fixed1,
    /// Exactly two fractional digits, summed exactly
    Fixed2,
    /// Whole numbers; fractional digits are ignored
    Integer,
}

/// Minimum spanning tree of a weighted undirected graph
#[derive(Parser)]
#[command(name = "mst")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input graph: vertex count, edge count, then one `u v weight` line per edge
    file: PathBuf,

    /// Strategy to run, or `best` to choose by density
    #[arg(short, long, env = "MST_ALGORITHM", default_value = "best")]
    algorithm: Algorithm,

    /// Weight format of the input
    #[arg(short, long, env = "MST_WEIGHTS", value_enum, default_value_t)]
    weights: WeightFormat,

    /// Adjacency matrix storage for prim-dense (full, triangular)
    #[arg(short, long, env = "MST_MATRIX", default_value = "full")]
    matrix: MatrixStorage,

    /// Also print every tree edge
    #[arg(long)]
    edges: bool,

    /// Enable debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all diagnostics except errors
    #[arg(short, long)]
    quiet: bool,
}

fn run<P: WeightParser>(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if let Algorithm::Fixed(strategy) = cli.algorithm {
        info!("using {strategy}");
    }

    let solution = solve_file::<P>(&cli.file, cli.algorithm, cli.matrix)?;
    debug!(
        strategy = %solution.strategy,
        vertices = solution.header.vertex_count,
        edges = solution.header.edge_count,
        "spanning tree found"
    );

    writeln!(out, "{}", P::render(solution.tree.total))?;
    if cli.edges {
        for edge in &solution.tree.edges {
            writeln!(out, "{} {} {}", edge.u, edge.v, P::render(edge.weight))?;
        }
    }
    Ok(())
}

fn run_to_stdout<P: WeightParser>(cli: &Cli) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    run::<P>(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.weights {
        WeightFormat::Decimal => run_to_stdout::<Decimal>(&cli),
        WeightFormat::Fixed1 => run_to_stdout::<FixedPoint<1>>(&cli),
        WeightFormat::Fixed2 => run_to_stdout::<FixedPoint<2>>(&cli),
        WeightFormat::Integer => run_to_stdout::<Integer>(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::CommandFactory;
    use mst::Strategy;

    use super::*;

    fn scenario_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mst-cli-{}-{name}.g", std::process::id()));
        fs::write(&path, b"4\n5\n0 1 1.0\n0 2 4.0\n1 2 2.0\n1 3 6.0\n2 3 3.0\n").unwrap();
        path
    }

    fn printed<P: WeightParser>(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run::<P>(&cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_total_then_tree_edges() {
        let path = scenario_file("edges");
        let file = path.to_str().unwrap();

        assert_eq!(printed::<Decimal>(&["mst", file]), "6.0\n");
        assert_eq!(
            printed::<Decimal>(&["mst", file, "--edges", "--algorithm", "best"]),
            "6.0\n0 1 1.0\n1 2 2.0\n2 3 3.0\n"
        );
        assert_eq!(
            printed::<FixedPoint<1>>(&["mst", file, "--algorithm", "kruskal-implicit-full-sort"]),
            "6.0\n"
        );
        assert_eq!(
            printed::<Integer>(&["mst", file, "--algorithm", "prim-heap"]),
            "6\n"
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_input_is_an_error() {
        let cli = Cli::try_parse_from(["mst", "/nonexistent/mst-input.g"]).unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            run::<Decimal>(&cli, &mut out),
            Err(mst_cli::CliError::Mst(mst::Error::Open { .. }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse_into_library_types() {
        let cli = Cli::try_parse_from([
            "mst",
            "graph.g",
            "--algorithm",
            "prim-heap",
            "--weights",
            "fixed1",
            "--matrix",
            "triangular",
            "--edges",
        ])
        .unwrap();
        assert_eq!(cli.algorithm, Algorithm::Fixed(Strategy::PrimHeap));
        assert_eq!(cli.weights, WeightFormat::Fixed1);
        assert_eq!(cli.matrix, MatrixStorage::Triangular);
        assert!(cli.edges);
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        assert!(Cli::try_parse_from(["mst"]).is_err());
        assert!(Cli::try_parse_from(["mst", "a.g", "b.g"]).is_err());
        assert!(Cli::try_parse_from(["mst", "a.g", "--algorithm", "boruvka"]).is_err());
    }
}

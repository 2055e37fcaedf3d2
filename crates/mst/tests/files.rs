use std::fs;
use std::path::PathBuf;

use mst::Algorithm;
use mst::Decimal;
use mst::EdgeList;
use mst::Error;
use mst::FixedPoint;
use mst::GraphFile;
use mst::Header;
use mst::MatrixStorage;
use mst::Strategy;
use mst::generator::GraphCase;
use mst::generator::generate_case;
use mst::solve_file;

struct TempInput {
    path: PathBuf,
}

impl TempInput {
    fn new(name: &str, contents: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("mst-{}-{name}.g", std::process::id()));
        fs::write(&path, contents).unwrap();
        Self { path }
    }
}

impl Drop for TempInput {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn scenario_file() {
    let input = TempInput::new(
        "scenario",
        b"4\n5\n0 1 1.0\n0 2 4.0\n1 2 2.0\n1 3 6.0\n2 3 3.0\n",
    );
    let file = GraphFile::open(&input.path).unwrap();
    assert_eq!(file.path(), input.path.as_path());
    assert_eq!(
        file.header().unwrap(),
        Header {
            vertex_count: 4,
            edge_count: 5
        }
    );
    let loaded = file.load::<EdgeList<f64>, Decimal>().unwrap();
    assert_eq!(loaded.graph.total_weight().unwrap(), 16.0);
    drop(file);

    let solution = solve_file::<Decimal>(&input.path, Algorithm::Best, MatrixStorage::Full).unwrap();
    assert_eq!(solution.tree.total, 6.0);
}

#[test]
fn missing_file_is_open_error() {
    let path = std::env::temp_dir().join("mst-definitely-missing-input.g");
    let err = solve_file::<Decimal>(&path, Algorithm::Best, MatrixStorage::Full).unwrap_err();
    match err {
        Error::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_file_is_eof() {
    let input = TempInput::new("empty", b"");
    let file = GraphFile::open(&input.path).unwrap();
    assert!(file.bytes().is_empty());
    assert!(matches!(
        file.header(),
        Err(Error::UnexpectedEof {
            offset: 0,
            expected: "vertex count"
        })
    ));
}

#[test]
fn generated_file_with_footer_is_stable_across_runs() {
    let graph = generate_case(GraphCase::Sparse, 700, 0xF11E);
    let input = TempInput::new("generated", &graph.render());

    let mut totals = Vec::new();
    for _ in 0..3 {
        let solution = solve_file::<FixedPoint<2>>(
            &input.path,
            Algorithm::Fixed(Strategy::KruskalImplicitPartialSort),
            MatrixStorage::Full,
        )
        .unwrap();
        assert_eq!(solution.header.edge_count, graph.edge_count());
        totals.push(solution.tree.total);
    }
    assert!(totals.windows(2).all(|w| w[0] == w[1]));

    let dense = solve_file::<FixedPoint<2>>(
        &input.path,
        Algorithm::Fixed(Strategy::PrimDense),
        MatrixStorage::Triangular,
    )
    .unwrap();
    assert_eq!(dense.tree.total, totals[0]);
}

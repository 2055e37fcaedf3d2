use mst::ALL_STRATEGIES;
use mst::AdjacencyList;
use mst::Algorithm;
use mst::EdgeList;
use mst::Error;
use mst::FixedPoint;
use mst::MatrixStorage;
use mst::parse_graph;
use mst::solve_bytes;
use proptest::prelude::*;

fn render(n: usize, edges: &[(usize, usize, u64)]) -> Vec<u8> {
    let mut out = format!("{n}\n{}\n", edges.len());
    for &(u, v, w) in edges {
        out.push_str(&format!("{u} {v} {}.{}\n", w / 10, w % 10));
    }
    out.into_bytes()
}

fn multigraph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u64)>)> {
    (1usize..24).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u64..500);
        (Just(n), prop::collection::vec(edge, 0..80))
    })
}

proptest! {
    #[test]
    fn prop_strategies_agree((n, edges) in multigraph()) {
        let input = render(n, &edges);
        let mut outcome: Option<Option<u64>> = None;
        for strategy in ALL_STRATEGIES {
            for storage in [MatrixStorage::Full, MatrixStorage::Triangular] {
                let got = match solve_bytes::<FixedPoint<1>>(&input, Algorithm::Fixed(strategy), storage) {
                    Ok(solution) => {
                        prop_assert_eq!(solution.tree.len(), n - 1);
                        Some(solution.tree.total)
                    }
                    Err(Error::Disconnected { accepted, required }) => {
                        prop_assert!(accepted < required);
                        None
                    }
                    Err(other) => return Err(TestCaseError::fail(other.to_string())),
                };
                match outcome {
                    None => outcome = Some(got),
                    Some(expected) => prop_assert_eq!(got, expected, "strategy={}", strategy),
                }
            }
        }
    }

    #[test]
    fn prop_edge_and_adjacency_lists_agree((n, edges) in multigraph()) {
        let input = render(n, &edges);
        let list = parse_graph::<EdgeList<u64>, FixedPoint<1>>(&input).unwrap().graph;
        let adjacency = parse_graph::<AdjacencyList<u64>, FixedPoint<1>>(&input).unwrap().graph;

        let sum: u64 = adjacency.edges().map(|e| e.weight).sum();
        prop_assert_eq!(list.total_weight().unwrap(), sum);
        let degrees: Vec<usize> = (0..n).map(|v| adjacency.degree(v)).collect();
        prop_assert_eq!(list.degrees(n), degrees);
    }
}

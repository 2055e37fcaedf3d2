use tracing::debug;

use crate::loader::Header;
use crate::solve::Strategy;

/// Packing at or above which the dense Prim beats Kruskal.
pub const DENSE_PACKING: f64 = 0.8;

/// Where `m` sits between a spanning tree (`0.0`) and a complete graph
/// (`1.0`). Graphs with fewer than three vertices have no room in between
/// and count as complete.
pub fn packing_ratio(vertex_count: usize, edge_count: usize) -> f64 {
    if vertex_count <= 2 {
        return 1.0;
    }
    let n = vertex_count as f64;
    let tree_edges = n - 1.0;
    let choices = n * (n - 1.0) / 2.0 - tree_edges;
    (edge_count as f64 - tree_edges) / choices
}

/// Edges per vertex.
pub fn density(vertex_count: usize, edge_count: usize) -> f64 {
    if vertex_count == 0 {
        return 0.0;
    }
    edge_count as f64 / vertex_count as f64
}

/// Picks the cheaper strategy for a graph of this shape.
pub fn select(header: Header) -> Strategy {
    let packing = packing_ratio(header.vertex_count, header.edge_count);
    let strategy = if packing < DENSE_PACKING {
        Strategy::KruskalExplicitPartialSort
    } else {
        Strategy::PrimDense
    };
    debug!(packing, strategy = strategy.label(), "selected strategy");
    strategy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(vertex_count: usize, edge_count: usize) -> Header {
        Header {
            vertex_count,
            edge_count,
        }
    }

    #[test]
    fn complete_graph_is_dense() {
        assert_eq!(packing_ratio(5, 10), 1.0);
        assert_eq!(select(header(5, 10)), Strategy::PrimDense);
    }

    #[test]
    fn tree_is_sparse() {
        assert_eq!(packing_ratio(1_000, 999), 0.0);
        assert_eq!(select(header(1_000, 999)), Strategy::KruskalExplicitPartialSort);
    }

    #[test]
    fn tiny_graphs_do_not_divide_by_zero() {
        for n in 0..=2 {
            for m in 0..3 {
                assert_eq!(packing_ratio(n, m), 1.0);
            }
        }
        assert_eq!(density(0, 0), 0.0);
    }

    #[test]
    fn threshold_boundary() {
        // n = 11: 10 tree edges, 45 more make it complete.
        assert!(packing_ratio(11, 10 + 35) < DENSE_PACKING);
        assert_eq!(packing_ratio(11, 10 + 36), DENSE_PACKING);
        assert_eq!(select(header(11, 46)), Strategy::PrimDense);
        assert_eq!(select(header(11, 45)), Strategy::KruskalExplicitPartialSort);
    }

    #[test]
    fn too_few_edges_is_negative() {
        assert!(packing_ratio(10, 3) < 0.0);
    }
}

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::graph::AdjacencyList;
use crate::graph::AdjacencyMatrix;
use crate::graph::Edge;
use crate::graph::MatrixLayout;
use crate::heap::VertexHeap;
use crate::tree::SpanningTree;
use crate::weight::Weight;

/// Prim grows the tree from this vertex.
pub const ROOT: usize = 0;

const NO_PARENT: u32 = u32::MAX;

/// O(n^2) Prim over a matrix: a linear scan picks the next vertex and the
/// new vertex's row relaxes every remaining one.
pub fn prim_dense<W: Weight, L: MatrixLayout>(
    matrix: &AdjacencyMatrix<W, L>,
) -> Result<SpanningTree<W>> {
    let n = matrix.vertex_count();
    let required = n.saturating_sub(1);
    let mut tree = SpanningTree::with_capacity(required);
    if required == 0 {
        return Ok(tree);
    }

    let mut best = vec![W::INFINITY; n];
    let mut parent = vec![NO_PARENT; n];
    let mut visited = vec![false; n];
    best[ROOT] = W::ZERO;

    let mut u = ROOT;
    loop {
        visited[u] = true;
        if parent[u] != NO_PARENT {
            tree.push(Edge::new(parent[u], u as u32, best[u]))?;
            if tree.len() == required {
                break;
            }
        }

        let mut next = None;
        let mut next_weight = W::INFINITY;
        for v in 0..n {
            if visited[v] {
                continue;
            }
            let w = matrix.weight(u, v);
            if w.less_than(best[v]) {
                best[v] = w;
                parent[v] = u as u32;
            }
            if best[v].less_than(next_weight) {
                next_weight = best[v];
                next = Some(v);
            }
        }

        match next {
            Some(v) => u = v,
            None => {
                return Err(Error::Disconnected {
                    accepted: tree.len(),
                    required,
                });
            }
        }
    }

    debug!(vertices = n, "prim dense complete");
    Ok(tree)
}

/// O(m log n) Prim over adjacency lists with a decrease-key heap frontier.
pub fn prim_heap<W: Weight>(list: &AdjacencyList<W>) -> Result<SpanningTree<W>> {
    let n = list.vertex_count();
    let required = n.saturating_sub(1);
    let mut tree = SpanningTree::with_capacity(required);
    if required == 0 {
        return Ok(tree);
    }

    let mut frontier = VertexHeap::new(n);
    let mut parent = vec![NO_PARENT; n];
    let mut visited = vec![false; n];
    frontier.push_or_decrease(ROOT as u32, W::ZERO);

    while let Some((u, weight)) = frontier.extract_min() {
        let u = u as usize;
        visited[u] = true;
        if parent[u] != NO_PARENT {
            tree.push(Edge::new(parent[u], u as u32, weight))?;
            if tree.len() == required {
                debug!(vertices = n, edges = list.edge_count(), "prim heap complete");
                return Ok(tree);
            }
        }

        for neighbor in list.neighbors(u) {
            let v = neighbor.to as usize;
            if !visited[v] && frontier.push_or_decrease(neighbor.to, neighbor.weight) {
                parent[v] = u as u32;
            }
        }
    }

    Err(Error::Disconnected {
        accepted: tree.len(),
        required,
    })
}

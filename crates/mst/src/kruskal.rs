use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::graph::Edge;
use crate::graph::EdgeList;
use crate::heap::EdgeHeap;
use crate::tree::SpanningTree;
use crate::union_find::DisjointSets;
use crate::weight::Weight;

/// Sorts the whole edge list once, then scans it in ascending order.
pub fn kruskal_full_sort<D: DisjointSets, W: Weight>(
    edges: &mut EdgeList<W>,
    vertex_count: usize,
) -> Result<SpanningTree<W>> {
    edges.sort_by_weight();
    span::<D, W, _>(edges.as_slice().iter().copied(), vertex_count)
}

/// Draws edges from the heap only until the tree is complete; edges heavier
/// than the last accepted one are never ordered.
pub fn kruskal_partial_sort<D: DisjointSets, W: Weight>(
    heap: &mut EdgeHeap<W>,
    vertex_count: usize,
) -> Result<SpanningTree<W>> {
    span::<D, W, _>(std::iter::from_fn(|| heap.extract_min()), vertex_count)
}

fn span<D, W, I>(ascending: I, vertex_count: usize) -> Result<SpanningTree<W>>
where
    D: DisjointSets,
    W: Weight,
    I: Iterator<Item = Edge<W>>,
{
    let required = vertex_count.saturating_sub(1);
    let mut tree = SpanningTree::with_capacity(required);
    if required == 0 {
        return Ok(tree);
    }

    let mut sets = D::new(vertex_count);
    let mut scanned = 0_usize;
    for edge in ascending {
        scanned += 1;
        if sets.union(edge.u as usize, edge.v as usize) {
            tree.push(edge)?;
            if tree.len() == required {
                debug!(scanned, accepted = required, "kruskal complete");
                return Ok(tree);
            }
        }
    }

    Err(Error::Disconnected {
        accepted: tree.len(),
        required,
    })
}

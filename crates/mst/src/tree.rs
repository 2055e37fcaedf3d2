use crate::error::Error;
use crate::error::Result;
use crate::graph::Edge;
use crate::weight::Weight;

/// Accepted tree edges and their weight sum.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree<W> {
    pub total: W,
    pub edges: Vec<Edge<W>>,
}

impl<W: Weight> SpanningTree<W> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            total: W::ZERO,
            edges: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub(crate) fn push(&mut self, edge: Edge<W>) -> Result<()> {
        self.total = self
            .total
            .checked_add(edge.weight)
            .ok_or(Error::WeightOverflow {
                edges: self.edges.len() + 1,
            })?;
        self.edges.push(edge);
        Ok(())
    }

    /// Endpoint pairs as `(min, max)`, sorted. Independent of the strategy
    /// and of the direction edges were discovered in.
    pub fn canonical_edges(&self) -> Vec<(u32, u32)> {
        let mut pairs: Vec<_> = self.edges.iter().map(Edge::endpoints).collect();
        pairs.sort_unstable();
        pairs
    }
}

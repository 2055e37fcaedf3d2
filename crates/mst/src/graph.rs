use std::cmp::Ordering;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::Error;
use crate::error::Result;
use crate::weight::Weight;

/// Undirected weighted edge. `(u, v, w)` and `(v, u, w)` are the same edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edge<W> {
    pub u: u32,
    pub v: u32,
    pub weight: W,
}

impl<W> Edge<W> {
    #[inline]
    pub fn new(u: u32, v: u32, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Endpoints with the smaller id first.
    #[inline]
    pub fn endpoints(&self) -> (u32, u32) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RepresentationKind {
    EdgeList,
    HeapOrderedEdgeList,
    AdjacencyList,
    AdjacencyMatrix,
}

impl RepresentationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::EdgeList => "edge_list",
            Self::HeapOrderedEdgeList => "heap_ordered_edge_list",
            Self::AdjacencyList => "adjacency_list",
            Self::AdjacencyMatrix => "adjacency_matrix",
        }
    }
}

/// A graph layout the loader can fill in one pass.
///
/// `allocate` receives the header counts and is the only allocation point;
/// `add_edge` is called once per edge record with ids already checked to be
/// below `vertex_count`.
pub trait Representation<W: Weight>: Sized {
    const KIND: RepresentationKind;

    fn allocate(vertex_count: usize, edge_count: usize) -> Self;

    fn add_edge(&mut self, u: u32, v: u32, weight: W);
}

#[derive(Clone, Debug, Default)]
pub struct EdgeList<W> {
    edges: Vec<Edge<W>>,
}

impl<W: Weight> EdgeList<W> {
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn sort_by_weight(&mut self) {
        self.edges
            .sort_unstable_by(|a, b| a.weight.total_order(&b.weight));
    }

    /// Sum of every edge weight, self-loops and parallel edges included.
    pub fn total_weight(&self) -> Result<W> {
        self.edges.iter().try_fold(W::ZERO, |acc, e| {
            acc.checked_add(e.weight)
                .ok_or(Error::WeightOverflow { edges: self.len() })
        })
    }

    /// Degree of every vertex; a self-loop counts twice.
    pub fn degrees(&self, vertex_count: usize) -> Vec<usize> {
        let mut deg = vec![0_usize; vertex_count];
        for edge in &self.edges {
            deg[edge.u as usize] += 1;
            deg[edge.v as usize] += 1;
        }
        deg
    }
}

impl<W: Weight> Representation<W> for EdgeList<W> {
    const KIND: RepresentationKind = RepresentationKind::EdgeList;

    fn allocate(_vertex_count: usize, edge_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edge_count),
        }
    }

    #[inline]
    fn add_edge(&mut self, u: u32, v: u32, weight: W) {
        self.edges.push(Edge::new(u, v, weight));
    }
}

/// Entry of a per-vertex neighbor list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor<W> {
    pub to: u32,
    pub weight: W,
}

#[derive(Clone, Debug)]
pub struct AdjacencyList<W> {
    lists: Vec<Vec<Neighbor<W>>>,
    edge_count: usize,
}

impl<W: Weight> AdjacencyList<W> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.lists[v].len()
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[Neighbor<W>] {
        &self.lists[v]
    }

    /// Every undirected edge exactly once.
    ///
    /// A non-loop edge is reported from its smaller endpoint. A self-loop is
    /// stored twice in its vertex's list and reported on every other
    /// occurrence.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.lists.iter().enumerate().flat_map(|(u, list)| {
            let u = u as u32;
            let mut loop_parity = false;
            list.iter().filter_map(move |n| match n.to.cmp(&u) {
                Ordering::Greater => Some(Edge::new(u, n.to, n.weight)),
                Ordering::Equal => {
                    loop_parity = !loop_parity;
                    loop_parity.then(|| Edge::new(u, u, n.weight))
                }
                Ordering::Less => None,
            })
        })
    }
}

impl<W: Weight> Representation<W> for AdjacencyList<W> {
    const KIND: RepresentationKind = RepresentationKind::AdjacencyList;

    fn allocate(vertex_count: usize, edge_count: usize) -> Self {
        let per_vertex = if vertex_count == 0 {
            0
        } else {
            (2 * edge_count).div_ceil(vertex_count)
        };
        Self {
            lists: (0..vertex_count)
                .map(|_| Vec::with_capacity(per_vertex))
                .collect(),
            edge_count: 0,
        }
    }

    #[inline]
    fn add_edge(&mut self, u: u32, v: u32, weight: W) {
        self.lists[u as usize].push(Neighbor { to: v, weight });
        self.lists[v as usize].push(Neighbor { to: u, weight });
        self.edge_count += 1;
    }
}

/// Matrix storage selected at dispatch time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum MatrixStorage {
    #[default]
    Full,
    Triangular,
}

impl MatrixStorage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Triangular => "triangular",
        }
    }
}

impl FromStr for MatrixStorage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(Self::Full),
            "triangular" | "half" => Ok(Self::Triangular),
            _ => Err(Error::UnknownStorage(s.to_owned())),
        }
    }
}

/// Cell addressing of an adjacency matrix, fixed at compile time.
pub trait MatrixLayout {
    const STORAGE: MatrixStorage;

    /// Whether `(u, v)` and `(v, u)` are distinct cells that both get written.
    const MIRRORED: bool;

    fn cell_count(vertex_count: usize) -> usize;

    /// Cell of `(u, v)`, or `None` when the layout does not store the pair.
    fn cell(vertex_count: usize, u: usize, v: usize) -> Option<usize>;
}

/// `n × n` row-major cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct Full;

impl MatrixLayout for Full {
    const STORAGE: MatrixStorage = MatrixStorage::Full;
    const MIRRORED: bool = true;

    #[inline]
    fn cell_count(vertex_count: usize) -> usize {
        vertex_count * vertex_count
    }

    #[inline]
    fn cell(vertex_count: usize, u: usize, v: usize) -> Option<usize> {
        Some(u * vertex_count + v)
    }
}

/// Strict upper triangle, `n(n-1)/2` cells; the diagonal is not stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct Triangular;

impl MatrixLayout for Triangular {
    const STORAGE: MatrixStorage = MatrixStorage::Triangular;
    const MIRRORED: bool = false;

    #[inline]
    fn cell_count(vertex_count: usize) -> usize {
        vertex_count * vertex_count.saturating_sub(1) / 2
    }

    #[inline]
    fn cell(vertex_count: usize, u: usize, v: usize) -> Option<usize> {
        let (a, b) = match u.cmp(&v) {
            Ordering::Less => (u, v),
            Ordering::Greater => (v, u),
            Ordering::Equal => return None,
        };
        Some(a * (2 * vertex_count - a - 1) / 2 + (b - a - 1))
    }
}

/// Dense weights; missing edges hold `W::INFINITY`.
///
/// Parallel edges keep the lightest weight.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix<W, L = Full> {
    vertex_count: usize,
    cells: Vec<W>,
    layout: PhantomData<L>,
}

impl<W: Weight, L: MatrixLayout> AdjacencyMatrix<W, L> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn weight(&self, u: usize, v: usize) -> W {
        match L::cell(self.vertex_count, u, v) {
            Some(idx) => self.cells[idx],
            None => W::INFINITY,
        }
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).less_than(W::INFINITY)
    }

    #[inline]
    fn keep_lighter(&mut self, u: usize, v: usize, weight: W) {
        if let Some(idx) = L::cell(self.vertex_count, u, v) {
            let cell = &mut self.cells[idx];
            if weight.less_than(*cell) {
                *cell = weight;
            }
        }
    }
}

impl<W: Weight, L: MatrixLayout> Representation<W> for AdjacencyMatrix<W, L> {
    const KIND: RepresentationKind = RepresentationKind::AdjacencyMatrix;

    fn allocate(vertex_count: usize, _edge_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![W::INFINITY; L::cell_count(vertex_count)],
            layout: PhantomData,
        }
    }

    #[inline]
    fn add_edge(&mut self, u: u32, v: u32, weight: W) {
        let (u, v) = (u as usize, v as usize);
        self.keep_lighter(u, v, weight);
        if L::MIRRORED && u != v {
            self.keep_lighter(v, u, weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<R: Representation<u64>>(n: usize, edges: &[(u32, u32, u64)]) -> R {
        let mut graph = R::allocate(n, edges.len());
        for &(u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    #[test]
    fn triangular_cells_are_a_bijection() {
        let n = 7;
        let mut seen = vec![false; Triangular::cell_count(n)];
        for u in 0..n {
            for v in (u + 1)..n {
                let idx = Triangular::cell(n, u, v).unwrap();
                assert_eq!(Triangular::cell(n, v, u), Some(idx));
                assert!(!seen[idx], "cell {idx} reused");
                seen[idx] = true;
            }
            assert_eq!(Triangular::cell(n, u, u), None);
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn layouts_name_their_storage() {
        for storage in [Full::STORAGE, Triangular::STORAGE] {
            assert_eq!(storage.label().parse::<MatrixStorage>().unwrap(), storage);
        }
        assert_eq!(Triangular::STORAGE, MatrixStorage::Triangular);
        assert_eq!("half".parse::<MatrixStorage>().unwrap(), MatrixStorage::Triangular);
        assert!(matches!(
            "sparse".parse::<MatrixStorage>(),
            Err(Error::UnknownStorage(_))
        ));
    }

    #[test]
    fn matrix_layouts_agree() {
        let edges = [(0, 1, 9), (1, 2, 4), (2, 0, 7), (1, 0, 3), (3, 3, 1)];
        let full: AdjacencyMatrix<u64, Full> = fill(4, &edges);
        let half: AdjacencyMatrix<u64, Triangular> = fill(4, &edges);
        for u in 0..4 {
            for v in 0..4 {
                if u != v {
                    assert_eq!(full.weight(u, v), half.weight(u, v), "({u},{v})");
                    assert_eq!(full.weight(u, v), full.weight(v, u));
                }
            }
        }
        assert_eq!(full.weight(0, 1), 3);
        assert!(!full.has_edge(0, 3));
        assert!(!half.has_edge(3, 3));
    }

    #[test]
    fn adjacency_list_is_symmetric() {
        let edges = [(0, 1, 5), (1, 2, 6), (2, 2, 1), (0, 1, 2)];
        let list: AdjacencyList<u64> = fill(3, &edges);
        assert_eq!(list.edge_count(), 4);
        assert_eq!(
            (0..3).map(|v| list.degree(v)).collect::<Vec<_>>(),
            vec![2, 3, 3]
        );
        assert!(list.neighbors(1).contains(&Neighbor { to: 0, weight: 5 }));
        assert!(list.neighbors(0).contains(&Neighbor { to: 1, weight: 5 }));

        let mut once: Vec<_> = list.edges().map(|e| (e.u, e.v, e.weight)).collect();
        once.sort_unstable();
        assert_eq!(once, vec![(0, 1, 2), (0, 1, 5), (1, 2, 6), (2, 2, 1)]);
    }

    #[test]
    fn edge_list_degrees_and_sum() {
        let list: EdgeList<u64> = fill(3, &[(0, 1, 5), (1, 2, 6), (2, 2, 1)]);
        assert_eq!(list.degrees(3), vec![1, 2, 3]);
        assert_eq!(list.total_weight().unwrap(), 12);

        let heavy: EdgeList<u64> = fill(2, &[(0, 1, u64::MAX / 2), (1, 0, u64::MAX / 2 + 1)]);
        assert!(matches!(
            heavy.total_weight(),
            Err(Error::WeightOverflow { edges: 2 })
        ));
    }
}

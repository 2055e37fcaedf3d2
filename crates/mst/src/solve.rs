use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::graph::AdjacencyList;
use crate::graph::AdjacencyMatrix;
use crate::graph::EdgeList;
use crate::graph::Full;
use crate::graph::MatrixLayout;
use crate::graph::MatrixStorage;
use crate::graph::RepresentationKind;
use crate::graph::Triangular;
use crate::heap::EdgeHeap;
use crate::kruskal::kruskal_full_sort;
use crate::kruskal::kruskal_partial_sort;
use crate::loader::GraphFile;
use crate::loader::Header;
use crate::loader::parse_graph;
use crate::loader::parse_header;
use crate::prim::prim_dense;
use crate::prim::prim_heap;
use crate::selector::select;
use crate::tree::SpanningTree;
use crate::union_find::DisjointSets;
use crate::union_find::ExplicitSets;
use crate::union_find::ImplicitSets;
use crate::weight::WeightParser;

/// A concrete algorithm paired with the representation it consumes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    KruskalExplicitFullSort,
    KruskalExplicitPartialSort,
    KruskalImplicitFullSort,
    KruskalImplicitPartialSort,
    PrimDense,
    PrimHeap,
}

pub const ALL_STRATEGIES: [Strategy; 6] = [
    Strategy::KruskalExplicitFullSort,
    Strategy::KruskalExplicitPartialSort,
    Strategy::KruskalImplicitFullSort,
    Strategy::KruskalImplicitPartialSort,
    Strategy::PrimDense,
    Strategy::PrimHeap,
];

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Self::KruskalExplicitFullSort => "kruskal-explicit-full-sort",
            Self::KruskalExplicitPartialSort => "kruskal-explicit-partial-sort",
            Self::KruskalImplicitFullSort => "kruskal-implicit-full-sort",
            Self::KruskalImplicitPartialSort => "kruskal-implicit-partial-sort",
            Self::PrimDense => "prim-dense",
            Self::PrimHeap => "prim-heap",
        }
    }

    pub fn representation(self) -> RepresentationKind {
        match self {
            Self::KruskalExplicitFullSort | Self::KruskalImplicitFullSort => {
                RepresentationKind::EdgeList
            }
            Self::KruskalExplicitPartialSort | Self::KruskalImplicitPartialSort => {
                RepresentationKind::HeapOrderedEdgeList
            }
            Self::PrimDense => RepresentationKind::AdjacencyMatrix,
            Self::PrimHeap => RepresentationKind::AdjacencyList,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ALL_STRATEGIES
            .into_iter()
            .find(|strategy| strategy.label() == normalized)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}

/// What a run is asked to do: let the density selector choose, or run one
/// strategy unconditionally.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Algorithm {
    #[default]
    Best,
    Fixed(Strategy),
}

impl Algorithm {
    pub fn resolve(self, header: Header) -> Strategy {
        match self {
            Self::Best => select(header),
            Self::Fixed(strategy) => strategy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Fixed(strategy) => strategy.label(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("best") {
            return Ok(Self::Best);
        }
        s.parse().map(Self::Fixed)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Solution<W> {
    pub strategy: Strategy,
    pub header: Header,
    pub tree: SpanningTree<W>,
}

/// Computes the minimum spanning tree of an in-memory input.
///
/// Inputs with at most one vertex short-circuit to an empty tree without
/// building any representation.
pub fn solve_bytes<P: WeightParser>(
    bytes: &[u8],
    algorithm: Algorithm,
    storage: MatrixStorage,
) -> Result<Solution<P::Weight>> {
    let header = parse_header(bytes)?;
    let strategy = algorithm.resolve(header);
    debug!(
        strategy = strategy.label(),
        representation = strategy.representation().label(),
        weights = P::NAME,
        "dispatching"
    );
    if header.vertex_count <= 1 {
        debug!(vertex_count = header.vertex_count, "trivial graph");
        return Ok(Solution {
            strategy,
            header,
            tree: SpanningTree::with_capacity(0),
        });
    }

    let tree = match strategy {
        Strategy::KruskalExplicitFullSort => full_sort::<P, ExplicitSets>(bytes)?,
        Strategy::KruskalExplicitPartialSort => partial_sort::<P, ExplicitSets>(bytes)?,
        Strategy::KruskalImplicitFullSort => full_sort::<P, ImplicitSets>(bytes)?,
        Strategy::KruskalImplicitPartialSort => partial_sort::<P, ImplicitSets>(bytes)?,
        Strategy::PrimDense => match storage {
            MatrixStorage::Full => dense::<P, Full>(bytes)?,
            MatrixStorage::Triangular => dense::<P, Triangular>(bytes)?,
        },
        Strategy::PrimHeap => {
            let loaded = parse_graph::<AdjacencyList<P::Weight>, P>(bytes)?;
            prim_heap(&loaded.graph)?
        }
    };

    Ok(Solution {
        strategy,
        header,
        tree,
    })
}

/// Maps `path` and solves it. The mapping is released before returning,
/// whatever the outcome.
pub fn solve_file<P: WeightParser>(
    path: impl AsRef<Path>,
    algorithm: Algorithm,
    storage: MatrixStorage,
) -> Result<Solution<P::Weight>> {
    let file = GraphFile::open(path)?;
    solve_bytes::<P>(file.bytes(), algorithm, storage)
}

fn full_sort<P: WeightParser, D: DisjointSets>(bytes: &[u8]) -> Result<SpanningTree<P::Weight>> {
    let mut loaded = parse_graph::<EdgeList<P::Weight>, P>(bytes)?;
    kruskal_full_sort::<D, _>(&mut loaded.graph, loaded.header.vertex_count)
}

fn partial_sort<P: WeightParser, D: DisjointSets>(
    bytes: &[u8],
) -> Result<SpanningTree<P::Weight>> {
    let mut loaded = parse_graph::<EdgeHeap<P::Weight>, P>(bytes)?;
    kruskal_partial_sort::<D, _>(&mut loaded.graph, loaded.header.vertex_count)
}

fn dense<P: WeightParser, L: MatrixLayout>(bytes: &[u8]) -> Result<SpanningTree<P::Weight>> {
    debug!(storage = L::STORAGE.label(), "dense matrix");
    let loaded = parse_graph::<AdjacencyMatrix<P::Weight, L>, P>(bytes)?;
    prim_dense(&loaded.graph)
}

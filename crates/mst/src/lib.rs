mod error;
mod heap;
mod kruskal;
mod loader;
mod prim;
mod selector;
mod solve;
mod tree;
mod union_find;

pub mod generator;
pub mod graph;
pub mod lexer;
pub mod weight;

pub use error::Error;
pub use error::Result;
pub use graph::AdjacencyList;
pub use graph::AdjacencyMatrix;
pub use graph::Edge;
pub use graph::EdgeList;
pub use graph::MatrixStorage;
pub use graph::Representation;
pub use heap::EdgeHeap;
pub use heap::VertexHeap;
pub use kruskal::kruskal_full_sort;
pub use kruskal::kruskal_partial_sort;
pub use loader::GraphFile;
pub use loader::Header;
pub use loader::LoadedGraph;
pub use loader::parse_graph;
pub use loader::parse_header;
pub use prim::ROOT;
pub use prim::prim_dense;
pub use prim::prim_heap;
pub use selector::DENSE_PACKING;
pub use selector::density;
pub use selector::packing_ratio;
pub use selector::select;
pub use solve::ALL_STRATEGIES;
pub use solve::Algorithm;
pub use solve::Solution;
pub use solve::Strategy;
pub use solve::solve_bytes;
pub use solve::solve_file;
pub use tree::SpanningTree;
pub use union_find::DisjointSets;
pub use union_find::ExplicitSets;
pub use union_find::ImplicitSets;
pub use weight::Decimal;
pub use weight::FixedPoint;
pub use weight::Integer;
pub use weight::Weight;
pub use weight::WeightParser;

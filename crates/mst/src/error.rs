use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by loading an input graph or computing its spanning tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or stat'ed.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file was opened but could not be memory-mapped.
    #[error("cannot map {}: {source}", path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input ended while a token was still expected.
    #[error("unexpected end of input at byte {offset}: expected {expected}")]
    UnexpectedEof {
        offset: usize,
        expected: &'static str,
    },

    /// A numeric token has more digits than the power table covers.
    #[error("numeric token at byte {offset} has {digits} digits")]
    TokenTooLong { offset: usize, digits: usize },

    /// The declared vertex count does not fit a 32-bit vertex id.
    #[error("vertex count {vertex_count} exceeds the 32-bit vertex id space")]
    TooManyVertices { vertex_count: u64 },

    /// An edge record names a vertex outside `0..vertex_count`.
    #[error("edge record {record} names vertex {vertex}, but the graph has {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: u64,
        vertex_count: usize,
        record: usize,
    },

    /// An integer weight does not fit below the "no edge" sentinel.
    #[error("edge weight at byte {offset} is out of range")]
    WeightOutOfRange { offset: usize },

    /// A weight sum does not fit the weight type.
    #[error("weight sum overflows after {edges} edges")]
    WeightOverflow { edges: usize },

    /// The graph has no spanning tree.
    #[error("graph is disconnected: spanning forest has {accepted} of {required} tree edges")]
    Disconnected { accepted: usize, required: usize },

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("unknown matrix storage: {0}")]
    UnknownStorage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Single-pass loading of the text graph format
//!
//! ```text
//! n
//! m
//! u v weight      (m records)
//! ```
//!
//! straight from a read-only memory map into one representation.

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use memmap2::Mmap;
use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::graph::Representation;
use crate::lexer::Cursor;
use crate::weight::WeightParser;

/// Shortest possible edge record: `"0 0 0\n"`.
const MIN_RECORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Header {
    pub vertex_count: usize,
    pub edge_count: usize,
}

#[derive(Clone, Debug)]
pub struct LoadedGraph<R> {
    pub header: Header,
    pub graph: R,
}

fn read_header(cursor: &mut Cursor<'_>) -> Result<Header> {
    let vertex_count = cursor.integer(b'\n', "vertex count")?;
    if vertex_count > u64::from(u32::MAX) {
        return Err(Error::TooManyVertices { vertex_count });
    }
    let edge_count = cursor.integer(b'\n', "edge count")?;
    Ok(Header {
        vertex_count: vertex_count as usize,
        edge_count: edge_count as usize,
    })
}

/// Reads only the two header lines.
pub fn parse_header(bytes: &[u8]) -> Result<Header> {
    read_header(&mut Cursor::new(bytes))
}

#[inline]
fn read_vertex(cursor: &mut Cursor<'_>, vertex_count: usize, record: usize) -> Result<u32> {
    let vertex = cursor.integer(b' ', "vertex id")?;
    if vertex >= vertex_count as u64 {
        return Err(Error::VertexOutOfRange {
            vertex,
            vertex_count,
            record,
        });
    }
    Ok(vertex as u32)
}

/// Parses a whole input into `R`, lexing weights with `P`.
///
/// Bytes after the `m`-th record are never looked at.
pub fn parse_graph<R, P>(bytes: &[u8]) -> Result<LoadedGraph<R>>
where
    P: WeightParser,
    R: Representation<P::Weight>,
{
    let mut cursor = Cursor::new(bytes);
    let header = read_header(&mut cursor)?;
    let Header {
        vertex_count,
        edge_count,
    } = header;

    let capacity = edge_count.min(cursor.rest().len() / MIN_RECORD_LEN);
    let mut graph = R::allocate(vertex_count, capacity);
    debug!(
        vertex_count,
        edge_count,
        representation = R::KIND.label(),
        weights = P::NAME,
        "loading graph"
    );

    for record in 0..edge_count {
        let u = read_vertex(&mut cursor, vertex_count, record)?;
        let v = read_vertex(&mut cursor, vertex_count, record)?;
        let weight = P::parse(&mut cursor)?;
        graph.add_edge(u, v, weight);
    }

    Ok(LoadedGraph { header, graph })
}

/// A read-only mapping of an input file.
///
/// The file descriptor is closed once the map exists; the map itself is
/// released when this value is dropped.
#[derive(Debug)]
pub struct GraphFile {
    path: PathBuf,
    map: Option<Mmap>,
}

impl GraphFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        let len = file
            .metadata()
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?
            .len();

        // Zero-length mappings are rejected by the OS; an empty input simply
        // has no bytes.
        if len == 0 {
            debug!(path = %path.display(), "empty input");
            return Ok(Self { path, map: None });
        }

        // SAFETY: the map is read-only and only ever viewed as `&[u8]`; the
        // input is not expected to change while a run parses it.
        let map = unsafe { Mmap::map(&file) }.map_err(|source| Error::Map {
            path: path.clone(),
            source,
        })?;

        #[cfg(unix)]
        if let Err(err) = map.advise(memmap2::Advice::Sequential) {
            debug!(%err, "sequential access advice rejected");
        }

        debug!(path = %path.display(), bytes = len, "mapped input");
        Ok(Self {
            path,
            map: Some(map),
        })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    pub fn header(&self) -> Result<Header> {
        parse_header(self.bytes())
    }

    pub fn load<R, P>(&self) -> Result<LoadedGraph<R>>
    where
        P: WeightParser,
        R: Representation<P::Weight>,
    {
        parse_graph::<R, P>(self.bytes())
    }
}

//! Binary min-heaps keyed by weight.
//!
//! `EdgeHeap` is 1-indexed with slot 0 left as a sentinel, so
//! `parent(i) = i / 2` and the children of `i` are `2i` and `2i + 1`.
//! `VertexHeap` is 0-indexed and tracks each vertex's slot for decrease-key.

use crate::graph::Edge;
use crate::graph::Representation;
use crate::graph::RepresentationKind;
use crate::weight::Weight;

/// Heap-ordered edge array.
///
/// Invariant: for every slot `i >= 2`, `weight(i / 2) <= weight(i)`. It holds
/// after every `insert`, so the minimum can be drawn while the heap is still
/// being filled.
#[derive(Clone, Debug)]
pub struct EdgeHeap<W> {
    slots: Vec<Edge<W>>,
}

impl<W: Weight> EdgeHeap<W> {
    pub fn with_capacity(edge_count: usize) -> Self {
        let mut slots = Vec::with_capacity(edge_count + 1);
        slots.push(Edge::default());
        Self { slots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn peek_min(&self) -> Option<&Edge<W>> {
        self.slots.get(1)
    }

    pub fn insert(&mut self, edge: Edge<W>) {
        self.slots.push(edge);
        let last = self.len();
        self.sift_up(last);
    }

    pub fn extract_min(&mut self) -> Option<Edge<W>> {
        let last = self.len();
        if last == 0 {
            return None;
        }
        self.slots.swap(1, last);
        let min = self.slots.pop();
        if self.len() > 1 {
            self.sift_down(1);
        }
        min
    }

    pub fn is_heap(&self) -> bool {
        (2..=self.len()).all(|i| !self.slots[i].weight.less_than(self.slots[i / 2].weight))
    }

    #[inline]
    fn sift_up(&mut self, mut i: usize) {
        while i > 1 {
            let parent = i / 2;
            if !self.slots[i].weight.less_than(self.slots[parent].weight) {
                break;
            }
            self.slots.swap(i, parent);
            i = parent;
        }
    }

    #[inline]
    fn sift_down(&mut self, mut i: usize) {
        let len = self.len();
        loop {
            let left = 2 * i;
            if left > len {
                break;
            }
            let mut child = left;
            if left < len && self.slots[left + 1].weight.less_than(self.slots[left].weight) {
                child = left + 1;
            }
            if !self.slots[child].weight.less_than(self.slots[i].weight) {
                break;
            }
            self.slots.swap(i, child);
            i = child;
        }
    }
}

impl<W: Weight> Representation<W> for EdgeHeap<W> {
    const KIND: RepresentationKind = RepresentationKind::HeapOrderedEdgeList;

    fn allocate(_vertex_count: usize, edge_count: usize) -> Self {
        Self::with_capacity(edge_count)
    }

    #[inline]
    fn add_edge(&mut self, u: u32, v: u32, weight: W) {
        self.insert(Edge::new(u, v, weight));
    }
}

const ABSENT: usize = usize::MAX;

/// Indexed min-heap of vertices keyed by their best known connecting weight.
#[derive(Clone, Debug)]
pub struct VertexHeap<W> {
    heap: Vec<u32>,
    position: Vec<usize>,
    key: Vec<W>,
}

impl<W: Weight> VertexHeap<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            heap: Vec::with_capacity(vertex_count),
            position: vec![ABSENT; vertex_count],
            key: vec![W::INFINITY; vertex_count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, v: u32) -> bool {
        self.position[v as usize] != ABSENT
    }

    /// Inserts `v` with `key`, or lowers its key if `key` is smaller.
    ///
    /// Returns whether the stored key changed.
    pub fn push_or_decrease(&mut self, v: u32, key: W) -> bool {
        let idx = v as usize;
        let pos = self.position[idx];
        if pos == ABSENT {
            self.key[idx] = key;
            self.position[idx] = self.heap.len();
            self.heap.push(v);
            self.sift_up(self.heap.len() - 1);
            return true;
        }
        if !key.less_than(self.key[idx]) {
            return false;
        }
        self.key[idx] = key;
        self.sift_up(pos);
        true
    }

    pub fn extract_min(&mut self) -> Option<(u32, W)> {
        let top = *self.heap.first()?;
        let last = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.position[last as usize] = 0;
            self.sift_down(0);
        }
        self.position[top as usize] = ABSENT;
        Some((top, self.key[top as usize]))
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.key[self.heap[a] as usize].less_than(self.key[self.heap[b] as usize])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a] as usize] = a;
        self.position[self.heap[b] as usize] = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let mut child = left;
            if left + 1 < len && self.less(left + 1, left) {
                child = left + 1;
            }
            if !self.less(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }
}

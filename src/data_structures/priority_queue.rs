use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::data_structures::Frontier;

/// A binary-heap frontier with O(log k) `push` and `pop_min`
///
/// Entries carry an insertion sequence number so that ties on distance break in
/// insertion order.
#[derive(Debug)]
pub struct BinaryHeapFrontier<W>
where
    W: Float + Debug + Copy,
{
    /// The underlying binary heap, keyed by (distance, sequence)
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, u64, usize)>>,

    /// Sequence number handed to the next pushed entry
    next_seq: u64,
}

impl<W> BinaryHeapFrontier<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        BinaryHeapFrontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapFrontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap
            .peek()
            .map(|Reverse((distance, _, vertex))| (*vertex, distance.into_inner()))
    }
}

impl<W> Default for BinaryHeapFrontier<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Frontier<W> for BinaryHeapFrontier<W>
where
    W: Float + Debug + Copy,
{
    fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((OrderedFloat(distance), self.next_seq, vertex)));
        self.next_seq += 1;
    }

    fn pop_min(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((distance, _, vertex))| (vertex, distance.into_inner()))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::data_structures::Frontier;

/// An insertion-sorted list frontier.
///
/// `push` is O(k) because it shifts entries to keep the list ordered; `pop_min`
/// takes the front in O(1). Only suitable for small graphs, but its behavior is
/// easy to audit so it doubles as a reference for the heap frontier.
#[derive(Debug)]
pub struct SortedListFrontier<W>
where
    W: Float + Debug + Copy,
{
    items: VecDeque<(usize, W)>,
}

impl<W> SortedListFrontier<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        SortedListFrontier {
            items: VecDeque::new(),
        }
    }
}

impl<W> Default for SortedListFrontier<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Frontier<W> for SortedListFrontier<W>
where
    W: Float + Debug + Copy,
{
    fn push(&mut self, vertex: usize, distance: W) {
        // New entries go after every entry with an equal distance
        let key = OrderedFloat(distance);
        let idx = self.items.partition_point(|(_, d)| OrderedFloat(*d) <= key);
        self.items.insert(idx, (vertex, distance));
    }

    fn pop_min(&mut self) -> Option<(usize, W)> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

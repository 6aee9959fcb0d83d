use num_traits::Float;
use std::fmt::Debug;

use crate::{Error, Result};

/// A multiset of `(vertex, distance)` candidates ordered by ascending distance.
///
/// The same vertex may be held several times with different distances; callers
/// filter stale entries when they extract them. Entries with equal distance come
/// out in insertion order.
pub trait Frontier<W>: Default + Debug
where
    W: Float + Debug + Copy,
{
    /// Inserts a candidate entry
    fn push(&mut self, vertex: usize, distance: W);

    /// Removes and returns an entry with the smallest distance, or `None` when empty
    fn pop_min(&mut self) -> Option<(usize, W)>;

    /// Returns the number of entries currently held, duplicates included
    fn len(&self) -> usize;

    /// Returns true if no entries remain
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry
    fn clear(&mut self);

    /// Like `pop_min`, but reports an empty frontier as [`Error::EmptyFrontier`]
    fn try_pop_min(&mut self) -> Result<(usize, W)> {
        self.pop_min().ok_or(Error::EmptyFrontier)
    }
}

//! Implementation of [`MergeIter`], the lazy k-way merge of sorted sequences.
//!
//! Every source has to be sorted by the same criteria the merge is configured with. The merge
//! holds exactly one pending item per live source, so any number of sources (including
//! infinite ones) can be merged and any prefix of the output is available without exhausting
//! an input. Items that tie under every criterion are yielded in the order of their sources.
//!
//! ```
//! use heap_select::merge_by;
//!
//! let merged = merge_by([vec![1, 3, 5, 7], vec![2, 4, 6, 8], vec![-1, 11]], |&n| n);
//! assert!(merged.build().eq([-1, 1, 2, 3, 4, 5, 6, 7, 8, 11]));
//! ```
//!
//! Two sources can be merged without the heap with [`merge_two_by`](crate::merge_two_by).

use alloc::vec::Vec;
use core::{cmp::Ordering, fmt, iter::FusedIterator};

use crate::{
    criteria::{Criteria, ThenBy},
    internal::{PeekIter, Slots, heapify, sift_down},
};

pub mod two_way;
pub use two_way::{MergeTwoBy, MergeTwoIter};

/// Builder for [`MergeIter`]
///
/// Created by [`merge_by`](crate::merge_by) and friends. Add tie-break keys with [`ThenBy`],
/// then call [`build`](Self::build) or iterate over it directly.
#[derive(Debug)]
pub struct MergeBy<'a, S, T> {
    sources: S,
    criteria: Criteria<'a, T>,
}

impl<'a, S, T> MergeBy<'a, S, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
{
    #[inline]
    pub(crate) const fn new(sources: S, criteria: Criteria<'a, T>) -> Self {
        Self { sources, criteria }
    }

    /// Pulls the first item of every source and builds the [`MergeIter`].
    ///
    /// Sources that are empty are dropped right away.
    pub fn build(self) -> MergeIter<'a, <S::Item as IntoIterator>::IntoIter> {
        let Self {
            sources,
            mut criteria,
        } = self;
        let sources = sources.into_iter();
        let mut cursors = Vec::with_capacity(sources.size_hint().0);
        let mut indices = Vec::with_capacity(sources.size_hint().0);
        for (index, source) in sources.enumerate() {
            if let Some(cursor) = PeekIter::new_from_iter(source) {
                criteria.extract(&cursor.item, cursors.len());
                cursors.push(cursor);
                indices.push(index);
            }
        }
        tracing::debug!(sources = cursors.len(), "starting k-way merge");

        let mut merge = MergeIter {
            cursors,
            indices,
            criteria,
        };
        let len = merge.cursors.len();
        heapify(&mut merge, len);
        merge
    }
}

impl<'a, S, T: 'a> ThenBy<'a, T> for MergeBy<'a, S, T> {
    #[inline]
    fn criteria_mut(&mut self) -> &mut Criteria<'a, T> {
        &mut self.criteria
    }
}

impl<'a, S, T> IntoIterator for MergeBy<'a, S, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = MergeIter<'a, <S::Item as IntoIterator>::IntoIter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.build()
    }
}

/// Iterator over merged sequences
///
/// Cursors live in a binary heap; slot `i` of the heap is `cursors[i]`, the source index
/// `indices[i]` and the cached keys at slot `i` of the criteria.
pub struct MergeIter<'a, IT: Iterator> {
    cursors: Vec<PeekIter<IT>>,
    indices: Vec<usize>,
    criteria: Criteria<'a, IT::Item>,
}

impl<IT: Iterator> Slots for MergeIter<'_, IT> {
    #[inline]
    fn compare(&self, x: usize, y: usize) -> Ordering {
        self.criteria
            .compare(x, y)
            .then_with(|| self.indices[x].cmp(&self.indices[y]))
    }

    #[inline]
    fn swap(&mut self, x: usize, y: usize) {
        self.cursors.swap(x, y);
        self.indices.swap(x, y);
        self.criteria.swap(x, y);
    }
}

impl<IT: Iterator> MergeIter<'_, IT> {
    /// Returns a reference to the next item that will be returned by `next()` without
    /// consuming it.
    ///
    /// ```
    /// use heap_select::merge_by;
    ///
    /// let mut merged = merge_by([[1, 3, 5], [2, 4, 6]], |&n| n).build();
    /// assert_eq!(merged.peek(), Some(&1));
    /// assert_eq!(merged.next(), Some(1));
    /// assert_eq!(merged.peek(), Some(&2));
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&IT::Item> {
        self.cursors.first().map(|cursor| &cursor.item)
    }

    /// Returns the next item if it satisfies a predicate, like
    /// [`Peekable::next_if`](core::iter::Peekable::next_if).
    pub fn next_if(&mut self, func: impl FnOnce(&IT::Item) -> bool) -> Option<IT::Item> {
        match self.peek() {
            Some(item) if func(item) => self.next(),
            _ => None,
        }
    }

    /// Returns the next item if it is equal to `expected`.
    pub fn next_if_eq<T>(&mut self, expected: &T) -> Option<IT::Item>
    where
        T: ?Sized,
        IT::Item: PartialEq<T>,
    {
        self.next_if(|item| item == expected)
    }

    /// Number of sources that still have items.
    #[inline]
    pub fn live_sources(&self) -> usize {
        self.cursors.len()
    }
}

impl<IT: Iterator> Iterator for MergeIter<'_, IT> {
    type Item = IT::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.cursors.first_mut()?;
        if let Some(item) = root.advance() {
            self.criteria.extract(&root.item, 0);
            let len = self.cursors.len();
            sift_down(self, 0, len);
            return Some(item);
        }
        // root source is exhausted, its last item leaves together with the cursor
        let last = self.cursors.len() - 1;
        Slots::swap(self, 0, last);
        self.indices.pop();
        let cursor = self.cursors.pop()?;
        sift_down(self, 0, last);
        Some(cursor.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // this accounts for peeked items
        let mut min = self.cursors.len();
        let mut max = Some(min);
        for cursor in &self.cursors {
            let (it_min, it_max) = cursor.iter.size_hint();
            min = min.saturating_add(it_min);
            max = max.zip(it_max).and_then(|(max, it_max)| max.checked_add(it_max));
        }
        (min, max)
    }
}

// Cursors are dropped after their source returns `None` and never pulled again
impl<IT: Iterator> FusedIterator for MergeIter<'_, IT> {}

impl<IT> fmt::Debug for MergeIter<'_, IT>
where
    IT: Iterator + fmt::Debug,
    IT::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeIter")
            .field("cursors", &self.cursors)
            .field("indices", &self.indices)
            .field("criteria", &self.criteria)
            .finish()
    }
}

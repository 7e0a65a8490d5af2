//! Merge of exactly two sorted sequences, without the heap.

use core::{
    fmt,
    iter::{Fuse, FusedIterator},
    mem,
};

use crate::criteria::{Criteria, ThenBy};

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// Builder for [`MergeTwoIter`]
///
/// Created by [`merge_two_by`](crate::merge_two_by) and friends.
#[derive(Debug)]
pub struct MergeTwoBy<'a, L, R, T> {
    left: L,
    right: R,
    criteria: Criteria<'a, T>,
}

impl<'a, L, R, T> MergeTwoBy<'a, L, R, T>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
{
    #[inline]
    pub(crate) const fn new(left: L, right: R, criteria: Criteria<'a, T>) -> Self {
        Self {
            left,
            right,
            criteria,
        }
    }

    /// Pulls the first item of both sides and builds the [`MergeTwoIter`].
    pub fn build(self) -> MergeTwoIter<'a, L::IntoIter, R::IntoIter> {
        let Self {
            left,
            right,
            mut criteria,
        } = self;
        let mut left = left.into_iter().fuse();
        let mut right = right.into_iter().fuse();
        let pending = [left.next(), right.next()];
        // keys only matter while both sides have items
        if let [Some(l), Some(r)] = &pending {
            criteria.extract(l, LEFT);
            criteria.extract(r, RIGHT);
        }
        MergeTwoIter {
            left,
            right,
            pending,
            criteria,
        }
    }
}

impl<'a, L, R, T: 'a> ThenBy<'a, T> for MergeTwoBy<'a, L, R, T> {
    #[inline]
    fn criteria_mut(&mut self) -> &mut Criteria<'a, T> {
        &mut self.criteria
    }
}

impl<'a, L, R, T> IntoIterator for MergeTwoBy<'a, L, R, T>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = MergeTwoIter<'a, L::IntoIter, R::IntoIter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.build()
    }
}

/// Iterator over two merged sequences
///
/// Yields the same items in the same order as [`MergeIter`](super::MergeIter) over the two
/// sequences: the left item wins ties, and once a side runs out the other one is passed
/// through without comparing.
pub struct MergeTwoIter<'a, L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    left: Fuse<L>,
    right: Fuse<R>,
    pending: [Option<L::Item>; 2],
    criteria: Criteria<'a, L::Item>,
}

impl<L, R> MergeTwoIter<'_, L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    /// Returns a reference to the next item that will be returned by `next()` without
    /// consuming it.
    pub fn peek(&self) -> Option<&L::Item> {
        match &self.pending {
            [Some(_), Some(r)] if self.criteria.compare(LEFT, RIGHT).is_gt() => Some(r),
            [Some(l), _] => Some(l),
            [None, r] => r.as_ref(),
        }
    }

    fn advance(&mut self, side: usize) -> Option<L::Item> {
        let next = if side == LEFT {
            self.left.next()
        } else {
            self.right.next()
        };
        if let (Some(item), Some(_)) = (&next, &self.pending[side ^ 1]) {
            self.criteria.extract(item, side);
        }
        mem::replace(&mut self.pending[side], next)
    }
}

impl<L, R> Iterator for MergeTwoIter<'_, L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &self.pending {
            [Some(_), Some(_)] => {
                if self.criteria.compare(LEFT, RIGHT).is_gt() {
                    self.advance(RIGHT)
                } else {
                    self.advance(LEFT)
                }
            }
            [Some(_), None] => self.advance(LEFT),
            [None, Some(_)] => self.advance(RIGHT),
            [None, None] => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending.iter().flatten().count();
        let (l_min, l_max) = self.left.size_hint();
        let (r_min, r_max) = self.right.size_hint();
        let min = pending.saturating_add(l_min).saturating_add(r_min);
        let max = l_max
            .zip(r_max)
            .and_then(|(l, r)| l.checked_add(r))
            .and_then(|max| max.checked_add(pending));
        (min, max)
    }
}

impl<L, R> FusedIterator for MergeTwoIter<'_, L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
}

impl<L, R> fmt::Debug for MergeTwoIter<'_, L, R>
where
    L: Iterator + fmt::Debug,
    R: Iterator<Item = L::Item> + fmt::Debug,
    L::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeTwoIter")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("pending", &self.pending)
            .field("criteria", &self.criteria)
            .finish()
    }
}

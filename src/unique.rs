//! Implementation of [`UniqueIter`], removal of adjacent duplicates from a sorted sequence.
//!
//! Only two key slots are used, one for the last yielded item and one for the candidate; they
//! swap roles every time an item is yielded. Equal items that are not next to each other are
//! all yielded: the source is expected to be sorted by the same criteria, which is not
//! checked.
//!
//! ```
//! use heap_select::unique_by;
//!
//! let unique = unique_by([1, 1, 2, 3, 3, 3, 4], |&n| n).build();
//! assert!(unique.eq([1, 2, 3, 4]));
//! ```

use core::{
    fmt,
    iter::{Fuse, FusedIterator},
};

use crate::criteria::{Criteria, ThenBy};

/// Builder for [`UniqueIter`]
///
/// Created by [`unique_by`](crate::unique_by) and friends.
#[derive(Debug)]
pub struct UniqueBy<'a, I, T> {
    source: I,
    criteria: Criteria<'a, T>,
}

impl<'a, I, T> UniqueBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
{
    #[inline]
    pub(crate) const fn new(source: I, criteria: Criteria<'a, T>) -> Self {
        Self { source, criteria }
    }

    /// Builds the [`UniqueIter`].
    #[inline]
    pub fn build(self) -> UniqueIter<'a, I::IntoIter> {
        UniqueIter {
            source: self.source.into_iter().fuse(),
            criteria: self.criteria,
            last: None,
        }
    }
}

impl<'a, I, T: 'a> ThenBy<'a, T> for UniqueBy<'a, I, T> {
    #[inline]
    fn criteria_mut(&mut self) -> &mut Criteria<'a, T> {
        &mut self.criteria
    }
}

impl<'a, I, T> IntoIterator for UniqueBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = UniqueIter<'a, I::IntoIter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.build()
    }
}

/// Iterator over a sorted sequence with adjacent duplicates removed
pub struct UniqueIter<'a, IT: Iterator> {
    source: Fuse<IT>,
    criteria: Criteria<'a, IT::Item>,
    /// Key slot of the last yielded item, `None` before the first one
    last: Option<usize>,
}

impl<IT: Iterator> Iterator for UniqueIter<'_, IT> {
    type Item = IT::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(last) = self.last else {
            let item = self.source.next()?;
            self.criteria.extract(&item, 0);
            self.last = Some(0);
            return Some(item);
        };
        let slot = last ^ 1;
        for item in self.source.by_ref() {
            self.criteria.extract(&item, slot);
            if self.criteria.compare(slot, last).is_ne() {
                self.last = Some(slot);
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.source.size_hint();
        // anything after the first item may turn out to be a duplicate
        match self.last {
            None => (lo.min(1), hi),
            Some(_) => (0, hi),
        }
    }
}

impl<IT: Iterator> FusedIterator for UniqueIter<'_, IT> {}

impl<IT> fmt::Debug for UniqueIter<'_, IT>
where
    IT: Iterator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueIter")
            .field("source", &self.source)
            .field("criteria", &self.criteria)
            .field("last", &self.last)
            .finish()
    }
}

//! Implementation of [`TopIter`], bounded top-N selection.
//!
//! The selection keeps the best `count` items seen so far in a binary heap whose root is the
//! worst of them. Each further item is compared against the root, extracting its keys one
//! criterion at a time, and replaces the root only if it ranks higher. At most `count`
//! items and `count + 1` key slots are held at any time, regardless of the input length.
//!
//! Items that tie under every criterion are ranked by arrival: the earlier one wins.
//!
//! ```
//! use heap_select::top_by;
//!
//! let top = top_by([3, 1, 4, 1, 5, 9, 2, 6], 3, |&n| n).build();
//! assert!(top.eq([9, 6, 5]));
//! ```

use alloc::vec::{self, Vec};
use core::{cmp::Ordering, fmt, iter::FusedIterator};

use crate::{
    criteria::{ArrivalOrder, Criteria, ThenBy},
    internal::{Slots, heapify, sift_down},
};

/// Builder for [`TopIter`]
///
/// Created by [`top_by`](crate::top_by) and friends. Tie-break keys added with [`ThenBy`]
/// follow the same convention as the primary key: `then_by` ranks larger keys higher,
/// `then_by_descending` ranks smaller keys higher.
#[derive(Debug)]
pub struct TopBy<'a, I, T> {
    source: I,
    count: usize,
    criteria: Criteria<'a, T>,
}

impl<'a, I, T> TopBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
{
    #[inline]
    pub(crate) const fn new(source: I, count: usize, criteria: Criteria<'a, T>) -> Self {
        Self {
            source,
            count,
            criteria,
        }
    }

    /// Builds the [`TopIter`].
    ///
    /// Nothing is pulled from the source until the first call to `next()`.
    pub fn build(self) -> TopIter<'a, I::IntoIter> {
        let Self {
            source,
            count,
            mut criteria,
        } = self;
        criteria.push(ArrivalOrder::default());
        TopIter {
            source: Some(source.into_iter()),
            count,
            criteria,
            sorted: Vec::new().into_iter(),
        }
    }
}

impl<'a, I, T: 'a> ThenBy<'a, T> for TopBy<'a, I, T> {
    #[inline]
    fn criteria_mut(&mut self) -> &mut Criteria<'a, T> {
        &mut self.criteria
    }
}

impl<'a, I, T> IntoIterator for TopBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
{
    type Item = T;
    type IntoIter = TopIter<'a, I::IntoIter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.build()
    }
}

/// Iterator over the best `count` items of a sequence, best first
///
/// The whole source is consumed by the first call to `next()`, so an infinite source never
/// yields anything.
pub struct TopIter<'a, IT: Iterator> {
    source: Option<IT>,
    count: usize,
    criteria: Criteria<'a, IT::Item>,
    sorted: vec::IntoIter<IT::Item>,
}

/// Retained items and their key slots, with the worst item at the root.
struct Retained<'r, 'a, T> {
    items: &'r mut Vec<T>,
    criteria: &'r mut Criteria<'a, T>,
}

impl<T> Slots for Retained<'_, '_, T> {
    #[inline]
    fn compare(&self, x: usize, y: usize) -> Ordering {
        self.criteria.compare(x, y)
    }

    #[inline]
    fn swap(&mut self, x: usize, y: usize) {
        self.items.swap(x, y);
        self.criteria.swap(x, y);
    }
}

/// Consumes `source`, returning its best `count` items, best first.
fn select<IT: Iterator>(
    mut source: IT, count: usize, criteria: &mut Criteria<'_, IT::Item>,
) -> Vec<IT::Item> {
    let mut items = Vec::new();
    if count == 0 {
        return items;
    }
    for item in source.by_ref().take(count) {
        criteria.extract(&item, items.len());
        items.push(item);
    }
    let len = items.len();
    let mut scanned = len;
    let mut retained = Retained {
        items: &mut items,
        criteria,
    };
    heapify(&mut retained, len);

    // a short source has already returned `None`
    if len == count {
        for item in source {
            scanned += 1;
            // slot `count` is the spare one
            if retained.criteria.extract_and_compare(&item, count, 0).is_gt() {
                retained.items[0] = item;
                retained.criteria.swap(0, count);
                sift_down(&mut retained, 0, count);
            }
        }
    }

    // in-place heap sort, the worst items end up at the back
    for end in (1..len).rev() {
        retained.swap(0, end);
        sift_down(&mut retained, 0, end);
    }
    tracing::debug!(retained = len, scanned, "top-n selection complete");
    items
}

impl<IT: Iterator> Iterator for TopIter<'_, IT> {
    type Item = IT::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            self.sorted = select(source, self.count, &mut self.criteria).into_iter();
        }
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => {
                let (lo, hi) = source.size_hint();
                let hi = hi.map_or(self.count, |hi| hi.min(self.count));
                (lo.min(self.count), Some(hi))
            }
            None => self.sorted.size_hint(),
        }
    }
}

impl<IT: Iterator> FusedIterator for TopIter<'_, IT> {}

impl<IT> fmt::Debug for TopIter<'_, IT>
where
    IT: Iterator + fmt::Debug,
    IT::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopIter")
            .field("source", &self.source)
            .field("count", &self.count)
            .field("sorted", &self.sorted)
            .field("criteria", &self.criteria)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec, vec::Vec};
    use core::{cell::Cell, iter};

    use crate::{ThenBy, comparators::ByFunc, top_by, top_by_descending, top_by_with};

    #[test]
    fn picks_largest() {
        let top = top_by([3, 1, 4, 1, 5, 9, 2, 6], 3, |&n| n)
            .build()
            .collect::<Vec<_>>();
        assert_eq!(top, vec![9, 6, 5]);
    }

    #[test]
    fn descending_picks_smallest() {
        let top = top_by_descending([3, 1, 4, 1, 5, 9, 2, 6], 4, |&n| n)
            .build()
            .collect::<Vec<_>>();
        assert_eq!(top, vec![1, 1, 2, 3]);
    }

    #[test]
    fn count_above_len_sorts_everything() {
        let top = top_by(vec![2, 7, 1], 10, |&n| n).build().collect::<Vec<_>>();
        assert_eq!(top, vec![7, 2, 1]);
        assert_eq!(top_by(Vec::<i32>::new(), 3, |&n| n).build().next(), None);
    }

    #[test]
    fn zero_count_does_not_pull() {
        let source = iter::from_fn(|| -> Option<i32> { panic!("source was pulled") });
        let mut top = top_by(source, 0, |&n| n).build();
        assert_eq!(top.size_hint(), (0, Some(0)));
        assert_eq!(top.next(), None);
        assert_eq!(top.next(), None);
    }

    #[test]
    fn ties_prefer_earlier_items() {
        let items = [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd'), (2, 'e')];
        let top = top_by(items, 3, |&(n, _)| n).build().collect::<Vec<_>>();
        assert_eq!(top, vec![(2, 'b'), (2, 'd'), (2, 'e')]);
        let top = top_by(items, 4, |&(n, _)| n).build().collect::<Vec<_>>();
        assert_eq!(top, vec![(2, 'b'), (2, 'd'), (2, 'e'), (1, 'a')]);
    }

    #[test]
    fn tie_break_keys() {
        let items = [(1, 3), (2, 1), (2, 5), (1, 9), (2, 3)];
        let top = top_by(items, 3, |&(a, _)| a)
            .then_by(|&(_, b)| b)
            .build()
            .collect::<Vec<_>>();
        assert_eq!(top, vec![(2, 5), (2, 3), (2, 1)]);
        let top = top_by(items, 3, |&(a, _)| a)
            .then_by_descending(|&(_, b)| b)
            .build()
            .collect::<Vec<_>>();
        assert_eq!(top, vec![(2, 1), (2, 3), (2, 5)]);
    }

    #[test]
    fn lazy_key_extraction() {
        let calls = Cell::new(0);
        let items = [(5, 0), (6, 0), (1, 0), (2, 0), (3, 0)];
        let top = top_by(items, 2, |&(a, _)| a)
            .then_by(|&(_, b)| {
                calls.set(calls.get() + 1);
                b
            })
            .build()
            .collect::<Vec<_>>();
        assert_eq!(top, vec![(6, 0), (5, 0)]);
        // only the two retained items needed the secondary key
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn custom_comparator() {
        let words = ["pear", "Apple", "fig", "banana"];
        let ignore_case = ByFunc(|a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase()));
        let top = top_by_with(words, 2, |w: &&str| *w, ignore_case)
            .build()
            .collect::<Vec<_>>();
        assert_eq!(top, vec!["pear", "fig"]);
    }

    #[test]
    fn lazy_until_pulled() {
        let pulled = Cell::new(0);
        let source = (0..10).inspect(|_| pulled.set(pulled.get() + 1));
        let mut top = top_by(source, 2, |&n| n).build();
        assert_eq!(top.size_hint(), (2, Some(2)));
        assert_eq!(pulled.get(), 0);
        assert_eq!(top.next(), Some(9));
        assert_eq!(pulled.get(), 10);
        assert_eq!(top.size_hint(), (1, Some(1)));
        assert!(format!("{top:?}").contains("TopIter"));
    }
}

//! Multi-key ordering criteria with positional key caches.
//!
//! A [`Criterion`] extracts a key from an element, caches it in a numbered slot and
//! compares cached keys by slot. The slots mirror the positions of whatever structure the
//! criterion backs (a heap of merge cursors, the retained items of a top-N selection, the two
//! rolling positions of a dedup), so the algorithms can compare and move elements without
//! re-running key extraction.
//!
//! [`Criteria`] is the flat chain of criteria, most significant first. The builders of
//! [`merge`](crate::merge), [`top`](crate::top) and [`unique`](crate::unique) grow it through
//! the [`ThenBy`] trait:
//!
//! ```
//! use heap_select::{ThenBy, merge_by};
//!
//! let a = [(1, 'b'), (2, 'a')];
//! let b = [(1, 'a'), (2, 'b')];
//! let merged = merge_by([a, b], |&(n, _)| n)
//!     .then_by_descending(|&(_, c)| c)
//!     .build()
//!     .collect::<Vec<_>>();
//! assert_eq!(merged, [(1, 'b'), (1, 'a'), (2, 'b'), (2, 'a')]);
//! ```

use alloc::{boxed::Box, vec::Vec};
use core::{cmp::Ordering, fmt, marker::PhantomData};

use crate::comparators::{ByOrd, Comparator};

/// One unit of a multi-key ordering: key extraction, key comparison and direction.
///
/// Slots are filled in order: a criterion only ever extracts into an existing slot or the
/// slot right after the last one. Implementations may panic on any other slot.
pub trait Criterion<T> {
    /// Computes the key of `item` and stores it in `slot`.
    ///
    /// `slot` is at most the number of slots filled so far.
    fn extract(&mut self, item: &T, slot: usize);

    /// Compares keys cached at slots `x` and `y`, honoring the criterion's direction.
    fn compare(&self, x: usize, y: usize) -> Ordering;

    /// Swaps keys cached at slots `x` and `y`.
    fn swap(&mut self, x: usize, y: usize);
}

/// Criterion ordering by a key extracted with a function and compared with a
/// [`Comparator`].
pub struct KeyCriterion<T, K, F, C> {
    key: F,
    comparator: C,
    descending: bool,
    keys: Vec<K>,
    _item: PhantomData<fn(&T)>,
}

impl<T, K, F, C> KeyCriterion<T, K, F, C>
where
    F: FnMut(&T) -> K,
    C: Comparator<K>,
{
    /// Creates a criterion ordering by `key`, ascending unless `descending` is set.
    pub fn new(key: F, comparator: C, descending: bool) -> Self {
        Self {
            key,
            comparator,
            descending,
            keys: Vec::new(),
            _item: PhantomData,
        }
    }
}

impl<T, K, F, C> Criterion<T> for KeyCriterion<T, K, F, C>
where
    F: FnMut(&T) -> K,
    C: Comparator<K>,
{
    fn extract(&mut self, item: &T, slot: usize) {
        let key = (self.key)(item);
        store(&mut self.keys, slot, key);
    }

    #[inline]
    fn compare(&self, x: usize, y: usize) -> Ordering {
        let res = self.comparator.compare(&self.keys[x], &self.keys[y]);
        if self.descending {
            res.reverse()
        } else {
            res
        }
    }

    #[inline]
    fn swap(&mut self, x: usize, y: usize) {
        self.keys.swap(x, y);
    }
}

impl<T, K, F, C> fmt::Debug for KeyCriterion<T, K, F, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyCriterion")
            .field("descending", &self.descending)
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

/// Criterion keyed by the order in which items were extracted.
///
/// Every extraction takes the next sequence number, so items extracted earlier compare
/// greater: they are preferred by selections that keep the greatest items.
#[derive(Debug, Default)]
pub(crate) struct ArrivalOrder {
    next: u64,
    keys: Vec<u64>,
}

impl<T> Criterion<T> for ArrivalOrder {
    fn extract(&mut self, _item: &T, slot: usize) {
        let seq = self.next;
        self.next = self.next.wrapping_add(1);
        store(&mut self.keys, slot, seq);
    }

    #[inline]
    fn compare(&self, x: usize, y: usize) -> Ordering {
        self.keys[y].cmp(&self.keys[x])
    }

    #[inline]
    fn swap(&mut self, x: usize, y: usize) {
        self.keys.swap(x, y);
    }
}

#[inline]
fn store<K>(keys: &mut Vec<K>, slot: usize, key: K) {
    if let Some(cached) = keys.get_mut(slot) {
        *cached = key;
    } else {
        assert_eq!(slot, keys.len(), "key slots must be filled in order");
        keys.push(key);
    }
}

/// Ordered chain of criteria, most significant first.
///
/// Comparison is lexicographic: criteria are evaluated in order and the first non-equal
/// result decides.
pub struct Criteria<'a, T> {
    list: Vec<Box<dyn Criterion<T> + 'a>>,
}

impl<'a, T> Criteria<'a, T> {
    /// Creates an empty chain. Every comparison of an empty chain is [`Ordering::Equal`].
    #[inline]
    pub const fn new() -> Self {
        Self { list: Vec::new() }
    }

    /// Creates a chain holding a single [`KeyCriterion`] ordering by `key`.
    pub fn from_key<K, F, C>(key: F, comparator: C, descending: bool) -> Self
    where
        T: 'a,
        K: 'a,
        F: FnMut(&T) -> K + 'a,
        C: Comparator<K> + 'a,
    {
        let mut criteria = Self::new();
        criteria.push_key(key, comparator, descending);
        criteria
    }

    /// Appends a criterion with the lowest priority so far.
    pub fn push(&mut self, criterion: impl Criterion<T> + 'a) {
        self.list.push(Box::new(criterion));
    }

    /// Appends a [`KeyCriterion`] ordering by `key`.
    pub fn push_key<K, F, C>(&mut self, key: F, comparator: C, descending: bool)
    where
        T: 'a,
        K: 'a,
        F: FnMut(&T) -> K + 'a,
        C: Comparator<K> + 'a,
    {
        self.push(KeyCriterion::new(key, comparator, descending));
    }

    /// Number of criteria in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the chain has no criteria.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Extracts every key of `item` into `slot`.
    ///
    /// # Panics
    /// If `slot` skips past the first unfilled slot.
    pub fn extract(&mut self, item: &T, slot: usize) {
        for criterion in &mut self.list {
            criterion.extract(item, slot);
        }
    }

    /// Compares slots `x` and `y` under the whole chain.
    pub fn compare(&self, x: usize, y: usize) -> Ordering {
        for criterion in &self.list {
            match criterion.compare(x, y) {
                Ordering::Equal => {}
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Swaps slots `x` and `y` in every criterion.
    pub fn swap(&mut self, x: usize, y: usize) {
        for criterion in &mut self.list {
            criterion.swap(x, y);
        }
    }

    /// Extracts keys of `item` into `slot` one criterion at a time, comparing `slot` with
    /// `other` after each one, until a criterion decides.
    ///
    /// If `slot` compares [`Greater`](Ordering::Greater) the remaining keys are extracted
    /// too, so `slot` is complete. Otherwise the keys of the criteria after the deciding one
    /// are left as they were.
    pub fn extract_and_compare(&mut self, item: &T, slot: usize, other: usize) -> Ordering {
        let mut rest = self.list.iter_mut();
        let mut res = Ordering::Equal;
        for criterion in rest.by_ref() {
            criterion.extract(item, slot);
            res = criterion.compare(slot, other);
            if res.is_ne() {
                break;
            }
        }
        if res.is_gt() {
            for criterion in rest {
                criterion.extract(item, slot);
            }
        }
        res
    }
}

impl<T> Default for Criteria<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Criteria<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criteria")
            .field("len", &self.list.len())
            .finish()
    }
}

/// Adds tie-break keys to a builder of one of this crate's algorithms.
///
/// Each call appends one criterion; the most recently added one has the lowest priority.
/// What "ascending" means depends on the algorithm: for [`merge`](crate::merge) and
/// [`unique`](crate::unique) it is the order of the input, for [`top`](crate::top) it means
/// larger keys rank higher.
pub trait ThenBy<'a, T: 'a>: Sized {
    /// Chain the builder is adding criteria to.
    #[doc(hidden)]
    fn criteria_mut(&mut self) -> &mut Criteria<'a, T>;

    /// Breaks ties by `key`, ascending.
    fn then_by<K, F>(self, key: F) -> Self
    where
        K: Ord + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        self.then_by_with(key, ByOrd)
    }

    /// Breaks ties by `key`, descending.
    fn then_by_descending<K, F>(self, key: F) -> Self
    where
        K: Ord + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        self.then_by_descending_with(key, ByOrd)
    }

    /// Breaks ties by `key` compared with `comparator`, ascending.
    fn then_by_with<K, F, C>(mut self, key: F, comparator: C) -> Self
    where
        K: 'a,
        F: FnMut(&T) -> K + 'a,
        C: Comparator<K> + 'a,
    {
        self.criteria_mut().push_key(key, comparator, false);
        self
    }

    /// Breaks ties by `key` compared with `comparator`, descending.
    fn then_by_descending_with<K, F, C>(mut self, key: F, comparator: C) -> Self
    where
        K: 'a,
        F: FnMut(&T) -> K + 'a,
        C: Comparator<K> + 'a,
    {
        self.criteria_mut().push_key(key, comparator, true);
        self
    }
}

//! Implementation of [`DHeap`], a resizable d-ary heap.
//!
//! Layout: the root is at index 0 and the children of the element at `i` are at
//! `d*i+1 ..= d*i+d`, so the parent of `i` is `(i-1)/d`.
//!
//! ```
//! use heap_select::DHeap;
//!
//! let mut heap = DHeap::builder(3).build_from([5, 1, 4, 2, 3])?;
//! heap.insert(0)?;
//! assert_eq!(heap.peek()?, &0);
//! assert!(heap.drain_sorted().eq([0, 1, 2, 3, 4, 5]));
//! assert!(heap.is_empty());
//! # Ok::<(), heap_select::HeapError>(())
//! ```

use alloc::vec::Vec;
use core::{mem, slice};

use crate::{
    comparators::{ByOrd, Comparator, Direction},
    error::{HeapError, Result},
};

mod builder;
mod iter;
pub use builder::Builder;
pub use iter::{DrainSorted, IntoSorted};

/// A d-ary heap ordered by a [`Comparator`] and a [`Direction`].
///
/// Create one with [`DHeap::new`] (min-first by [`Ord`]) or configure it with
/// [`DHeap::builder`].
#[derive(Debug, Clone)]
pub struct DHeap<T, C = ByOrd> {
    items: Vec<T>,
    arity: usize,
    direction: Direction,
    comparator: C,
}

impl<T: Ord> DHeap<T> {
    /// Creates an empty min-first heap of the given `arity`, ordered by [`Ord`].
    ///
    /// Fails with [`HeapError::InvalidArity`] if `arity < 2`.
    pub fn new(arity: usize) -> Result<Self> {
        Builder::new(arity).build()
    }
}

impl DHeap<(), ByOrd> {
    /// Starts configuring a heap of the given `arity`.
    ///
    /// The arity is validated when the heap is built.
    #[inline]
    pub const fn builder(arity: usize) -> Builder<ByOrd> {
        Builder::new(arity)
    }
}

impl<T, C> DHeap<T, C>
where
    C: Comparator<T>,
{
    pub(crate) fn from_parts(
        items: Vec<T>, arity: usize, direction: Direction, comparator: C,
    ) -> Result<Self> {
        if arity < 2 {
            return Err(HeapError::InvalidArity(arity));
        }
        let mut heap = Self {
            items,
            arity,
            direction,
            comparator,
        };
        heap.heapify();
        Ok(heap)
    }

    /// Returns true if the element at `a` must sit below the element at `b`.
    #[inline]
    fn ranks_below(&self, a: usize, b: usize) -> bool {
        self.direction
            .ranks_below(self.comparator.compare(&self.items[a], &self.items[b]))
    }

    fn heapify(&mut self) {
        // n/d is the last index that can have a child for any arity
        for i in (0..=self.items.len() / self.arity).rev() {
            self.sift_down(i);
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let first_child = match pos
                .checked_mul(self.arity)
                .and_then(|child| child.checked_add(1))
            {
                Some(child) if child < len => child,
                _ => return,
            };
            let last_child = first_child.saturating_add(self.arity).min(len);
            let mut best = first_child;
            for child in (first_child + 1)..last_child {
                if self.ranks_below(best, child) {
                    best = child;
                }
            }
            // if we are already in order, stop.
            if !self.ranks_below(pos, best) {
                return;
            }
            self.items.swap(pos, best);
            pos = best;
        }
    }

    fn bubble_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / self.arity;
            if !self.ranks_below(parent, pos) {
                return;
            }
            self.items.swap(parent, pos);
            pos = parent;
        }
    }

    /// Inserts an item into the heap.
    ///
    /// Fails with [`HeapError::MissingItem`] if `item` is `None`.
    ///
    /// This is an `O(log_d n)` operation.
    pub fn insert(&mut self, item: impl Into<Option<T>>) -> Result<()> {
        let item = item.into().ok_or(HeapError::MissingItem)?;
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
        Ok(())
    }

    /// Inserts all `items` into the heap.
    ///
    /// If any of the items is `None` nothing is inserted and [`HeapError::MissingItem`]
    /// is returned.
    ///
    /// Depending on the size of the batch this either bubbles up every new item
    /// (`O(k log_d n)`) or rebuilds the whole heap (`O(n)`).
    pub fn insert_range<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let batch = items
            .into_iter()
            .map(Into::<Option<T>>::into)
            .collect::<Option<Vec<T>>>()
            .ok_or(HeapError::MissingItem)?;
        let old_len = self.items.len();
        self.items.extend(batch);
        let added = self.items.len() - old_len;
        if added > self.items.len() / self.arity {
            tracing::trace!(added, len = self.items.len(), "rebuilding heap after batch insert");
            self.heapify();
        } else {
            for i in old_len..self.items.len() {
                self.bubble_up(i);
            }
        }
        Ok(())
    }

    /// Returns the root of the heap without removing it.
    ///
    /// The root is the smallest item of a [`Direction::MinFirst`] heap and the largest item of
    /// a [`Direction::MaxFirst`] one. Fails with [`HeapError::Empty`] if there are no items.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.items.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the root of the heap.
    ///
    /// Fails with [`HeapError::Empty`] if there are no items.
    ///
    /// This is an `O(log_d n)` operation.
    pub fn remove_root(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(HeapError::Empty);
        }
        // last item replaces the root
        let root = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Replaces the root with `item` and returns the old root.
    ///
    /// Same effect as [`remove_root`](Self::remove_root) followed by
    /// [`insert`](Self::insert), but with a single sift. Fails with
    /// [`HeapError::MissingItem`] if `item` is `None` and with [`HeapError::Empty`] if the
    /// heap has no root to replace.
    pub fn replace_root(&mut self, item: impl Into<Option<T>>) -> Result<T> {
        let item = item.into().ok_or(HeapError::MissingItem)?;
        let root = self.items.first_mut().ok_or(HeapError::Empty)?;
        let old = mem::replace(root, item);
        self.sift_down(0);
        Ok(old)
    }

    /// Removes and yields items in priority order, leaving the heap empty once the
    /// iterator is exhausted.
    ///
    /// Items that were not yielded stay in the heap if the iterator is dropped early.
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted::new(self)
    }

    /// Consumes the heap, yielding items in priority order.
    #[inline]
    pub fn into_sorted_iter(self) -> IntoSorted<T, C> {
        IntoSorted::new(self)
    }

    /// Consumes the heap, returning the items in priority order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.items.len());
        res.extend(self.into_sorted_iter());
        res
    }
}

impl<T, C> DHeap<T, C> {
    /// Number of items in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximal number of children of each node.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Which end of the ordering is at the root.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The comparator ordering the items.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Number of items the heap can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Grows or shrinks the backing storage to hold at least `capacity` items.
    ///
    /// Fails with [`HeapError::CapacityBelowLen`] if `capacity` is less than
    /// [`len`](Self::len).
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        let len = self.items.len();
        if capacity < len {
            return Err(HeapError::CapacityBelowLen {
                requested: capacity,
                len,
            });
        }
        if capacity > self.items.capacity() {
            self.items.reserve_exact(capacity - len);
        } else {
            self.items.shrink_to(capacity);
        }
        Ok(())
    }

    /// Shrinks the backing storage to fit the items, unless more than 90% of it is
    /// already in use.
    pub fn trim_excess(&mut self) {
        if self.items.len().saturating_mul(10) < self.items.capacity().saturating_mul(9) {
            self.items.shrink_to_fit();
        }
    }

    /// Removes all items.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the items in storage order, which is not sorted.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Items in storage order, which is not sorted.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the heap, returning the items in storage order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T, C> IntoIterator for &'a DHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use alloc::vec::Vec;
use core::cmp::Ordering;

use super::DHeap;
use crate::{
    comparators::{ByFunc, ByKey, ByOrd, Comparator, Direction},
    error::Result,
};

/// Builder for [`DHeap`]
///
/// Allows to configure the direction, the initial capacity and how to compare the items.
///
/// By default items are compared using [`Ord`] and the smallest item is the root.
///
/// ```
/// use heap_select::DHeap;
///
/// let mut heap: DHeap<&str, _> = DHeap::builder(4)
///     .max_first()
///     .by_key(|word: &&str| word.len())
///     .capacity(8)
///     .build()?;
/// heap.insert_range(["a", "abc", "ab"])?;
/// assert_eq!(heap.remove_root()?, "abc");
/// # Ok::<(), heap_select::HeapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder<C> {
    arity: usize,
    direction: Direction,
    capacity: usize,
    comparator: C,
}

impl Builder<ByOrd> {
    #[inline]
    pub(crate) const fn new(arity: usize) -> Self {
        Self {
            arity,
            direction: Direction::MinFirst,
            capacity: 0,
            comparator: ByOrd,
        }
    }
}

impl<C> Builder<C> {
    /// Keep the smallest item at the root (default)
    #[inline]
    pub const fn min_first(mut self) -> Self {
        self.direction = Direction::MinFirst;
        self
    }

    /// Keep the largest item at the root
    #[inline]
    pub const fn max_first(mut self) -> Self {
        self.direction = Direction::MaxFirst;
        self
    }

    /// Keep the given end of the ordering at the root
    #[inline]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Number of items the heap can initially hold without reallocating.
    #[inline]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Compare heap items using `comparator`
    #[inline]
    pub fn comparator<C2>(self, comparator: C2) -> Builder<C2> {
        Builder {
            arity: self.arity,
            direction: self.direction,
            capacity: self.capacity,
            comparator,
        }
    }

    /// Compare heap items using `func`
    #[inline]
    pub fn by_func<T, F>(self, func: F) -> Builder<ByFunc<F>>
    where
        T: ?Sized,
        F: Fn(&T, &T) -> Ordering,
    {
        self.comparator(ByFunc(func))
    }

    /// Compare heap items by the key produced by `func`
    #[inline]
    pub fn by_key<T, F, K>(self, func: F) -> Builder<ByKey<F>>
    where
        T: ?Sized,
        F: Fn(&T) -> K,
        K: Ord,
    {
        self.comparator(ByKey(func))
    }

    /// Builds an empty heap.
    ///
    /// Fails with [`HeapError::InvalidArity`](crate::HeapError::InvalidArity) if the arity is
    /// less than 2.
    pub fn build<T>(self) -> Result<DHeap<T, C>>
    where
        C: Comparator<T>,
    {
        DHeap::from_parts(
            Vec::with_capacity(self.capacity),
            self.arity,
            self.direction,
            self.comparator,
        )
    }

    /// Builds a heap holding `items`, establishing the heap order in `O(n)`.
    ///
    /// Fails with [`HeapError::InvalidArity`](crate::HeapError::InvalidArity) if the arity is
    /// less than 2.
    pub fn build_from<T, I>(self, items: I) -> Result<DHeap<T, C>>
    where
        C: Comparator<T>,
        I: IntoIterator<Item = T>,
    {
        let mut storage = Vec::with_capacity(self.capacity);
        storage.extend(items);
        DHeap::from_parts(storage, self.arity, self.direction, self.comparator)
    }
}

//! Internal implementation details of this library.
//!
//! The merge and top-N algorithms keep their working set in a binary min-heap laid out over
//! numbered slots: element storage plus the key caches of a [`Criteria`](crate::Criteria)
//! chain, all indexed by the same slot. The heap routines here only talk to that storage
//! through the [`Slots`] trait, so every swap moves the element and all of its cached keys
//! together.
//!
//! Heap structure:
//! 0 - min element, heap root
//! [idx*2+1, idx*2+2] - children of the idx element

use core::{cmp::Ordering, mem};

/// Storage a slot heap is organized on.
pub(crate) trait Slots {
    /// Compares the elements in slots `x` and `y`.
    fn compare(&self, x: usize, y: usize) -> Ordering;

    /// Swaps the elements in slots `x` and `y`, including any cached keys.
    fn swap(&mut self, x: usize, y: usize);
}

/// Take an element at `pos` and move it down the heap of the first `len` slots,
/// while its children are smaller.
pub(crate) fn sift_down<S: Slots + ?Sized>(slots: &mut S, mut pos: usize, len: usize) {
    loop {
        let mut child = match pos.checked_mul(2).and_then(|c| c.checked_add(1)) {
            Some(child) if child < len => child,
            _ => return,
        };
        // find the smaller of the two children
        if child + 1 < len && slots.compare(child, child + 1).is_gt() {
            child += 1;
        }
        // if we are already in order, stop.
        if slots.compare(pos, child).is_le() {
            return;
        }
        slots.swap(pos, child);
        pos = child;
    }
}

/// Establishes the heap order over the first `len` slots.
pub(crate) fn heapify<S: Slots + ?Sized>(slots: &mut S, len: usize) {
    for pos in (0..len / 2).rev() {
        sift_down(slots, pos, len);
    }
}

/// Holds within itself one peeked item from the iterator and the iterator itself.
/// It's like [`iter::Peekable`](core::iter::Peekable), except eager.
#[derive(Debug)]
pub(crate) struct PeekIter<IT: Iterator> {
    /// Item peeked from the iter
    pub(crate) item: IT::Item,
    /// Iterator, containing the rest of the items
    pub(crate) iter: IT,
}

impl<IT: Iterator> PeekIter<IT> {
    /// Create a new [`PeekIter`] from an `iter`
    ///
    /// If the iterator is empty - returns None.
    pub(crate) fn new_from_iter<Iter>(iter: Iter) -> Option<Self>
    where
        Iter: IntoIterator<IntoIter = IT>,
    {
        let mut iter = iter.into_iter();
        iter.next().map(move |item| Self { item, iter })
    }

    /// Advances the iterator, returning current peeked [`item`](Self::item) and replacing it
    /// with new item from the [`iter`](Self::iter). If `iter` is out of items - returns None,
    /// with [`item`](Self::item) being the last item of the iterator.
    pub(crate) fn advance(&mut self) -> Option<IT::Item> {
        let Self { item, iter } = self;
        iter.next().map(|new_item| mem::replace(item, new_item))
    }
}

use core::iter::FusedIterator;

use super::DHeap;
use crate::comparators::Comparator;

/// Iterator removing items from a [`DHeap`] in priority order.
///
/// Created by [`DHeap::drain_sorted`].
#[derive(Debug)]
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    heap: &'a mut DHeap<T, C>,
}

impl<'a, T, C: Comparator<T>> DrainSorted<'a, T, C> {
    #[inline]
    pub(super) fn new(heap: &'a mut DHeap<T, C>) -> Self {
        Self { heap }
    }
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.remove_root().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> FusedIterator for DrainSorted<'_, T, C> {}

/// Owning iterator over the items of a [`DHeap`] in priority order.
///
/// Created by [`DHeap::into_sorted_iter`].
#[derive(Debug, Clone)]
pub struct IntoSorted<T, C: Comparator<T>> {
    heap: DHeap<T, C>,
}

impl<T, C: Comparator<T>> IntoSorted<T, C> {
    #[inline]
    pub(super) fn new(heap: DHeap<T, C>) -> Self {
        Self { heap }
    }
}

impl<T, C: Comparator<T>> Iterator for IntoSorted<T, C> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.remove_root().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoSorted<T, C> {}

impl<T, C: Comparator<T>> FusedIterator for IntoSorted<T, C> {}

//! Comparators for heap elements and for cached keys.
//!
//! [`DHeap`](crate::DHeap) orders its elements with a [`Comparator`], and every ordering
//! criterion of the [`merge`](crate::merge), [`top`](crate::top) and [`unique`](crate::unique)
//! algorithms compares its extracted keys with one. Users of this crate may implement
//! [`Comparator`] to create a custom comparator, or use [`ByOrd`] (the default), [`ByFunc`]
//! and [`ByKey`].
//!
//! Comparators can be chained with [`Chain::new`] and reversed with [`MaxFirst`].

use core::cmp::Ordering;

/// Trait used to compare elements and keys.
///
/// Implementations should produce a consistent total ordering, see [`Ord`]
/// documentation for details.
///
/// Producing non-total or inconsistent ordering results in items being produced in a wrong
/// order, but never in a panic or UB.
pub trait Comparator<T: ?Sized> {
    /// Compares two elements and returns an [`Ordering`]
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, C> Comparator<T> for &C
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        C::compare(self, a, b)
    }
}

/// Which end of the ordering a heap keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The smallest element is the root.
    #[default]
    MinFirst,
    /// The largest element is the root.
    MaxFirst,
}

impl Direction {
    /// Given the result of comparing `a` to `b`, returns true if `a` has to sit below `b`
    /// in a heap with this direction.
    #[inline]
    pub const fn ranks_below(self, ordering: Ordering) -> bool {
        match self {
            Self::MinFirst => ordering.is_gt(),
            Self::MaxFirst => ordering.is_lt(),
        }
    }
}

/// Wrapper that reverses a comparator.
#[derive(Debug, Clone, Copy)]
pub struct MaxFirst<C>(pub C);

impl<T, C> Comparator<T> for MaxFirst<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Calls the second comparator if the first one returns [`Ordering::Equal`].
#[derive(Debug, Clone, Copy)]
pub struct Chain<C1, C2> {
    first: C1,
    next: C2,
}

impl<C1, C2> Chain<C1, C2> {
    /// If the first comparator returns [`Ordering::Equal`] - compare
    /// elements using `next`.
    ///
    /// Similar to [`Ordering::then_with`]
    #[inline]
    pub const fn new(first: C1, next: C2) -> Self {
        Self { first, next }
    }
}

impl<T, C1, C2> Comparator<T> for Chain<C1, C2>
where
    T: ?Sized,
    C1: Comparator<T>,
    C2: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.next.compare(a, b),
            other => other,
        }
    }
}

/// Comparator that uses [`Ord`], the default everywhere in this crate.
///
/// # Example
///
/// ```
/// use heap_select::{DHeap, comparators::{ByOrd, MaxFirst}};
///
/// let mut heap = DHeap::builder(2).comparator(MaxFirst(ByOrd)).build_from([3, 1, 2])?;
/// assert_eq!(heap.remove_root()?, 3);
/// # Ok::<(), heap_select::HeapError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByOrd;

impl<T: Ord + ?Sized> Comparator<T> for ByOrd {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Ord::cmp(a, b)
    }
}

/// Comparator that uses a function to compare items
///
/// Construct directly or via [`heap::Builder::by_func`](crate::heap::Builder::by_func)
#[derive(Debug, Clone, Copy)]
pub struct ByFunc<F>(pub F);

impl<T, F> Comparator<T> for ByFunc<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a, b)
    }
}

/// Comparator that compares items by a key
///
/// Construct directly or via [`heap::Builder::by_key`](crate::heap::Builder::by_key)
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, F, K> Comparator<T> for ByKey<F>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Ord,
{
    // Leaving decision to inline this to the compiler because F can be long
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a).cmp(&self.0(b))
    }
}

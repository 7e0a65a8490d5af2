//! Entry points for the merge, top-N and unique algorithms.
//!
//! Every function takes the primary key and returns a builder; add tie-break keys with
//! [`ThenBy`](crate::ThenBy), then call `build()` or iterate over the builder directly. The
//! `_with` variants compare keys with a [`Comparator`] instead of [`Ord`].

use crate::{
    comparators::{ByOrd, Comparator},
    criteria::Criteria,
    merge::{MergeBy, MergeTwoBy},
    top::TopBy,
    unique::UniqueBy,
};

/// Merges `sources`, each sorted by ascending `key`, into one sequence sorted by `key`.
///
/// Items with equal keys are yielded in the order of their sources.
pub fn merge_by<'a, S, T, K, F>(sources: S, key: F) -> MergeBy<'a, S, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: 'a,
    K: Ord + 'a,
    F: FnMut(&T) -> K + 'a,
{
    merge_by_with(sources, key, ByOrd)
}

/// Like [`merge_by`], but the sources are sorted by descending `key`.
pub fn merge_by_descending<'a, S, T, K, F>(sources: S, key: F) -> MergeBy<'a, S, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: 'a,
    K: Ord + 'a,
    F: FnMut(&T) -> K + 'a,
{
    merge_by_descending_with(sources, key, ByOrd)
}

/// Like [`merge_by`], comparing keys with `comparator`.
pub fn merge_by_with<'a, S, T, K, F, C>(sources: S, key: F, comparator: C) -> MergeBy<'a, S, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: 'a,
    K: 'a,
    F: FnMut(&T) -> K + 'a,
    C: Comparator<K> + 'a,
{
    MergeBy::new(sources, Criteria::from_key(key, comparator, false))
}

/// Like [`merge_by_descending`], comparing keys with `comparator`.
pub fn merge_by_descending_with<'a, S, T, K, F, C>(
    sources: S, key: F, comparator: C,
) -> MergeBy<'a, S, T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: 'a,
    K: 'a,
    F: FnMut(&T) -> K + 'a,
    C: Comparator<K> + 'a,
{
    MergeBy::new(sources, Criteria::from_key(key, comparator, true))
}

/// Merges two sequences sorted by ascending `key`, preferring `left` on ties.
///
/// Yields the same items as [`merge_by`] over `[left, right]`, without the heap.
///
/// ```
/// use heap_select::merge_two_by;
///
/// let merged = merge_two_by([1, 4, 9], [2, 3, 10], |&n| n).build();
/// assert!(merged.eq([1, 2, 3, 4, 9, 10]));
/// ```
pub fn merge_two_by<'a, L, R, T, K, F>(left: L, right: R, key: F) -> MergeTwoBy<'a, L, R, T>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    T: 'a,
    K: Ord + 'a,
    F: FnMut(&T) -> K + 'a,
{
    merge_two_by_with(left, right, key, ByOrd)
}

/// Like [`merge_two_by`], but both sequences are sorted by descending `key`.
pub fn merge_two_by_descending<'a, L, R, T, K, F>(
    left: L, right: R, key: F,
) -> MergeTwoBy<'a, L, R, T>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    T: 'a,
    K: Ord + 'a,
    F: FnMut(&T) -> K + 'a,
{
    merge_two_by_descending_with(left, right, key, ByOrd)
}

/// Like [`merge_two_by`], comparing keys with `comparator`.
pub fn merge_two_by_with<'a, L, R, T, K, F, C>(
    left: L, right: R, key: F, comparator: C,
) -> MergeTwoBy<'a, L, R, T>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    T: 'a,
    K: 'a,
    F: FnMut(&T) -> K + 'a,
    C: Comparator<K> + 'a,
{
    MergeTwoBy::new(left, right, Criteria::from_key(key, comparator, false))
}

/// Like [`merge_two_by_descending`], comparing keys with `comparator`.
pub fn merge_two_by_descending_with<'a, L, R, T, K, F, C>(
    left: L, right: R, key: F, comparator: C,
) -> MergeTwoBy<'a, L, R, T>
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    T: 'a,
    K: 'a,
    F: FnMut(&T) -> K + 'a,
    C: Comparator<K> + 'a,
{
    MergeTwoBy::new(left, right, Criteria::from_key(key, comparator, true))
}

/// Selects the `count` items of `source` with the largest `key`, largest first.
///
/// Items with equal keys keep their input order.
pub fn top_by<'a, I, T, K, F>(source: I, count: usize, key: F) -> TopBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
    K: Ord + 'a,
    F: FnMut(&T) -> K + 'a,
{
    top_by_with(source, count, key, ByOrd)
}

/// Selects the `count` items of `source` with the smallest `key`, smallest first.
///
/// ```
/// use heap_select::top_by_descending;
///
/// let words = ["kiwi", "fig", "banana", "apple", "plum"];
/// let shortest = top_by_descending(words, 2, |w| w.len()).build();
/// assert!(shortest.eq(["fig", "kiwi"]));
/// ```
pub fn top_by_descending<'a, I, T, K, F>(source: I, count: usize, key: F) -> TopBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
    K: Ord + 'a,
    F: FnMut(&T) -> K + 'a,
{
    top_by_descending_with(source, count, key, ByOrd)
}

/// Like [`top_by`], comparing keys with `comparator`.
pub fn top_by_with<'a, I, T, K, F, C>(
    source: I, count: usize, key: F, comparator: C,
) -> TopBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
    K: 'a,
    F: FnMut(&T) -> K + 'a,
    C: Comparator<K> + 'a,
{
    TopBy::new(source, count, Criteria::from_key(key, comparator, false))
}

/// Like [`top_by_descending`], comparing keys with `comparator`.
pub fn top_by_descending_with<'a, I, T, K, F, C>(
    source: I, count: usize, key: F, comparator: C,
) -> TopBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
    K: 'a,
    F: FnMut(&T) -> K + 'a,
    C: Comparator<K> + 'a,
{
    TopBy::new(source, count, Criteria::from_key(key, comparator, true))
}

/// Drops items of `source`, sorted by ascending `key`, that are equal to the item yielded
/// right before them.
pub fn unique_by<'a, I, T, K, F>(source: I, key: F) -> UniqueBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
    K: Ord + 'a,
    F: FnMut(&T) -> K + 'a,
{
    unique_by_with(source, key, ByOrd)
}

/// Like [`unique_by`] for a `source` sorted by descending `key`.
pub fn unique_by_descending<'a, I, T, K, F>(source: I, key: F) -> UniqueBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
    K: Ord + 'a,
    F: FnMut(&T) -> K + 'a,
{
    unique_by_descending_with(source, key, ByOrd)
}

/// Like [`unique_by`], comparing keys with `comparator`.
pub fn unique_by_with<'a, I, T, K, F, C>(source: I, key: F, comparator: C) -> UniqueBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
    K: 'a,
    F: FnMut(&T) -> K + 'a,
    C: Comparator<K> + 'a,
{
    UniqueBy::new(source, Criteria::from_key(key, comparator, false))
}

/// Like [`unique_by_descending`], comparing keys with `comparator`.
pub fn unique_by_descending_with<'a, I, T, K, F, C>(
    source: I, key: F, comparator: C,
) -> UniqueBy<'a, I, T>
where
    I: IntoIterator<Item = T>,
    T: 'a,
    K: 'a,
    F: FnMut(&T) -> K + 'a,
    C: Comparator<K> + 'a,
{
    UniqueBy::new(source, Criteria::from_key(key, comparator, true))
}

//! A d-ary heap and three lazy, heap-driven sequence algorithms built on it.
//!
//! - [`DHeap`]: a resizable heap of any arity `>= 2`, min-first or max-first, ordered by a
//!   [`Comparator`](comparators::Comparator).
//! - [`merge_by`]: merges any number of sorted sequences into one sorted sequence, pulling a
//!   single item per source at a time, so infinite sources are fine.
//! - [`top_by`]: selects the best `N` items of a sequence in one pass, holding at most `N` of
//!   them, and yields them sorted.
//! - [`unique_by`]: drops adjacent duplicates from a sorted sequence using two key slots.
//!
//! The algorithms order items by a chain of keys: the primary key is given to the entry point,
//! tie-break keys are added with the [`ThenBy`] methods. Items that tie on every key keep
//! their input order.
//!
//! # Quick start
//!
//! ```
//! use heap_select::{ThenBy, merge_by, top_by, unique_by};
//!
//! let merged = merge_by([vec![1, 3, 5], vec![2, 4, 6]], |&n| n).build();
//! assert!(merged.eq([1, 2, 3, 4, 5, 6]));
//!
//! let scores = [("ann", 7), ("bob", 9), ("cid", 7), ("dan", 3)];
//! let best = top_by(scores, 3, |&(_, score)| score)
//!     .then_by_descending(|&(name, _)| name)
//!     .build();
//! assert!(best.eq([("bob", 9), ("ann", 7), ("cid", 7)]));
//!
//! let unique = unique_by([1, 1, 2, 3, 3], |&n| n).build();
//! assert!(unique.eq([1, 2, 3]));
//! ```
//!
//! # Heap
//!
//! ```
//! use heap_select::DHeap;
//!
//! let mut heap = DHeap::builder(4).max_first().build_from([3, 9, 1])?;
//! heap.insert(5)?;
//! assert_eq!(heap.remove_root()?, 9);
//! assert_eq!(heap.replace_root(0)?, 5);
//! assert_eq!(heap.into_sorted_vec(), [3, 1, 0]);
//! # Ok::<(), heap_select::HeapError>(())
//! ```
//!
//! # Crate Features
//! - `std` (default): enables the `std` features of `thiserror` and `tracing`. Without it the
//!   crate only needs `alloc`; [`HeapError`] implements [`core::error::Error`] either way.
//!
//! # Logging
//! A few [`tracing`] events are emitted at `debug` and `trace` level: the start of a merge,
//! the end of a top-N selection and the strategy picked for a batch insert into a heap. No
//! subscriber is installed by this crate.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

pub mod comparators;
pub mod criteria;
pub mod error;
pub mod heap;
pub mod merge;
pub mod top;
pub mod unique;

pub use criteria::{Criteria, ThenBy};
pub use error::{ErrorKind, HeapError, Result};
pub use heap::DHeap;
pub use merge::{MergeIter, MergeTwoIter};
pub use top::TopIter;
pub use unique::UniqueIter;

mod convenience;
pub use convenience::*;

pub(crate) mod internal;


#[doc(hidden)]
#[doc = include_str!("../README.md")]
struct _ReadmeTest;

use heap_select::{DHeap, ErrorKind, HeapError, comparators::Direction};
use rand::{Rng, SeedableRng, rngs::StdRng};

mod helpers;
use helpers::init_tracing;

fn assert_heap_order(heap: &DHeap<i32>) {
    let items = heap.as_slice();
    for pos in 1..items.len() {
        let parent = (pos - 1) / heap.arity();
        let in_order = match heap.direction() {
            Direction::MinFirst => items[parent] <= items[pos],
            Direction::MaxFirst => items[parent] >= items[pos],
        };
        assert!(in_order, "{items:?}: {pos} is out of order with its parent {parent}");
    }
}

/// Runs random operations against a heap and a sorted reference vector
fn random_ops(seed: u64, arity: usize, direction: Direction) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut heap = DHeap::builder(arity).direction(direction).build::<i32>().unwrap();
    // best item last, so the root is `model.last()`
    let mut model: Vec<i32> = Vec::new();
    let sort = |model: &mut Vec<i32>| match direction {
        Direction::MinFirst => model.sort_unstable_by(|a, b| b.cmp(a)),
        Direction::MaxFirst => model.sort_unstable(),
    };

    for _ in 0..2000 {
        match rng.random_range(0..100) {
            0..40 => {
                let item = rng.random_range(-50..50);
                heap.insert(item).unwrap();
                model.push(item);
                sort(&mut model);
            }
            40..45 => {
                let len = rng.random_range(0..(heap.len() + 8));
                let batch = (0..len).map(|_| rng.random_range(-50..50)).collect::<Vec<_>>();
                heap.insert_range(batch.iter().copied()).unwrap();
                model.extend(batch);
                sort(&mut model);
            }
            45..75 => assert_eq!(heap.remove_root().ok(), model.pop()),
            75..90 => {
                let item = rng.random_range(-50..50);
                match model.pop() {
                    Some(root) => {
                        assert_eq!(heap.replace_root(item), Ok(root));
                        model.push(item);
                        sort(&mut model);
                    }
                    None => assert_eq!(heap.replace_root(item), Err(HeapError::Empty)),
                }
            }
            90..94 => {
                let before = heap.as_slice().to_vec();
                assert_eq!(heap.insert(None::<i32>), Err(HeapError::MissingItem));
                assert_eq!(heap.as_slice(), &before[..]);
            }
            94..98 => {
                let capacity = heap.len() + rng.random_range(0..16);
                heap.set_capacity(capacity).unwrap();
                heap.trim_excess();
                assert!(heap.capacity() >= heap.len());
            }
            _ => {
                heap.clear();
                model.clear();
            }
        }
        assert_heap_order(&heap);
        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek().ok(), model.last());
    }

    model.reverse();
    assert_eq!(heap.into_sorted_vec(), model);
}

#[test]
fn random_operations() {
    init_tracing();
    for seed in 0..8 {
        for arity in [2, 3, 4, 7, 16] {
            random_ops(seed, arity, Direction::MinFirst);
            random_ops(seed, arity, Direction::MaxFirst);
        }
    }
}

#[test]
fn error_kinds() {
    let err = DHeap::<i32>::new(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "heap arity must be at least 2, got 1");

    let mut heap = DHeap::<i32>::new(2).unwrap();
    let err = heap.peek().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    heap.insert_range([1, 2, 3]).unwrap();
    let err = heap.set_capacity(2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err,
        HeapError::CapacityBelowLen {
            requested: 2,
            len: 3
        }
    );
    assert_eq!(heap.len(), 3);
}

#[test]
fn errors_are_std_errors() {
    fn boxed(err: HeapError) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(err)
    }
    let err = boxed(HeapError::MissingItem);
    assert_eq!(err.to_string(), "absent items can't be stored in the heap");
}

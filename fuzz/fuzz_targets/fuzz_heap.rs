#![no_main]

use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
extern crate heap_select;
use heap_select::{DHeap, HeapError, tests::assert_heap_invariant};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(i8),
    InsertRange(Vec<Option<i8>>),
    RemoveRoot,
    ReplaceRoot(Option<i8>),
    SetCapacity(u8),
    TrimExcess,
    Clear,
}

fuzz_target!(|data: (u8, bool, Vec<i8>, Vec<Op>)| {
    let (arity, max_first, initial, ops) = data;
    let builder = DHeap::builder(usize::from(arity % 8));
    let builder = if max_first { builder.max_first() } else { builder };
    let mut heap = match builder.build_from(initial) {
        Ok(heap) => heap,
        Err(err) => {
            assert_eq!(err, HeapError::InvalidArity(usize::from(arity % 8)));
            return;
        }
    };
    assert_heap_invariant(&heap);

    for op in ops {
        let len = heap.len();
        match op {
            Op::Insert(item) => heap.insert(item).unwrap(),
            Op::InsertRange(items) => {
                let missing = items.iter().any(Option::is_none);
                let added = items.len();
                match heap.insert_range(items) {
                    Ok(()) => assert_eq!(heap.len(), len + added),
                    Err(err) => {
                        assert!(missing);
                        assert_eq!(err, HeapError::MissingItem);
                        assert_eq!(heap.len(), len);
                    }
                }
            }
            Op::RemoveRoot => match heap.remove_root() {
                Ok(root) => assert!(heap.peek().map_or(true, |next| if max_first {
                    *next <= root
                } else {
                    *next >= root
                })),
                Err(err) => assert_eq!((err, len), (HeapError::Empty, 0)),
            },
            Op::ReplaceRoot(item) => match (heap.replace_root(item), item) {
                (Ok(_), Some(_)) => assert_eq!(heap.len(), len),
                (Err(HeapError::MissingItem), None) => {}
                (Err(HeapError::Empty), Some(_)) => assert_eq!(len, 0),
                (res, item) => panic!("unexpected {res:?} for {item:?}"),
            },
            Op::SetCapacity(extra) => {
                heap.set_capacity(len + usize::from(extra)).unwrap();
                if len > 0 {
                    assert!(heap.set_capacity(len - 1).is_err());
                }
            }
            Op::TrimExcess => heap.trim_excess(),
            Op::Clear => heap.clear(),
        }
        assert_heap_invariant(&heap);
    }

    let sorted = heap.into_sorted_vec();
    assert!(sorted.windows(2).all(|pair| if max_first {
        pair[0] >= pair[1]
    } else {
        pair[0] <= pair[1]
    }));
});

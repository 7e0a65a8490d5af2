#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate heap_select;
use heap_select::tests::order::{assert_correct_merge, assert_correct_top, assert_correct_unique};

fuzz_target!(|data: (Vec<Vec<i8>>, u8)| {
    let (lists, count) = data;
    let sources = lists.iter().map(Vec::as_slice).collect::<Vec<_>>();
    assert_correct_merge(&sources, false);
    assert_correct_merge(&sources, true);

    let flat = lists.concat();
    assert_correct_top(&flat, usize::from(count), false);
    assert_correct_top(&flat, usize::from(count), true);
    assert_correct_unique(&flat, false);
    assert_correct_unique(&flat, true);
});

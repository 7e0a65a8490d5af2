#![allow(dead_code)]

use std::sync::Once;

use rand::{Rng, rngs::StdRng};

/// Installs a `tracing` subscriber writing to the test output, once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Item of a feed, sorted by date and then by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: (u16, u8, u8),
    pub title: &'static str,
}

pub const fn entry(date: (u16, u8, u8), title: &'static str) -> Entry {
    Entry { date, title }
}

/// `count` sorted lists of random length up to `max_len`
pub fn random_sorted_lists(rng: &mut StdRng, count: usize, max_len: usize) -> Vec<Vec<i32>> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            let mut list = (0..len)
                .map(|_| rng.random_range(-1000..1000))
                .collect::<Vec<i32>>();
            list.sort_unstable();
            list
        })
        .collect()
}

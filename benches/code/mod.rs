use criterion::{BenchmarkId, Criterion, criterion_group};
use heap_select::{DHeap, merge_by, merge_two_by, top_by};
use itertools::{Itertools, kmerge_by};
use rand::prelude::*;

fn closest_divisible<I>(iter: I, target: usize) -> usize
where
    I: Iterator<Item = usize>,
{
    fn gcd(mut a: usize, mut b: usize) -> usize {
        while b != 0 {
            let t = b;
            b = a % b;
            a = t;
        }
        a
    }
    fn lcm(a: usize, b: usize) -> usize {
        a.checked_mul(b).unwrap() / gcd(a, b)
    }

    let lcm = iter.fold(1, lcm);
    ((target as f64) / (lcm as f64)).round() as usize * lcm
}

fn bench_merge(c: &mut Criterion) {
    let iter_counts = [2, 8, 32, 128, 512, 2048];
    let n_els = closest_divisible(iter_counts.iter().copied(), 2_usize.pow(20));
    let mut vec = StdRng::seed_from_u64(0)
        .random_iter()
        .take(n_els)
        .collect::<Vec<u64>>();
    // every chunk is sorted, chunks overlap
    for n_iters in iter_counts {
        let it_len = n_els / n_iters;
        let mut group = c.benchmark_group(format!("Merge {n_els} items VS Itertools"));
        for chunk in vec.chunks_mut(it_len) {
            chunk.sort_unstable();
        }
        group.bench_function(BenchmarkId::new("merge_by", n_iters), |b| {
            b.iter(|| {
                merge_by(vec.chunks(it_len).map(|chunk| chunk.iter().copied()), |&n| n)
                    .build()
                    .collect::<Vec<_>>()
            });
        });
        group.bench_function(BenchmarkId::new("Itertools kmerge_by", n_iters), |b| {
            b.iter(|| {
                kmerge_by(
                    vec.chunks(it_len).map(|chunk| chunk.iter().copied()),
                    |a: &u64, b: &u64| a < b,
                )
                .collect::<Vec<_>>()
            });
        });
        if n_iters == 2 {
            group.bench_function(BenchmarkId::new("merge_two_by", n_iters), |b| {
                b.iter(|| {
                    let (left, right) = vec.split_at(it_len);
                    merge_two_by(left.iter().copied(), right.iter().copied(), |&n| n)
                        .build()
                        .collect::<Vec<_>>()
                });
            });
        }
        group.finish();
    }
}

fn bench_top(c: &mut Criterion) {
    let n_els = 2_usize.pow(20);
    let vec = StdRng::seed_from_u64(1)
        .random_iter()
        .take(n_els)
        .collect::<Vec<u64>>();

    let mut group = c.benchmark_group(format!("Top N of {n_els} items"));
    for count in [1, 16, 256, 4096, 65536] {
        group.bench_function(BenchmarkId::new("top_by", count), |b| {
            b.iter(|| top_by(vec.iter().copied(), count, |&n| n).build().collect::<Vec<_>>());
        });
        group.bench_function(BenchmarkId::new("sort and take", count), |b| {
            b.iter(|| {
                vec.iter()
                    .copied()
                    .sorted_unstable_by(|a, b| b.cmp(a))
                    .take(count)
                    .collect::<Vec<_>>()
            });
        });
        group.bench_function(BenchmarkId::new("Itertools k_largest", count), |b| {
            b.iter(|| vec.iter().copied().k_largest(count).collect::<Vec<_>>());
        });
    }
    group.finish();
}

fn bench_arity(c: &mut Criterion) {
    let n_els = 2_usize.pow(18);
    let vec = StdRng::seed_from_u64(2)
        .random_iter()
        .take(n_els)
        .collect::<Vec<u64>>();

    let mut group = c.benchmark_group(format!("Heap sort of {n_els} items"));
    for arity in [2, 3, 4, 8, 16] {
        group.bench_function(BenchmarkId::new("build_from", arity), |b| {
            b.iter(|| {
                DHeap::builder(arity)
                    .build_from(vec.iter().copied())
                    .unwrap()
                    .into_sorted_vec()
            });
        });
        group.bench_function(BenchmarkId::new("insert", arity), |b| {
            b.iter(|| {
                let mut heap = DHeap::builder(arity).capacity(n_els).build::<u64>().unwrap();
                for &item in &vec {
                    heap.insert(item).unwrap();
                }
                heap.into_sorted_vec()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge, bench_top, bench_arity);

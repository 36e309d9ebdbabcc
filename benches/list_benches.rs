use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_rtlist::{ClonedList, FixedPool, List, NodeAllocator, RawCopy, SharedPool};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1_024, 16_384];

// --- Fill then drain, heap vs pool ---

fn fill_and_drain<A: NodeAllocator<u64>>(list: &mut List<u64, A, RawCopy>, n: usize) {
    for i in 0..n as u64 {
        list.append(&i).unwrap();
    }
    while let Some(value) = list.pop_first() {
        black_box(value);
    }
}

fn append_pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_pop");

    for &n in &SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(BenchmarkId::new("heap", n), |b| {
            let mut list = List::<u64>::new();
            b.iter(|| fill_and_drain(&mut list, n));
        });

        group.bench_function(BenchmarkId::new("fixed_pool", n), |b| {
            let mut list: List<u64, FixedPool<u64>> = List::with_allocator(FixedPool::with_capacity(n));
            b.iter(|| fill_and_drain(&mut list, n));
        });

        group.bench_function(BenchmarkId::new("shared_pool", n), |b| {
            let pool = SharedPool::<u64>::with_capacity(n);
            let mut list: List<u64, &SharedPool<u64>> = List::with_allocator(&pool);
            b.iter(|| fill_and_drain(&mut list, n));
        });
    }

    group.finish();
}

// --- Walk with removal through a cursor ---

fn cursor_filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_filter");

    for &n in &SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::new("remove_odd", n), |b| {
            let mut list: List<u64, FixedPool<u64>> = List::with_allocator(FixedPool::with_capacity(n));
            b.iter(|| {
                for i in 0..n as u64 {
                    list.append(&i).unwrap();
                }
                let mut cursor = list.begin_mut();
                while let Some(&value) = cursor.value() {
                    if value % 2 == 1 {
                        cursor.remove_current();
                    }
                    cursor.next();
                }
                black_box(list.count());
                list.clear();
            });
        });
    }

    group.finish();
}

// --- Copy-construct policy with owned values ---

fn cloned_values_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cloned_values");
    let value = String::from("a-moderately-sized-label");

    for &n in &SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::new("string", n), |b| {
            let mut list: ClonedList<String> = List::new();
            b.iter(|| {
                for _ in 0..n {
                    list.append(&value).unwrap();
                }
                list.clear();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    append_pop_benchmark,
    cursor_filter_benchmark,
    cloned_values_benchmark
);
criterion_main!(benches);

use capcache::FixedCapacityCache;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 1024;

fn bench_get(c: &mut Criterion) {
    let mut cache = FixedCapacityCache::new(CAPACITY);
    for i in 0..CAPACITY as u64 {
        cache.put(i, i);
    }

    let mut group = c.benchmark_group("get");

    group.bench_function("hit", |b| {
        let mut key = 0u64;
        b.iter(|| {
            key = (key + 1) % CAPACITY as u64;
            black_box(cache.get(&key));
        });
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            black_box(cache.get(&u64::MAX));
        });
    });

    group.finish();
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");

    group.bench_function("insert_evicting", |b| {
        let mut cache = FixedCapacityCache::new(CAPACITY);
        let mut key = 0u64;
        b.iter(|| {
            // Monotonic keys: every insert past the first 1024 evicts
            key += 1;
            cache.put(black_box(key), key);
        });
    });

    group.bench_function("update_in_place", |b| {
        let mut cache = FixedCapacityCache::new(CAPACITY);
        for i in 0..CAPACITY as u64 {
            cache.put(i, i);
        }
        let mut key = 0u64;
        b.iter(|| {
            key = (key + 1) % CAPACITY as u64;
            cache.put(black_box(key), key);
        });
    });

    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("get90_put10", |b| {
        let mut cache = FixedCapacityCache::new(CAPACITY);
        for i in 0..CAPACITY as u64 {
            cache.put(i, i);
        }
        let mut rng = StdRng::seed_from_u64(42);
        // Key space 2x capacity so the get path sees both hits and misses
        let ops: Vec<(bool, u64)> = (0..1000)
            .map(|_| (rng.gen_ratio(9, 10), rng.gen_range(0..2 * CAPACITY as u64)))
            .collect();

        b.iter(|| {
            for &(is_get, key) in &ops {
                if is_get {
                    black_box(cache.get(&key));
                } else {
                    cache.put(key, key);
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get, bench_put, bench_mixed_workload);
criterion_main!(benches);

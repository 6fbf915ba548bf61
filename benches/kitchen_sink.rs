#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::prelude::*;
use std::ops::Range;

fn kitchen_sink(kvs: &[(Range<i32>, u8)]) {
    use canonical_interval_map::IntervalMap;

    let mut interval_map: IntervalMap<i32, u8> = IntervalMap::new(0);
    // Restore every second range to the base value.
    let mut restore = false;
    for (range, value) in kvs {
        if restore {
            interval_map.assign(range.clone(), 0);
        } else {
            interval_map.assign(range.clone(), *value);
        }
        restore = !restore;
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("kitchen sink", |b| {
        let mut rng = thread_rng();
        let kvs: Vec<(Range<i32>, u8)> = (0..1000)
            .map(|_| {
                let start = rng.gen_range(0..1000);
                let end = start + rng.gen_range(1..100);
                let value: u8 = rng.gen_range(0..4);
                (start..end, value)
            })
            .collect();
        b.iter(|| kitchen_sink(&kvs))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

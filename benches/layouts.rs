// Criterion comparison of the three result layouts on one fixed dataset.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use false_sharing_bench::{partition, run, seeded_rng, Dataset, Layout};
use std::num::NonZeroUsize;

const ARRAY_SIZE: usize = 4_000_000;

fn benchmark_layouts(c: &mut Criterion) {
    let dataset = Dataset::generate(ARRAY_SIZE, 0..=5, &mut seeded_rng(Some(42)))
        .expect("benchmark dataset");

    let mut group = c.benchmark_group("count_ones");
    group.throughput(Throughput::Elements(ARRAY_SIZE as u64));

    for threads in [1, 2, 4, 8] {
        let workers = NonZeroUsize::new(threads).expect("non-zero thread count");
        let partitions = partition(dataset.len(), workers).expect("partitions");

        for layout in Layout::ALL {
            group.bench_with_input(
                BenchmarkId::new(layout.name(), threads),
                &partitions,
                |b, partitions| {
                    b.iter(|| run(layout, black_box(&dataset), partitions, black_box(1)))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_layouts);
criterion_main!(benches);

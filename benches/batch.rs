use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const AES_KEY: [u8; 32] = [0x42; 32];
const MAC_KEY: [u8; 32] = [0x24; 32];

fn bench_batch(c: &mut Criterion) {
    let data = black_box(vec![0u8; 10_000_000]); // 10 MB

    let mut group = c.benchmark_group("batch-ops");

    for n_items in [1, 2, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("parallel", n_items), &n_items, |b, &n| {
            let mut batch = (0..n)
                .map(|_| (data.as_slice(), Vec::<u8>::new()))
                .collect::<Vec<_>>();
            b.iter(|| {
                for (_, out) in batch.iter_mut() {
                    out.clear();
                }
                aesctr_stream::encode_batch(&mut batch, &AES_KEY, &MAC_KEY).unwrap();
            });
        });

        group.bench_with_input(
            BenchmarkId::new("sequential", n_items),
            &n_items,
            |b, &n| {
                b.iter(|| {
                    for _ in 0..n {
                        let mut out = Vec::<u8>::new();
                        aesctr_stream::encode(data.as_slice(), &mut out, &AES_KEY, &MAC_KEY)
                            .unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);

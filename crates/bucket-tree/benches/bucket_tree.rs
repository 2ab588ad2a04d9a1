use bucket_tree::BucketTree;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn keys(n: u32) -> Vec<String> {
    // spread keys so inserts are not purely sequential
    (0..n).map(|i| format!("title-{:08}", i.wrapping_mul(2_654_435_761) % n)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucket_tree_insert");

    for n in [1_000u32, 10_000, 100_000] {
        let keys = keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = BucketTree::new();
                for (i, k) in keys.iter().enumerate() {
                    tree.add(k.clone(), i);
                }
                black_box(tree.len())
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let keys = keys(100_000);
    let mut tree = BucketTree::new();
    for (i, k) in keys.iter().enumerate() {
        tree.add(k.clone(), i);
    }

    c.bench_function("bucket_tree_get_100k", |b| {
        b.iter(|| {
            for k in keys.iter().step_by(97) {
                black_box(tree.get(k));
            }
        });
    });
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);

//! Benchmarks for similarity graph construction
//!
//! Run with: cargo bench --package catalog

use std::sync::Arc;

use catalog::SimilarityIndexBuilder;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use media_model::Record;

const GENRES: [&str; 6] = ["Sci-Fi", "Fantasy", "Romance", "Mystery", "History", "Horror"];
const AUTHORS: [&str; 5] = ["Herbert", "Le Guin", "Austen", "Christie", "Asimov"];

fn synthetic_books(n: usize) -> Vec<Arc<Record>> {
    (0..n)
        .map(|i| {
            let record = Record::book(
                format!("Volume {i} of the saga"),
                GENRES[i % GENRES.len()],
                AUTHORS[i % AUTHORS.len()],
            )
            .with_year(1900 + (i % 120) as i32)
            .with_rating((i % 11) as f64);
            Arc::new(record)
        })
        .collect()
}

fn bench_build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity_graph_build");

    for n in [50, 100, 200] {
        let records = synthetic_books(n);
        let root = Arc::clone(&records[0]);

        for parallel in [false, true] {
            let index = SimilarityIndexBuilder::new().with_parallel(parallel);
            let label = if parallel { "parallel" } else { "serial" };

            group.bench_with_input(BenchmarkId::new(label, n), &records, |b, records| {
                b.iter(|| {
                    let graph = index.build_graph(black_box(records), &root).unwrap();
                    black_box(graph)
                })
            });
        }
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let records = synthetic_books(200);
    let root = Arc::new(Record::book("Volume 7 of the saga", "Sci-Fi", "Herbert"));
    let index = SimilarityIndexBuilder::new();

    c.bench_function("find_top_10_of_200", |b| {
        b.iter(|| {
            let neighbors = index.find(black_box(&records), &root).unwrap();
            black_box(neighbors)
        })
    });
}

criterion_group!(benches, bench_build_graph, bench_find);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use threatgrid_core::extract::{ExtractOptions, extract_records};
use threatgrid_core::{Matrix, RawCell, RawRow, Record};

#[derive(Clone)]
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// A sheet with `categories` columns and `pairs` row pairs, roughly a
/// third of the value cells left empty.
fn generate_sheet(seed: u64, categories: usize, pairs: usize) -> Vec<RawRow> {
    let mut rng = XorShift64::new(seed);
    let mut rows = Vec::with_capacity(pairs * 2 + 1);
    rows.push(
        (0..categories)
            .map(|c| RawCell::Text(format!("Category {c}")))
            .collect(),
    );
    for p in 0..pairs {
        let mut values = Vec::with_capacity(categories);
        let mut ids = Vec::with_capacity(categories);
        for c in 0..categories {
            let sparse = c > 0 && rng.next_u64() % 3 == 0;
            values.push(if sparse {
                RawCell::Empty
            } else {
                RawCell::Text(format!("Technique {p}/{c}"))
            });
            ids.push(RawCell::Text(format!(
                "{p}.{}\r\nDescription for {p}/{c}\r\nhttps://example.com/{p}/{c}",
                rng.next_u64() % 6
            )));
        }
        rows.push(values);
        rows.push(ids);
    }
    rows
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for pairs in [16usize, 256] {
        let rows = generate_sheet(7, 12, pairs);
        group.throughput(Throughput::Elements((pairs * 12) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &rows, |b, rows| {
            b.iter(|| extract_records(black_box(rows), &ExtractOptions::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for pairs in [16usize, 256] {
        let records: Vec<Record> =
            extract_records(&generate_sheet(11, 12, pairs), &ExtractOptions::default()).unwrap();
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &records, |b, records| {
            b.iter(|| {
                let matrix = Matrix::build(black_box(records));
                black_box(matrix.height())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract, bench_layout);
criterion_main!(benches);

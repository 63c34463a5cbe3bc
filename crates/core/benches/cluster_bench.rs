use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use tesela_core::table::reconstruct_table;
use tesela_core::{TableSettings, Word};

/// A synthetic grid of `rows x cols` words with realistic spacing: word
/// boxes 40pt wide, 10pt tall, 60pt column pitch, 25pt row pitch, with a
/// small per-word y jitter that exercises the anchor logic.
fn grid_words(rows: usize, cols: usize) -> Vec<Word> {
    let mut words = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let x0 = c as f64 * 60.0;
            let y0 = r as f64 * 25.0 + (c % 3) as f64;
            words.push(Word {
                text: format!("w{}_{}", r, c),
                bbox: (x0, y0, x0 + 40.0, y0 + 10.0),
            });
        }
    }
    words
}

fn bench_reconstruct_table(c: &mut Criterion) {
    let settings = TableSettings::default();
    let mut group = c.benchmark_group("reconstruct_table");

    for rows in [10usize, 50, 200] {
        let cols = 8;
        let words = grid_words(rows, cols);
        let bbox = (0.0, 0.0, cols as f64 * 60.0, rows as f64 * 25.0);

        group.bench_with_input(BenchmarkId::from_parameter(rows * cols), &words, |b, words| {
            b.iter(|| reconstruct_table(black_box(bbox), black_box(words), &settings));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconstruct_table);
criterion_main!(benches);

//! Benchmark – scanning cursors in each encoding
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use textcursor::{Cursor, Encoding, Utf8, Utf16, Utf32, to_terminated_units};

/// Deterministic mixed-script text of roughly `target_chars` code points, so
/// every encoding sees one-, two-, three- and four-byte UTF-8 sequences.
fn make_text(target_chars: usize) -> String {
    const PATTERN: &str = "plain caf\u{e9} \u{6587}\u{5b57} \u{1f600} ";
    PATTERN.chars().cycle().take(target_chars).collect()
}

fn bench_encoding<E: Encoding>(c: &mut Criterion, text: &str) {
    let haystack = to_terminated_units::<E>(text);
    let needle = to_terminated_units::<E>("\u{1f600} plain caf\u{e9}!");
    let mut group = c.benchmark_group(E::KIND.name());

    group.bench_function(BenchmarkId::new("length", text.len()), |b| {
        b.iter(|| black_box(Cursor::<E>::new(black_box(&haystack)).length()));
    });
    group.bench_function(BenchmarkId::new("compare", text.len()), |b| {
        b.iter(|| {
            let a = Cursor::<E>::new(black_box(&haystack));
            black_box(a.compare(text.chars()))
        });
    });
    group.bench_function(BenchmarkId::new("index_of", text.len()), |b| {
        b.iter(|| {
            let hay = Cursor::<E>::new(black_box(&haystack));
            black_box(hay.index_of(Cursor::<E>::new(&needle)))
        });
    });
    group.bench_function(BenchmarkId::new("transcode_utf8", text.len()), |b| {
        let mut buf = vec![0u8; text.len() + 1];
        b.iter(|| {
            let mut src = Cursor::<E>::new(black_box(&haystack));
            let mut dest = textcursor::CursorMut::<Utf8>::new(&mut buf);
            black_box(dest.write_all(&mut src))
        });
    });
    group.finish();
}

fn bench_cursor_scan(c: &mut Criterion) {
    let text = make_text(10_000);
    bench_encoding::<Utf8>(c, &text);
    bench_encoding::<Utf16>(c, &text);
    bench_encoding::<Utf32>(c, &text);
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_cursor_scan }
criterion_main!(benches);

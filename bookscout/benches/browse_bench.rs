//! Benchmarks for the pure browsing components.

use bookscout::extract::{DocumentExtractor, DocumentRecord};
use bookscout::pagination::compute_layout;
use bookscout::presenter::ResultSetPresenter;
use bookscout::sampler::CandidateSampler;
use bookscout::testing::{search_hits, BookPageFixture};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn pagination_benchmark(c: &mut Criterion) {
    c.bench_function("compute_layout", |b| {
        b.iter(|| {
            for current in 1..=200 {
                black_box(compute_layout(black_box(current), 200));
            }
        })
    });
}

fn extraction_benchmark(c: &mut Criterion) {
    let html = BookPageFixture::new(314_781, "Стивен Кинг идёт в кино")
        .author(1_500, "Стивен Кинг")
        .synopsis("Сборник.<br />Рассказы.")
        .formats(["read", "fb2", "epub", "mobi"])
        .render();
    let extractor = DocumentExtractor::default();

    c.bench_function("extract_book_page", |b| {
        b.iter(|| black_box(extractor.extract(black_box(&html), 314_781)))
    });
}

fn presenter_benchmark(c: &mut Criterion) {
    let hits = search_hits(1, 500);
    let presenter = ResultSetPresenter::default();

    c.bench_function("present_page", |b| {
        b.iter(|| black_box(presenter.present("king", black_box(37), &hits)))
    });
}

fn sampler_benchmark(c: &mut Criterion) {
    let sampler = CandidateSampler::default();

    c.bench_function("sample_until_fallback", |b| {
        b.iter(|| {
            tokio_test::block_on(
                sampler.sample_valid(|id| async move { DocumentRecord::not_found(id) }),
            )
        })
    });
}

criterion_group!(
    benches,
    pagination_benchmark,
    extraction_benchmark,
    presenter_benchmark,
    sampler_benchmark
);
criterion_main!(benches);

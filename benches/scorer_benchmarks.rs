// benches/scorer_benchmarks.rs
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use wings_seo::{compute_overall_score, compute_seo_score, SeoMetadata};

fn sample_metadata() -> SeoMetadata {
    SeoMetadata {
        title: Some("Private Pilot License Course | Personal Wings".into()),
        description: Some("Earn your private pilot license with certified instructors. ".repeat(2)),
        keywords: Some("ppl, flight school, pilot training".into()),
        og_title: None,
        og_description: None,
        og_image: Some("https://personalwings.com/og/ppl.png".into()),
        canonical_url: Some("https://personalwings.com/courses/ppl".into()),
    }
}

fn bench_scorer(c: &mut Criterion) {
    let seo = sample_metadata();
    c.bench_function("compute_seo_score", |b| {
        b.iter(|| black_box(compute_seo_score(black_box(Some(&seo)))))
    });

    let sections = vec![Some(seo.clone()), None, Some(SeoMetadata::default()), Some(seo)];
    c.bench_function("compute_overall_score_4_sections", |b| {
        b.iter(|| black_box(compute_overall_score(black_box(&sections))))
    });
}

criterion_group!(benches, bench_scorer);
criterion_main!(benches);

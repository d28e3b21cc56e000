use cnprov::NameNormalizer;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_normalize(c: &mut Criterion) {
    let normalizer = NameNormalizer::new();

    c.bench_function("normalize_exact", |b| {
        b.iter(|| normalizer.normalize(black_box("Guangdong")))
    });

    c.bench_function("normalize_case_insensitive", |b| {
        b.iter(|| normalizer.normalize(black_box("BEIJING")))
    });

    c.bench_function("normalize_substring", |b| {
        b.iter(|| normalizer.normalize(black_box("Guangdong Province")))
    });

    c.bench_function("normalize_chinese_suffix", |b| {
        b.iter(|| normalizer.normalize(black_box("内蒙古自治区")))
    });

    c.bench_function("normalize_miss", |b| {
        b.iter(|| normalizer.normalize(black_box("Atlantis")))
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let normalizer = NameNormalizer::new();
    let names: Vec<&str> = vec![
        "Guangdong",
        "BEIJING",
        "广东省",
        "内蒙古自治区",
        "Nei Mongol",
        "Shanghai",
        "hong kong",
        "Sichuan Province",
        "黑龙江",
        "Atlantis",
    ];

    c.bench_function("normalize_batch_10", |b| {
        b.iter(|| normalizer.normalize_batch(black_box(&names)))
    });
}

fn benchmark_init(c: &mut Criterion) {
    c.bench_function("normalizer_init", |b| b.iter(NameNormalizer::new));
}

criterion_group!(benches, benchmark_normalize, benchmark_batch, benchmark_init);
criterion_main!(benches);

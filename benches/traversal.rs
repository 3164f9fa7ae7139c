use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_layout::geometry::{ReservedMask, blank_symbol};
use qr_layout::layout::{EncodingRegion, regions_for_all_versions};
use qr_layout::SymbolVersion;

fn version(raw: i64) -> SymbolVersion {
    SymbolVersion::new(raw).expect("valid version")
}

fn bench_region_micro(c: &mut Criterion) {
    let v = version(44);
    c.bench_function("encoding_region_m4", |b| {
        b.iter(|| EncodingRegion::generate(black_box(v)))
    });
}

fn bench_region_v10(c: &mut Criterion) {
    let v = version(10);
    c.bench_function("encoding_region_v10", |b| {
        b.iter(|| EncodingRegion::generate(black_box(v)))
    });
}

fn bench_region_v40(c: &mut Criterion) {
    let v = version(40);
    c.bench_function("encoding_region_v40", |b| {
        b.iter(|| EncodingRegion::generate(black_box(v)))
    });
}

fn bench_region_v40_excluding(c: &mut Criterion) {
    let mask = ReservedMask::new(version(40));
    c.bench_function("encoding_region_v40_excluding", |b| {
        b.iter(|| EncodingRegion::generate_excluding(black_box(&mask)))
    });
}

fn bench_blank_symbol_v40(c: &mut Criterion) {
    let v = version(40);
    c.bench_function("blank_symbol_v40", |b| b.iter(|| blank_symbol(black_box(v))));
}

fn bench_all_versions_parallel(c: &mut Criterion) {
    c.bench_function("encoding_region_all_versions_parallel", |b| {
        b.iter(regions_for_all_versions)
    });
}

criterion_group!(
    benches,
    bench_region_micro,
    bench_region_v10,
    bench_region_v40,
    bench_region_v40_excluding,
    bench_blank_symbol_v40,
    bench_all_versions_parallel
);
criterion_main!(benches);

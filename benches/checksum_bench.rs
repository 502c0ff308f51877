use criterion::{Criterion, black_box, criterion_group, criterion_main};

use werte::barcode::{Gtin13, Sscc, has_valid_check_digit, strip_formatting};

fn bench_checksum(c: &mut Criterion) {
    c.bench_function("has_valid_check_digit gtin13", |b| {
        b.iter(|| has_valid_check_digit(black_box("4006381333931"), 13))
    });

    c.bench_function("has_valid_check_digit sscc", |b| {
        b.iter(|| has_valid_check_digit(black_box("806141411234567896"), 18))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("Gtin13::parse plain", |b| {
        b.iter(|| Gtin13::parse(black_box("4006381333931")))
    });

    c.bench_function("Gtin13::parse formatted", |b| {
        b.iter(|| Gtin13::parse(black_box("4 006381 333931")))
    });

    c.bench_function("Sscc::parse", |b| {
        b.iter(|| Sscc::parse(black_box("806141411234567896")))
    });
}

fn bench_strip(c: &mut Criterion) {
    c.bench_function("strip_formatting", |b| {
        b.iter(|| strip_formatting(black_box("4 006381-333931")))
    });
}

criterion_group!(benches, bench_checksum, bench_parse, bench_strip);
criterion_main!(benches);

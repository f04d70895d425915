//! Benchmarks for cell-width measurement and layout.
//!
//! Run with: cargo bench -p cellwidth

use cellwidth::{WidthOptions, clip, width, width_with_options, wrap};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

/// ASCII-only text of various lengths
fn ascii_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// CJK text (width 2 per char)
fn cjk_text(len: usize) -> String {
    "\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Mixed ASCII and CJK
fn mixed_text(len: usize) -> String {
    "Hello \u{4E16}\u{754C}! Test \u{6D4B}\u{8BD5}. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// ZWJ sequences (complex graphemes)
fn zwj_text(count: usize) -> String {
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}".repeat(count)
}

/// ASCII text interleaved with SGR sequences
fn styled_text(len: usize) -> String {
    let mut out = String::new();
    let mut chars = 0;
    let words = ["alpha", "beta", "gamma", "delta"];
    for (i, word) in words.iter().cycle().enumerate() {
        out.push_str(if i % 2 == 0 { "\x1b[31m" } else { "\x1b[0m" });
        out.push_str(word);
        out.push(' ');
        chars += word.len() + 1;
        if chars >= len {
            break;
        }
    }
    out
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_ascii_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/ascii");

    for len in [10, 100, 1000, 10000] {
        let text = ascii_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(width(text)))
        });
    }

    group.finish();
}

fn bench_cjk_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/cjk");

    for len in [10, 100, 1000, 10000] {
        let text = cjk_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(width(text)))
        });
    }

    group.finish();
}

fn bench_mixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/mixed");

    for len in [10, 100, 1000, 10000] {
        let text = mixed_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(width(text)))
        });
    }

    group.finish();
}

fn bench_zwj_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/zwj");

    for count in [1, 10, 50] {
        let text = zwj_text(count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| black_box(width(text)))
        });
    }

    group.finish();
}

fn bench_styled_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/styled");
    let options = WidthOptions::new();

    for len in [100, 1000, 10000] {
        let text = styled_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(width_with_options(text, &options)))
        });
    }

    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    let test_cases = [
        ("ascii", ascii_text(1000)),
        ("cjk", cjk_text(500)),
        ("styled", styled_text(1000)),
    ];

    for (name, text) in test_cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(wrap(text, 40)))
        });
    }

    group.finish();
}

fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");

    let test_cases = [
        ("ascii", ascii_text(1000)),
        ("cjk", cjk_text(500)),
        ("styled", styled_text(1000)),
    ];

    for (name, text) in test_cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| black_box(clip(text, 10, 50)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ascii_width,
    bench_cjk_width,
    bench_mixed_width,
    bench_zwj_width,
    bench_styled_width,
    bench_wrap,
    bench_clip,
);

criterion_main!(benches);

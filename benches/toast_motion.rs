// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast's pure animation math.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_bloom::ui::toast::{motion, Position};
use std::hint::black_box;

fn bench_ease(c: &mut Criterion) {
    c.bench_function("ease_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..=1000 {
                acc += motion::ease(black_box(i as f32 / 1000.0));
            }
            acc
        });
    });
}

fn bench_slide_frame(c: &mut Criterion) {
    c.bench_function("slide_frame_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for i in 0..=1000 {
                let frame = motion::slide_frame(
                    black_box(i as f32 / 1000.0),
                    Position::Bottom,
                    Some(64.0),
                    500.0,
                );
                acc += frame.offset_y + frame.opacity;
            }
            acc
        });
    });
}

criterion_group!(benches, bench_ease, bench_slide_frame);
criterion_main!(benches);

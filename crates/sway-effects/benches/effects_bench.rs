//! Criterion benchmarks for the auto-pan block loop
//!
//! Run with: cargo bench -p sway-effects
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sway_core::{Effect, EnableState, GroupFeatures};
use sway_effects::{AutoPan, AutoPanEffect, PanDelay, PanShape, PanState, PostFilter};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = (i / 2) as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_process_channel(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_channel");
    let pan = AutoPan::new(SAMPLE_RATE);
    pan.params().set_width(1.0);
    pan.params().set_smoothing(0.2);
    pan.params().set_period(0.05);

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut state = PanState::new();
                let mut output = vec![0.0; block_size];
                b.iter(|| {
                    pan.process_channel(
                        &mut state,
                        black_box(&input),
                        &mut output,
                        EnableState::Enabled,
                        GroupFeatures::none(),
                    );
                    black_box(output[0])
                })
            },
        );
    }
    group.finish();
}

fn bench_effect_inplace(c: &mut Criterion) {
    let mut group = c.benchmark_group("autopan_effect_inplace");
    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut effect = AutoPanEffect::new(SAMPLE_RATE);
                effect.params().set_width(0.8);
                effect.set_bpm(Some(128.0));
                let mut buffer = input.clone();
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    effect.process_block_inplace(black_box(&mut buffer));
                    black_box(buffer[0])
                })
            },
        );
    }
    group.finish();
}

fn bench_shape(c: &mut Criterion) {
    let shape = PanShape::new(0.25, 1.0);
    c.bench_function("pan_shape_evaluate_1024", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for phase in 0..1024u64 {
                acc += shape.evaluate(black_box(phase), 48_000.0).target;
            }
            black_box(acc)
        })
    });
}

fn bench_pan_delay(c: &mut Criterion) {
    let input = generate_test_signal(512);
    c.bench_function("pan_delay_512", |b| {
        let mut delay = PanDelay::new();
        let mut amount = 0.0_f32;
        let mut buffer = input.clone();
        b.iter(|| {
            amount = if amount > 0.0 { -0.01 } else { 0.01 };
            delay.set_delay_amount(amount);
            buffer.copy_from_slice(&input);
            delay.process_inplace(black_box(&mut buffer));
            black_box(buffer[0])
        })
    });
}

criterion_group!(
    benches,
    bench_process_channel,
    bench_effect_inplace,
    bench_shape,
    bench_pan_delay
);
criterion_main!(benches);

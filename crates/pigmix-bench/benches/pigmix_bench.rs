//! Benchmarks for pigmix operations.
//!
//! Run with: `cargo bench`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pigmix::{Interpolation, PigmentMixer, PigmentTable, Rgb8, RgbF};
use pigmix_core::Latent;
use pigmix_lut::{codec, latent_to_rgb};

fn test_colors(count: usize) -> Vec<Rgb8> {
    (0..count)
        .map(|i| {
            let i = i as u32;
            Rgb8::new((i * 13 % 256) as u8, (i * 29 % 256) as u8, (i * 71 % 256) as u8)
        })
        .collect()
}

/// Benchmark table decoding.
fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(codec::DECODED_LEN as u64));

    group.bench_function("decode_embedded", |b| {
        b.iter(|| black_box(PigmentTable::embedded().unwrap()))
    });

    group.finish();
}

/// Benchmark the conversions on either side of a mix.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let table = Arc::new(PigmentTable::embedded().unwrap());
    let linear = PigmentMixer::from_table(Arc::clone(&table));
    let tetra = PigmentMixer::from_table(table).with_interpolation(Interpolation::Tetrahedral);

    let colors = test_colors(10000);
    let latents: Vec<Latent> = colors.iter().map(|c| linear.to_latent(*c)).collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("to_latent_trilinear", |b| {
        b.iter(|| {
            colors.iter().map(|c| linear.to_latent(black_box(*c))).collect::<Vec<_>>()
        })
    });

    group.bench_function("to_latent_tetrahedral", |b| {
        b.iter(|| {
            colors.iter().map(|c| tetra.to_latent(black_box(*c))).collect::<Vec<_>>()
        })
    });

    group.bench_function("latent_to_rgb", |b| {
        b.iter(|| {
            latents.iter().map(|l| latent_to_rgb(black_box(l))).collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark blending.
fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");

    let mixer = PigmentMixer::new().unwrap();
    let a = test_colors(10000);
    let b: Vec<Rgb8> = a.iter().rev().copied().collect();
    group.throughput(Throughput::Elements(10000));

    group.bench_function("int8_gamma", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(x, y)| mixer.blend(black_box(*x), black_box(*y), 0.5))
                .collect::<Vec<_>>()
        })
    });

    let af: Vec<RgbF> = a.iter().map(|c| c.convert()).collect();
    let bf: Vec<RgbF> = b.iter().map(|c| c.convert()).collect();
    group.bench_function("float_gamma", |bench| {
        bench.iter(|| {
            af.iter()
                .zip(&bf)
                .map(|(x, y)| mixer.blend(black_box(*x), black_box(*y), 0.5))
                .collect::<Vec<_>>()
        })
    });

    let ends = mixer.endpoints(a[0], b[0]);
    let ratios: Vec<f32> = (0..10000).map(|i| i as f32 / 10000.0).collect();
    group.bench_function("fixed_endpoints", |bench| {
        bench.iter(|| ratios.iter().map(|t| ends.at(black_box(*t))).collect::<Vec<Rgb8>>())
    });

    group.finish();
}

/// Benchmark batch blending at image sizes.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    let mixer = PigmentMixer::new().unwrap();
    for &pixel_count in &[256 * 256, 1920 * 1080] {
        let a = test_colors(pixel_count);
        let b: Vec<Rgb8> = a.iter().rev().copied().collect();

        group.throughput(Throughput::Elements(pixel_count as u64));

        group.bench_with_input(
            BenchmarkId::new("blend_slices", pixel_count),
            &(a, b),
            |bench, (a, b)| bench.iter(|| mixer.blend_slices(black_box(a), black_box(b), 0.5)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_table, bench_convert, bench_blend, bench_batch);

criterion_main!(benches);

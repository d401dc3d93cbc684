//! Benchmarks for tweak-rs operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tweak_core::{Frame, FrameFormat, FrameInfo, FrameMut, Plane, PlaneMut};
use tweak_lut::{build_curve, build_gain, ControlPoints};
use tweak_ops::{apply_lut, rotate_chroma, ChromaRotation, FrameFilter, TweakContext, TweakParams};

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;
/// Padded row length, as a frame server would allocate.
const STRIDE: usize = 1920 + 64;

fn plane_data(height: usize, stride: usize) -> Vec<u8> {
    (0..stride * height).map(|i| (i % 251) as u8).collect()
}

/// Benchmark table construction.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for n in [1usize, 3, 17, 257] {
        let points: Vec<f64> = (0..n).map(|i| (i % 9) as f64 * 5.0 - 20.0).collect();
        let points = ControlPoints::new(points).unwrap();
        group.bench_with_input(BenchmarkId::new("curve", n), &points, |b, p| {
            b.iter(|| build_curve(black_box(p)))
        });
    }

    group.bench_function("gain", |b| b.iter(|| build_gain(black_box(1.25))));
    group.finish();
}

/// Benchmark LUT application on a 1080p luma plane.
fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));

    let src = plane_data(HEIGHT, STRIDE);
    let mut dst = vec![0u8; STRIDE * HEIGHT];
    let lut = build_curve(&ControlPoints::new(vec![0.0, 20.0, -10.0, 5.0]).unwrap());

    group.bench_function("lut_1080p", |b| {
        let s = Plane::new(&src, WIDTH, HEIGHT, STRIDE).unwrap();
        let mut d = PlaneMut::new(&mut dst, WIDTH, HEIGHT, STRIDE).unwrap();
        b.iter(|| apply_lut(black_box(&s), &mut d, &lut).unwrap())
    });

    group.finish();
}

/// Benchmark chroma rotation on 4:2:0 1080p chroma planes.
fn bench_chroma(c: &mut Criterion) {
    let mut group = c.benchmark_group("chroma");
    let (cw, ch, cs) = (WIDTH / 2, HEIGHT / 2, STRIDE / 2);
    group.throughput(Throughput::Elements((cw * ch) as u64));

    let src_u = plane_data(ch, cs);
    let src_v = plane_data(ch, cs);
    let mut dst_u = vec![0u8; cs * ch];
    let mut dst_v = vec![0u8; cs * ch];

    for (name, rotation) in [
        ("identity", ChromaRotation::IDENTITY),
        ("hue_30_sat_1.2", ChromaRotation::from_hue_sat(30.0, 1.2)),
    ] {
        group.bench_function(name, |b| {
            let su = Plane::new(&src_u, cw, ch, cs).unwrap();
            let sv = Plane::new(&src_v, cw, ch, cs).unwrap();
            let mut du = PlaneMut::new(&mut dst_u, cw, ch, cs).unwrap();
            let mut dv = PlaneMut::new(&mut dst_v, cw, ch, cs).unwrap();
            b.iter(|| rotate_chroma(&su, &sv, &mut du, &mut dv, black_box(&rotation)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark a whole 4:2:0 frame through the tweak context.
fn bench_frame(c: &mut Criterion) {
    let info = FrameInfo::new(FrameFormat::YUV420P8, WIDTH, HEIGHT);
    let params = TweakParams {
        hue: 12.0,
        sat: 1.1,
        luma: Some(vec![0.0, 10.0, -5.0]),
    };
    let ctx = TweakContext::new(info, &params).unwrap();

    let planes: Vec<(usize, usize, usize)> = (0..3)
        .map(|p| {
            let (w, h) = info.plane_dimensions(p);
            (w, h, if p == 0 { STRIDE } else { STRIDE / 2 })
        })
        .collect();
    let src: Vec<Vec<u8>> = planes.iter().map(|&(_, h, s)| plane_data(h, s)).collect();
    let mut dst: Vec<Vec<u8>> = planes.iter().map(|&(_, h, s)| vec![0u8; s * h]).collect();

    let mut group = c.benchmark_group("frame");
    group.throughput(Throughput::Elements(info.sample_count() as u64));
    group.bench_function("tweak_yuv420p8_1080p", |b| {
        let src_frame = Frame::new(
            info,
            src.iter()
                .zip(&planes)
                .map(|(d, &(w, h, s))| Plane::new(d, w, h, s).unwrap())
                .collect(),
        )
        .unwrap();
        let mut dst_frame = FrameMut::new(
            info,
            dst.iter_mut()
                .zip(&planes)
                .map(|(d, &(w, h, s))| PlaneMut::new(d, w, h, s).unwrap())
                .collect(),
        )
        .unwrap();
        b.iter(|| ctx.process(black_box(&src_frame), &mut dst_frame).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_apply, bench_chroma, bench_frame);
criterion_main!(benches);

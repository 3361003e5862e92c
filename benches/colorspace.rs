#[path = "../util/util.rs"]
mod util;

use util::{bench_images, to_rgbaimage};

use std::time::Duration;

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, Bencher, BenchmarkId, Criterion,
    SamplingMode,
};
use gamutshift::{
    convert_color_space, convert_color_space_par, to_gray, to_gray_par, ColorSpace, ImagePipeline,
    PixelBuffer,
};

fn bench(
    c: &mut Criterion,
    group: &str,
    mut f: impl FnMut(&mut Bencher<WallTime>, &(ColorSpace, &PixelBuffer)),
) {
    let mut group = c.benchmark_group(group);
    group
        .sample_size(30)
        .noise_threshold(0.05)
        .sampling_mode(SamplingMode::Flat)
        .warm_up_time(Duration::from_millis(500));

    for space in ColorSpace::ALL {
        for (path, buffer) in bench_images() {
            group.bench_with_input(
                BenchmarkId::new(space.to_string(), path),
                &(space, buffer),
                &mut f,
            );
        }
    }
}

fn convert_single(c: &mut Criterion) {
    bench(c, "convert_single", |b, &(space, buffer)| {
        b.iter(|| convert_color_space(buffer, space))
    })
}

fn convert_par(c: &mut Criterion) {
    bench(c, "convert_par", |b, &(space, buffer)| {
        b.iter(|| convert_color_space_par(buffer, space))
    })
}

fn convert_rgbaimage_par(c: &mut Criterion) {
    let images = bench_images()
        .iter()
        .map(|(path, buffer)| (path.clone(), to_rgbaimage(buffer)))
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("convert_rgbaimage_par");
    group.sample_size(30).sampling_mode(SamplingMode::Flat);

    for (path, image) in &images {
        group.bench_with_input(BenchmarkId::from_parameter(path), image, |b, image| {
            b.iter(|| {
                ImagePipeline::from(image)
                    .operation(ColorSpace::AdobeRgb)
                    .rgbaimage_par()
            })
        });
    }
}

fn gray(c: &mut Criterion) {
    let mut group = c.benchmark_group("gray");
    group.sample_size(30).sampling_mode(SamplingMode::Flat);

    for (path, buffer) in bench_images() {
        group.bench_with_input(BenchmarkId::new("single", path), buffer, |b, buffer| {
            b.iter(|| to_gray(buffer))
        });
        group.bench_with_input(BenchmarkId::new("par", path), buffer, |b, buffer| {
            b.iter(|| to_gray_par(buffer))
        });
    }
}

criterion_group!(benches, convert_single, convert_par, convert_rgbaimage_par, gray);
criterion_main!(benches);

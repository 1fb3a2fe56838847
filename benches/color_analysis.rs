use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use leaf_colorscan::{
    color::ColorConverter, histogram::ValueDistribution, image_loader::BgrImage,
    ColorClassificationConfig, ColorProportionAnalyzer,
};

/// Smartphone-ish frame with a mix of leaf colors and black background
fn synthetic_leaf(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| match (x / 16 + y / 16) % 4 {
        0 => Rgb([200, 200, 43]),
        1 => Rgb([43, 200, 43]),
        2 => Rgb([120, 80, 30]),
        _ => Rgb([0, 0, 0]),
    })
}

fn benchmark_color_analysis(c: &mut Criterion) {
    let rgb = synthetic_leaf(1024, 768);
    let bgr = BgrImage::from_rgb_image(&rgb);
    let analyzer = ColorProportionAnalyzer::new();
    let converter = ColorConverter::new();
    let distribution = ColorClassificationConfig::distribution_defaults();

    c.bench_function("hsv_convert_1024x768", |b| {
        b.iter(|| converter.convert_image(black_box(&bgr)))
    });

    c.bench_function("proportions_1024x768", |b| {
        b.iter(|| analyzer.analyze(black_box(&bgr)))
    });

    c.bench_function("value_distribution_1024x768", |b| {
        b.iter(|| ValueDistribution::from_rgb(black_box(&rgb), &distribution, 50))
    });
}

criterion_group!(benches, benchmark_color_analysis);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use img2cpp_core::{RasterImage, convert_dither_blend, convert_single};

// SSD1306 sized panel
const WIDTH: usize = 128;
const HEIGHT: usize = 64;

fn gradient(invert: bool) -> RasterImage {
    let pixels = (0..WIDTH * HEIGHT)
        .map(|i| {
            let v = ((i % WIDTH) * 255 / (WIDTH - 1)) as u8;
            let v = if invert { 255 - v } else { v };
            [v, v, v, 255]
        })
        .collect();
    RasterImage::new(WIDTH, HEIGHT, pixels).expect("valid gradient")
}

fn bench_convert(c: &mut Criterion) {
    let first = gradient(false);
    let second = gradient(true);

    c.bench_function("convert_single", |b| {
        b.iter(|| convert_single(black_box(&first), "gradient.png"))
    });
    c.bench_function("convert_dither_blend_10", |b| {
        b.iter(|| convert_dither_blend(black_box(&first), black_box(&second), 10))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);

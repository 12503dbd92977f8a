//! End-to-end render benchmark: shaping, layout, and composition for a
//! typical signature with an opaque 140x70 logo.

use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use sigil_core::{RenderConfig, SignatureData};
use sigil_render::SignatureRenderer;

fn sample_data() -> SignatureData {
    SignatureData::new(
        "Ana Silva",
        "Engineer",
        "1 Main St",
        "210000000",
        "910000000",
        "ana@example.com",
        "example.com",
    )
    .expect("benchmark data is valid")
}

fn bench_render(c: &mut Criterion) {
    let mut renderer = SignatureRenderer::new(RenderConfig::default());
    let data = sample_data();
    let logo = RgbaImage::from_pixel(140, 70, Rgba([0, 80, 160, 255]));

    c.bench_function("render_full_signature", |b| {
        b.iter(|| renderer.render(&data, &logo).expect("render succeeds"))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

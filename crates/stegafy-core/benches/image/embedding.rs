use criterion::{criterion_group, criterion_main, Criterion};
use stegafy_core::media::{load_secret_image, load_surface};
use stegafy_core::StegoCodec;

pub fn image_embedding(c: &mut Criterion) {
    c.bench_function("Image Embedding", |b| {
        let plain_image =
            load_surface("tests/images/plain/carrier-image.png").expect("Input image is not readable.");
        let secret = load_secret_image("tests/images/secrets/checker-16x12.png")
            .expect("Secret image is not readable.");

        b.iter(|| {
            let mut carrier = plain_image.clone();
            StegoCodec::embed_image(&mut carrier, &secret, true).expect("Cannot hide secret image");
        })
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);

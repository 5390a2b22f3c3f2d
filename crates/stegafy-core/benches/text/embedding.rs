use criterion::{criterion_group, criterion_main, Criterion};
use stegafy_core::media::load_surface;
use stegafy_core::StegoCodec;

pub fn text_embedding(c: &mut Criterion) {
    c.bench_function("Text Embedding", |b| {
        let plain_image =
            load_surface("tests/images/plain/carrier-image.png").expect("Input image is not readable.");

        b.iter(|| {
            let mut carrier = plain_image.clone();
            StegoCodec::embed_text(&mut carrier, "Hello World!", Some("Secret"), 2)
                .expect("Cannot hide secret message");
        })
    });
}

pub fn text_decoding(c: &mut Criterion) {
    c.bench_function("Text Decoding", |b| {
        let mut carrier =
            load_surface("tests/images/plain/carrier-image.png").expect("Input image is not readable.");
        StegoCodec::embed_text(&mut carrier, "Hello World!", None, 1)
            .expect("Cannot hide secret message");

        b.iter(|| StegoCodec::decode(&carrier).expect("Failed to unveil the message"))
    });
}

criterion_group!(benches, text_embedding, text_decoding);
criterion_main!(benches);

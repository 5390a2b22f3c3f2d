use std::fs;
use tempfile::TempDir;

use stegafy_core::commands::unveil;
use stegafy_core::media::load_secret_image;
use stegafy_core::*;

pub const TEXT_WITHOUT_KEYWORD: &str = "tests/images/with_text/hello_world.png";
pub const TEXT_WITH_KEYWORD_3_BITS: &str = "tests/images/with_text/hello_world_keyword_3_bits.png";
pub const IMAGE: &str = "tests/images/with_image/checker.png";
pub const SCRAMBLED_IMAGE: &str = "tests/images/with_image/checker_scrambled.png";
pub const HIDDEN_SECRET: &str = "tests/images/secrets/checker-16x12.png";

#[test]
fn ensure_text_without_keyword_unveils() {
    let out_dir = TempDir::new().unwrap();

    let payload = unveil(TEXT_WITHOUT_KEYWORD.as_ref(), out_dir.as_ref()).unwrap();

    let contents = fs::read_to_string(out_dir.as_ref().join("secret-message.txt")).unwrap();
    assert_eq!(contents, "Hello World");
    assert!(!out_dir
        .as_ref()
        .join("secret-message.encrypted.txt")
        .exists());
    assert!(matches!(payload, Payload::Text(t) if t.bits_per_channel == 1));
}

#[test]
fn ensure_text_with_keyword_and_3_bits_unveils() {
    let out_dir = TempDir::new().unwrap();

    let payload = unveil(TEXT_WITH_KEYWORD_3_BITS.as_ref(), out_dir.as_ref()).unwrap();

    let contents = fs::read_to_string(out_dir.as_ref().join("secret-message.txt")).unwrap();
    assert_eq!(contents, "HELLOWORLD");
    let cipher_text =
        fs::read_to_string(out_dir.as_ref().join("secret-message.encrypted.txt")).unwrap();
    assert_eq!(cipher_text, "RIJVSUYVJN");

    match payload {
        Payload::Text(text) => {
            assert_eq!(text.encryption_key.as_deref(), Some("KEY"));
            assert_eq!(text.bits_per_channel, 3);
        }
        Payload::Image(_) => panic!("expected a text secret"),
    }
}

#[test]
fn ensure_image_unveils_apart_from_the_header_cells() {
    let out_dir = TempDir::new().unwrap();
    let expected = load_secret_image(HIDDEN_SECRET).unwrap();

    let Payload::Image(image) = unveil(IMAGE.as_ref(), out_dir.as_ref()).unwrap() else {
        panic!("expected an image secret");
    };

    assert_eq!(image.dimensions(), (64, 48));
    let (width, height) = expected.dimensions();
    let unveiled = image.crop(width, height).unwrap();
    // the header pixels own these two cells
    assert_eq!(&unveiled.pixels()[..2], &[false, false]);
    assert_eq!(&unveiled.pixels()[2..], &expected.pixels()[2..]);
    assert!(out_dir.as_ref().join("secret-image.png").exists());
}

#[test]
fn ensure_scrambled_image_unveils() {
    let out_dir = TempDir::new().unwrap();
    let expected = load_secret_image(HIDDEN_SECRET).unwrap();

    let Payload::Image(image) = unveil(SCRAMBLED_IMAGE.as_ref(), out_dir.as_ref()).unwrap() else {
        panic!("expected an image secret");
    };

    let (width, height) = expected.dimensions();
    assert_eq!(image.crop(width, height).unwrap(), expected);
}

#[test]
fn ensure_headers_of_known_secrets_are_read() {
    let carrier = media::load_surface(SCRAMBLED_IMAGE).unwrap();

    assert_eq!(
        header::read_header(&carrier).unwrap(),
        HeaderState {
            has_secret_message: true,
            has_encryption: true,
            bits_per_color_channel: 1,
            is_secret_text: false,
        }
    );
}

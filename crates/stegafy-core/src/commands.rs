//! One call functions over paths, each a thin shortcut for the [`crate::api`]
//! builders.

use std::path::Path;

use crate::media::CodecOptions;
use crate::{api, Payload, Result};

/// Hides `message` in `carrier` and saves the result as `output`, a keyword
/// turns on the substitution cipher.
pub fn hide_text(
    carrier: &Path,
    output: &Path,
    message: &str,
    keyword: Option<String>,
    opts: &CodecOptions,
) -> Result<()> {
    api::hide::prepare()
        .with_image(carrier)
        .with_output(output)
        .with_message(message)
        .use_keyword(keyword)
        .with_options(*opts)
        .execute()
}

/// Hides the black and white version of `secret_image` in `carrier`.
pub fn hide_image(
    carrier: &Path,
    output: &Path,
    secret_image: &Path,
    opts: &CodecOptions,
) -> Result<()> {
    api::hide::prepare()
        .with_image(carrier)
        .with_output(output)
        .with_secret_image(secret_image)
        .with_options(*opts)
        .execute()
}

/// Unveils whatever `secret_media` hides into the `destination` folder.
pub fn unveil(secret_media: &Path, destination: &Path) -> Result<Payload> {
    api::unveil::prepare()
        .from_secret_file(secret_media)
        .into_output_folder(destination)
        .execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CARRIER_PNG;
    use crate::StegafyError;
    use tempfile::tempdir;

    #[test]
    fn should_hide_and_unveil_text() -> Result<()> {
        let temp_dir = tempdir()?;
        let output = temp_dir.path().join("carrier.png");
        let opts = CodecOptions::default().with_bits_per_color_channel(2);

        hide_text(Path::new(CARRIER_PNG), &output, "Attack at dawn", None, &opts)?;

        match unveil(&output, temp_dir.path())? {
            Payload::Text(text) => assert_eq!(text.message, "Attack at dawn"),
            Payload::Image(_) => panic!("expected a text secret"),
        }
        Ok(())
    }

    #[test]
    fn should_treat_an_empty_keyword_as_plain_text() -> Result<()> {
        let temp_dir = tempdir()?;
        let output = temp_dir.path().join("carrier.png");

        hide_text(
            Path::new(CARRIER_PNG),
            &output,
            "stays as is",
            Some(String::new()),
            &CodecOptions::default(),
        )?;

        match unveil(&output, temp_dir.path())? {
            Payload::Text(text) => {
                assert_eq!(text.message, "stays as is");
                assert_eq!(text.encryption_key, None);
            }
            Payload::Image(_) => panic!("expected a text secret"),
        }
        Ok(())
    }

    #[test]
    fn should_hide_an_image() -> Result<()> {
        let temp_dir = tempdir()?;
        let output = temp_dir.path().join("carrier.png");

        hide_image(
            Path::new(CARRIER_PNG),
            &output,
            Path::new("tests/images/secrets/checker-16x12.png"),
            &CodecOptions::default(),
        )?;

        assert!(matches!(
            unveil(&output, temp_dir.path())?,
            Payload::Image(_)
        ));
        Ok(())
    }

    #[test]
    fn should_not_hide_a_carrier_bigger_than_itself() -> Result<()> {
        let temp_dir = tempdir()?;
        let output = temp_dir.path().join("carrier.png");

        let result = hide_image(
            Path::new("tests/images/secrets/checker-16x12.png"),
            &output,
            Path::new(CARRIER_PNG),
            &CodecOptions::default(),
        );

        assert!(matches!(
            result,
            Err(StegafyError::SecretTooLarge(64, 48, 16, 12))
        ));
        assert!(!output.exists());
        Ok(())
    }
}

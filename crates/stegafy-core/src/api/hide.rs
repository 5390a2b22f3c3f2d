use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Keyword;
use crate::media::{load_secret_image, load_surface, CodecOptions, Persist};
use crate::{Payload, Result, SecretText, StegafyError, StegoCodec};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    secret_image: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    keyword: Keyword,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// A black and white image to hide instead of a text, every pixel that
    /// is not pure black counts as white.
    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// the carrier image
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the keyword, the letters of the message get encrypted with it
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Set the keyword
    /// If `None` is passed, the message is hidden as plain text
    pub fn use_keyword<S: AsRef<str>>(mut self, keyword: Option<S>) -> Self {
        self.keyword = keyword.map(|s| s.as_ref().to_string()).into();
        self
    }

    pub fn execute(self) -> Result<()> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(StegafyError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegafyError::TargetNotSet);
        };

        let payload = match (self.message, self.secret_image) {
            (Some(message), secret_image) => {
                if let Some(secret_image) = secret_image {
                    warn!("both a message and {secret_image:?} given, hiding the message only");
                }
                let text = SecretText::new(message)
                    .with_bits_per_channel(self.options.bits_per_color_channel);
                Payload::Text(match self.keyword.as_deref() {
                    Some(keyword) => text.with_encryption_key(keyword),
                    None => text,
                })
            }
            (None, Some(secret_image)) => Payload::Image(load_secret_image(secret_image)?),
            (None, None) => return Err(StegafyError::NullPayload),
        };

        let mut carrier = load_surface(&image)?;
        StegoCodec::embed(&mut carrier, &payload, self.options.scramble_image)?;
        debug!("saving carrier {image:?} with its secret to {output:?}");

        carrier.save_as(&output)
    }

    fn validate(&self) -> Result<()> {
        if self.message.is_none() && self.secret_image.is_none() {
            return Err(StegafyError::NullPayload);
        }

        self.options.validate()
    }
}

use std::path::{Path, PathBuf};

use log::info;

use super::shared::{ENCRYPTED_MESSAGE_FILE, SECRET_IMAGE_FILE, SECRET_MESSAGE_FILE};
use crate::media::{load_surface, save_text, Persist};
use crate::{Payload, Result, StegafyError, StegoCodec};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the image that contains the secret to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the secret will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Unveils the secret and writes it to the output folder.
    ///
    /// A text ends up in `secret-message.txt`, an encrypted text additionally
    /// leaves its cipher text in `secret-message.encrypted.txt`. An image is
    /// written as `secret-image.png`.
    pub fn execute(self) -> Result<Payload> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegafyError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(StegafyError::TargetNotSet);
        };

        let payload = StegoCodec::decode(&load_surface(&secret_media)?)?;
        match &payload {
            Payload::Text(text) => {
                save_text(output_folder.join(SECRET_MESSAGE_FILE), &text.message)?;
                if let Some(cipher_text) = &text.cipher_text {
                    save_text(output_folder.join(ENCRYPTED_MESSAGE_FILE), cipher_text)?;
                }
                info!("unveiled a text of {} characters", text.message.len());
            }
            Payload::Image(image) => {
                image
                    .to_visual()?
                    .save_as(&output_folder.join(SECRET_IMAGE_FILE))?;
                info!("unveiled an image secret");
            }
        }

        Ok(payload)
    }
}

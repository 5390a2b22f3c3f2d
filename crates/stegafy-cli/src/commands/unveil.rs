use std::path::PathBuf;

use clap::Args;
use stegafy_core::Payload;

use crate::CliResult;

/// Unveils a text message or an image from a PNG or BMP image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Final data will be stored in that folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        required = true
    )]
    pub output_folder: PathBuf,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        match stegafy_core::commands::unveil(&self.media, &self.output_folder)? {
            Payload::Text(text) => println!("{}", text.message),
            Payload::Image(_) => println!(
                "secret image written to {}",
                self.output_folder.join("secret-image.png").display()
            ),
        }

        Ok(())
    }
}

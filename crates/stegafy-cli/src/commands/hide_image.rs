use std::path::PathBuf;

use clap::Args;
use log::warn;
use stegafy_core::CodecOptions;

use crate::CliResult;

/// Hides the black and white version of an image in a PNG or BMP image
#[derive(Args, Debug)]
pub struct HideImageArgs {
    /// Carrier image, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, PNG or BMP
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Image to hide, every pixel that is not black counts as white
    #[arg(
        short = 's',
        long = "secret",
        value_name = "secret image file",
        required = true
    )]
    pub secret_image: PathBuf,

    /// Swaps the upper and lower half of the hidden plane
    #[arg(long)]
    pub scramble: bool,
}

impl HideImageArgs {
    pub fn run(self, bits_per_channel: u8) -> CliResult<()> {
        stegafy_core::commands::hide_image(
            &self.media,
            &self.write_to_file,
            &self.secret_image,
            &self.codec_options(bits_per_channel),
        )
    }

    /// Image secrets always live in 1 bit of the blue channel, the bits per
    /// channel option only applies to text messages.
    fn codec_options(&self, bits_per_channel: u8) -> CodecOptions {
        let options = CodecOptions::default().with_scramble_image(self.scramble);
        if bits_per_channel != options.bits_per_color_channel {
            warn!("--bits-per-channel {bits_per_channel} has no effect on hidden images, ignored");
        }

        options
    }
}

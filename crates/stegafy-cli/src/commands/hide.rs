use std::path::PathBuf;

use clap::Args;
use stegafy_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in a PNG or BMP image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Keyword used to encrypt the letters of the message
    #[arg(short, long, value_name = "keyword")]
    pub keyword: Option<String>,

    /// Asks for the keyword without showing it
    #[arg(long, conflicts_with = "keyword")]
    pub ask_keyword: bool,

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

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let keyword = if self.ask_keyword {
            crate::cli::ask_for_keyword(true)?
        } else {
            self.keyword
        };

        stegafy_core::commands::hide_text(
            &self.media,
            &self.write_to_file,
            &self.message,
            keyword,
            &options,
        )
    }
}

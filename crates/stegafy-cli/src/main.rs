use clap::Parser;
use stegafy_core::CodecOptions;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = stegafy_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Hide(hide) => hide.run(
            CodecOptions::default().with_bits_per_color_channel(args.bits_per_channel),
        ),
        Commands::HideImage(hide_image) => hide_image.run(args.bits_per_channel),
        Commands::Unveil(unveil) => unveil.run(),
    }
}

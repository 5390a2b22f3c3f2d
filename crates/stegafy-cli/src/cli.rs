use clap::{Parser, Subcommand};
use dialoguer::Password;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Low bits of red, green and blue that carry a text message (1 to 8),
    /// hidden images always use 1
    #[arg(
        short,
        long = "bits-per-channel",
        value_name = "bits",
        default_value = "1",
        global = true
    )]
    pub bits_per_channel: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    HideImage(hide_image::HideImageArgs),
    Unveil(unveil::UnveilArgs),
}

/// Prompts for a keyword without echoing it, an empty answer means none.
pub fn ask_for_keyword(confirm: bool) -> CliResult<Option<String>> {
    let mut prompt = Password::new()
        .with_prompt("Keyword")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Repeat keyword", "Keywords do not match");
    }
    let keyword = prompt.interact().map_err(std::io::Error::other)?;

    Ok(Some(keyword).filter(|k| !k.is_empty()))
}

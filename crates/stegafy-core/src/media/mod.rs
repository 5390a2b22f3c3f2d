//! The image file side of things: decoding carriers from disk and writing
//! the results back.

pub mod codec_options;
mod files;

use std::path::Path;

pub use codec_options::CodecOptions;
pub use files::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use image::ImageFormat;
use log::{debug, error};

use super::Persist;
use crate::error::StegafyError;
use crate::monochrome::MonochromeImage;
use crate::result::Result;
use crate::surface::{PixelAccess, PixelSurface};

/// Picks the container format by file extension.
///
/// PNG, BMP and JPEG can be read, only the lossless PNG and BMP can be
/// written, a JPEG encoder would wipe out the hidden bits.
fn image_format(path: &Path, for_writing: bool) -> Result<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or(StegafyError::UnsupportedMedia)?;

    match ext.as_str() {
        "png" => Ok(ImageFormat::Png),
        "bmp" => Ok(ImageFormat::Bmp),
        "jpg" | "jpeg" if !for_writing => Ok(ImageFormat::Jpeg),
        _ => Err(StegafyError::UnsupportedMedia),
    }
}

/// decodes an image file into a BGRA surface
pub fn load_surface(path: impl AsRef<Path>) -> Result<PixelSurface> {
    let path = path.as_ref();
    let format = image_format(path, false)?;
    let image = image::open(path)
        .map_err(|e| {
            error!("Error reading image {path:?}: {e}");
            StegafyError::InvalidImageMedia
        })?
        .to_rgba8();
    debug!(
        "loaded {format:?} image {path:?} with {}x{} pixels",
        image.width(),
        image.height()
    );

    Ok(PixelSurface::from_rgba_image(&image))
}

/// loads any image as a black and white secret, everything not black is white
pub fn load_secret_image(path: impl AsRef<Path>) -> Result<MonochromeImage> {
    MonochromeImage::from_visual(&load_surface(path)?)
}

pub fn save_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|source| StegafyError::WriteError { source })?;
    file.write_all(text.as_bytes())
        .map_err(|source| StegafyError::WriteError { source })
}

impl PixelSurface {
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W, format: ImageFormat) -> Result<()> {
        if self.pixel_count() == 0 {
            error!("Error saving image: a surface without pixels cannot be encoded");
            return Err(StegafyError::ImageEncodingError);
        }
        self.to_rgba_image()
            .write_to(&mut writer, format)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegafyError::ImageEncodingError
            })
    }
}

impl Persist for PixelSurface {
    /// Encodes in memory first, the target file is only created once the
    /// encoding succeeded.
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let format = image_format(file, true)?;
        debug!(
            "saving {}x{} pixels as {format:?} to {file:?}",
            self.width(),
            self.height()
        );
        let mut encoded = Vec::new();
        self.save_to_writer(Cursor::new(&mut encoded), format)?;

        std::fs::write(file, encoded).map_err(|e| {
            error!("Error writing file {file:?}: {e}");
            StegafyError::WriteError { source: e }
        })
    }
}

impl Persist for MonochromeImage {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        self.to_visual()?.save_as(file)
    }
}

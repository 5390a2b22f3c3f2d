use log::trace;

use crate::bits::{get_lsb, set_lsb};
use crate::error::StegafyError;
use crate::result::Result;
use crate::surface::{Color, PixelAccess, PixelSurface};

/// A black and white plane, row major, `true` is white.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MonochromeImage {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl MonochromeImage {
    /// `pixels.len()` has to be `width * height`
    pub fn new(width: u32, height: u32, pixels: Vec<bool>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(StegafyError::InvalidPixelBuffer {
                len: pixels.len(),
                width,
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// every pixel that is not black becomes white
    pub fn from_visual(source: &PixelSurface) -> Result<Self> {
        Self::from_fn(source, |c| !c.is_black())
    }

    /// Reads the blue channel LSB plane of a carrier, header pixels included.
    pub fn from_embedded_secret(carrier: &PixelSurface) -> Result<Self> {
        Self::from_fn(carrier, |c| get_lsb(c.b))
    }

    fn from_fn(source: &PixelSurface, is_white: impl Fn(&Color) -> bool) -> Result<Self> {
        let (width, height) = source.dimensions();
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(is_white(&source.get_color(x, y)?));
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// opaque white and black pixels, 1x1 DPI
    pub fn to_visual(&self) -> Result<PixelSurface> {
        let mut surface =
            PixelSurface::filled(self.width, self.height, Color::BLACK).with_dpi(1.0, 1.0);
        for (i, white) in self.pixels.iter().enumerate() {
            if *white {
                let (x, y) = self.coordinates(i);
                surface.set_color(x, y, Color::WHITE)?;
            }
        }

        Ok(surface)
    }

    /// Swaps the upper half of the rows with the lower half, row for row.
    ///
    /// With an odd height the middle row stays where it is. Flipping twice
    /// gives back the original.
    pub fn get_flipped(&self) -> Self {
        let width = self.width as usize;
        let height = self.height as usize;
        let half = height / 2;
        let lower_start = height - half;

        let mut pixels = self.pixels.clone();
        for row in 0..half {
            let upper = row * width;
            let lower = (lower_start + row) * width;
            pixels[upper..upper + width].copy_from_slice(&self.pixels[lower..lower + width]);
            pixels[lower..lower + width].copy_from_slice(&self.pixels[upper..upper + width]);
        }

        Self {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Writes this plane into the blue channel LSBs of the carrier.
    ///
    /// Nothing but the blue LSB of the covered pixels changes. A plane that is
    /// wider or taller than the carrier is rejected before anything is written.
    pub fn embed_into(&self, carrier: &mut PixelSurface) -> Result<()> {
        self.ensure_fits_into(carrier)?;
        trace!(
            "embedding a {}x{} monochrome plane",
            self.width,
            self.height
        );

        for (i, white) in self.pixels.iter().enumerate() {
            let (x, y) = self.coordinates(i);
            let mut color = carrier.get_color(x, y)?;
            color.b = set_lsb(color.b, *white);
            carrier.set_color(x, y, color)?;
        }

        Ok(())
    }

    pub fn ensure_fits_into(&self, carrier: &PixelSurface) -> Result<()> {
        let (width, height) = carrier.dimensions();
        if self.width > width || self.height > height {
            return Err(StegafyError::SecretTooLarge(
                self.width,
                self.height,
                width,
                height,
            ));
        }

        Ok(())
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn is_white(&self, x: u32, y: u32) -> Result<bool> {
        self.check_bounds(x, y)?;

        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// top left `width` x `height` part
    pub fn crop(&self, width: u32, height: u32) -> Result<Self> {
        if width > self.width || height > self.height {
            return Err(StegafyError::OutOfBounds {
                x: width.saturating_sub(1),
                y: height.saturating_sub(1),
                width: self.width,
                height: self.height,
            });
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as usize {
            let start = y * self.width as usize;
            pixels.extend_from_slice(&self.pixels[start..start + width as usize]);
        }

        Self::new(width, height, pixels)
    }

    #[inline]
    fn coordinates(&self, i: usize) -> (u32, u32) {
        (
            (i % self.width as usize) as u32,
            (i / self.width as usize) as u32,
        )
    }
}

impl PixelAccess for MonochromeImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_at(&self, x: u32, y: u32) -> Result<Color> {
        Ok(if self.is_white(x, y)? {
            Color::WHITE
        } else {
            Color::BLACK
        })
    }
}

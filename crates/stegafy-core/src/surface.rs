use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::StegafyError;
use crate::result::Result;

/// number of bytes per pixel, channels are stored as B, G, R, A
pub const BYTES_PER_PIXEL: usize = 4;

const BLUE: usize = 0;
const GREEN: usize = 1;
const RED: usize = 2;
const ALPHA: usize = 3;

/// DPI used when the container does not tell
pub const DEFAULT_DPI: f64 = 96.0;

/// 4 channel color value
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// alpha is not considered, a transparent black is still black
    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Shared read access to anything that is a grid of colors.
pub trait PixelAccess {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn color_at(&self, x: u32, y: u32) -> Result<Color>;

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(StegafyError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        Ok(())
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// A carrier image as raw BGRA bytes plus its metadata.
///
/// The surface owns its buffer, a codec call borrows it mutably for the whole
/// call so there is always exactly one writer.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
    width: u32,
    dpi_x: f64,
    dpi_y: f64,
    pixels: Vec<u8>,
}

impl PixelSurface {
    /// wraps a BGRA buffer, the height is derived from the buffer length
    pub fn new(pixels: Vec<u8>, width: u32, dpi_x: f64, dpi_y: f64) -> Result<Self> {
        let row_len = width as usize * BYTES_PER_PIXEL;
        if width == 0 || pixels.len() % row_len != 0 {
            return Err(StegafyError::InvalidPixelBuffer {
                len: pixels.len(),
                width,
            });
        }

        Ok(Self {
            width,
            dpi_x,
            dpi_y,
            pixels,
        })
    }

    /// A surface of the given size where every pixel has the same color.
    ///
    /// A width of 0 gives an empty surface, whatever the height.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);
        for _ in 0..(width as usize * height as usize) {
            pixels.extend_from_slice(&[color.b, color.g, color.r, color.a]);
        }

        Self {
            width,
            dpi_x: DEFAULT_DPI,
            dpi_y: DEFAULT_DPI,
            pixels,
        }
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let mut pixels = Vec::with_capacity(image.as_raw().len());
        for Rgba([r, g, b, a]) in image.pixels() {
            pixels.extend_from_slice(&[*b, *g, *r, *a]);
        }

        Self {
            width: image.width(),
            dpi_x: DEFAULT_DPI,
            dpi_y: DEFAULT_DPI,
            pixels,
        }
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height(), |x, y| {
            let o = self.offset(x, y);
            Rgba([
                self.pixels[o + RED],
                self.pixels[o + GREEN],
                self.pixels[o + BLUE],
                self.pixels[o + ALPHA],
            ])
        })
    }

    pub fn with_dpi(mut self, dpi_x: f64, dpi_y: f64) -> Self {
        self.dpi_x = dpi_x;
        self.dpi_y = dpi_y;
        self
    }

    pub fn dpi_x(&self) -> f64 {
        self.dpi_x
    }

    pub fn dpi_y(&self) -> f64 {
        self.dpi_y
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// raw BGRA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    pub fn get_color(&self, x: u32, y: u32) -> Result<Color> {
        self.check_bounds(x, y)?;
        let o = self.offset(x, y);

        Ok(Color::rgba(
            self.pixels[o + RED],
            self.pixels[o + GREEN],
            self.pixels[o + BLUE],
            self.pixels[o + ALPHA],
        ))
    }

    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.check_bounds(x, y)?;
        let o = self.offset(x, y);
        self.pixels[o + RED] = color.r;
        self.pixels[o + GREEN] = color.g;
        self.pixels[o + BLUE] = color.b;
        self.pixels[o + ALPHA] = color.a;

        Ok(())
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

impl PixelAccess for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    /// a surface without columns has no rows either
    fn height(&self) -> u32 {
        let row_len = BYTES_PER_PIXEL * self.width as usize;
        if row_len == 0 {
            return 0;
        }
        (self.pixels.len() / row_len) as u32
    }

    fn color_at(&self, x: u32, y: u32) -> Result<Color> {
        self.get_color(x, y)
    }
}

impl From<&RgbaImage> for PixelSurface {
    fn from(image: &RgbaImage) -> Self {
        Self::from_rgba_image(image)
    }
}

//! The two header pixels that describe what a carrier hides.
//!
//! | pixel (x, y) | channel | meaning                                    |
//! |--------------|---------|--------------------------------------------|
//! | (0, 0)       | R, G, B | all `212` → a secret is present, else black |
//! | (1, 0)       | R (LSB) | `1` → the secret is encrypted               |
//! | (1, 0)       | G       | popcount → bits per color channel (1..=8)   |
//! | (1, 0)       | B (LSB) | `1` → text secret, `0` → image secret       |
//!
//! Both pixels are the first two in row major order and are never used for
//! text payload bits.

use crate::bits::{get_lsb, pop_count, set_lsb, set_pop_count};
use crate::error::StegafyError;
use crate::result::Result;
use crate::surface::{Color, PixelAccess, PixelSurface};

/// value of the red, green and blue channel of the sentinel pixel
pub const SECRET_MARKER: u8 = 212;

pub const SENTINEL_PIXEL: (u32, u32) = (0, 0);
pub const FLAGS_PIXEL: (u32, u32) = (1, 0);

/// number of pixels reserved at the start of the row major walk
pub const HEADER_PIXEL_COUNT: usize = 2;

pub const MIN_BITS_PER_CHANNEL: u8 = 1;
pub const MAX_BITS_PER_CHANNEL: u8 = 8;

/// The logical content of the header pixels.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HeaderState {
    pub has_secret_message: bool,
    pub has_encryption: bool,
    pub bits_per_color_channel: u8,
    pub is_secret_text: bool,
}

/// Working copy of the two header pixels.
///
/// Setters only change the copy, [`HeaderPixels::write_to`] puts both pixels
/// back into the carrier.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HeaderPixels {
    sentinel: Color,
    flags: Color,
}

impl HeaderPixels {
    pub fn read_from(surface: &PixelSurface) -> Result<Self> {
        Ok(Self {
            sentinel: surface.get_color(SENTINEL_PIXEL.0, SENTINEL_PIXEL.1)?,
            flags: surface.get_color(FLAGS_PIXEL.0, FLAGS_PIXEL.1)?,
        })
    }

    pub fn write_to(&self, surface: &mut PixelSurface) -> Result<()> {
        ensure_header_fits(surface)?;
        surface.set_color(SENTINEL_PIXEL.0, SENTINEL_PIXEL.1, self.sentinel)?;
        surface.set_color(FLAGS_PIXEL.0, FLAGS_PIXEL.1, self.flags)
    }

    pub fn has_secret_message(&self) -> bool {
        self.sentinel.r == SECRET_MARKER
            && self.sentinel.g == SECRET_MARKER
            && self.sentinel.b == SECRET_MARKER
    }

    /// `false` turns the sentinel pixel black, alpha is kept
    pub fn set_has_secret_message(&mut self, value: bool) {
        let c = if value { SECRET_MARKER } else { 0 };
        self.sentinel = Color::rgba(c, c, c, self.sentinel.a);
    }

    /// only meaningful when [`HeaderPixels::has_secret_message`] holds
    pub fn has_encryption(&self) -> bool {
        get_lsb(self.flags.r)
    }

    pub fn set_has_encryption(&mut self, value: bool) {
        self.flags.r = set_lsb(self.flags.r, value);
    }

    /// Number of set bits in the green channel. Values other than `2^n - 1`
    /// are never written but still read as their popcount.
    pub fn bits_per_color_channel(&self) -> u8 {
        pop_count(self.flags.g)
    }

    pub fn set_bits_per_color_channel(&mut self, bits: u8) -> Result<()> {
        validate_bit_width(bits)?;
        self.flags.g = set_pop_count(bits);

        Ok(())
    }

    pub fn is_secret_text(&self) -> bool {
        get_lsb(self.flags.b)
    }

    pub fn set_is_secret_text(&mut self, value: bool) {
        self.flags.b = set_lsb(self.flags.b, value);
    }

    pub fn state(&self) -> HeaderState {
        HeaderState {
            has_secret_message: self.has_secret_message(),
            has_encryption: self.has_encryption(),
            bits_per_color_channel: self.bits_per_color_channel(),
            is_secret_text: self.is_secret_text(),
        }
    }

    pub fn apply(&mut self, state: &HeaderState) -> Result<()> {
        self.set_bits_per_color_channel(state.bits_per_color_channel)?;
        self.set_has_secret_message(state.has_secret_message);
        self.set_has_encryption(state.has_encryption);
        self.set_is_secret_text(state.is_secret_text);

        Ok(())
    }
}

pub fn read_header(surface: &PixelSurface) -> Result<HeaderState> {
    Ok(HeaderPixels::read_from(surface)?.state())
}

/// Updates both header pixels, every other pixel stays untouched.
pub fn write_header(surface: &mut PixelSurface, state: &HeaderState) -> Result<()> {
    let mut header = HeaderPixels::read_from(surface)?;
    header.apply(state)?;
    header.write_to(surface)
}

/// a carrier needs at least two columns to hold both header pixels
pub fn ensure_header_fits(surface: &PixelSurface) -> Result<()> {
    surface.check_bounds(SENTINEL_PIXEL.0, SENTINEL_PIXEL.1)?;
    surface.check_bounds(FLAGS_PIXEL.0, FLAGS_PIXEL.1)
}

pub fn validate_bit_width(bits: u8) -> Result<()> {
    if !(MIN_BITS_PER_CHANNEL..=MAX_BITS_PER_CHANNEL).contains(&bits) {
        return Err(StegafyError::InvalidBitWidth(bits));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_surface;

    #[test]
    fn should_write_the_exact_header_layout() {
        let mut surface = prepare_5x5_surface();
        write_header(
            &mut surface,
            &HeaderState {
                has_secret_message: true,
                has_encryption: true,
                bits_per_color_channel: 3,
                is_secret_text: true,
            },
        )
        .expect("header should fit");

        assert_eq!(
            &surface.as_bytes()[0..8],
            // B    G    R    A  | B  G     R  A
            &[212, 212, 212, 3, 5, 0b111, 7, 7]
        );
    }

    #[test]
    fn should_only_touch_the_header_pixels() {
        let original = prepare_5x5_surface();
        let mut surface = original.clone();
        write_header(
            &mut surface,
            &HeaderState {
                has_secret_message: true,
                has_encryption: false,
                bits_per_color_channel: 8,
                is_secret_text: false,
            },
        )
        .unwrap();

        assert_eq!(&surface.as_bytes()[8..], &original.as_bytes()[8..]);
    }

    #[test]
    fn should_read_back_what_was_written() {
        let mut surface = prepare_5x5_surface();
        for bits in MIN_BITS_PER_CHANNEL..=MAX_BITS_PER_CHANNEL {
            for (encrypted, text) in [(false, false), (true, false), (false, true), (true, true)] {
                let state = HeaderState {
                    has_secret_message: true,
                    has_encryption: encrypted,
                    bits_per_color_channel: bits,
                    is_secret_text: text,
                };
                write_header(&mut surface, &state).unwrap();
                assert_eq!(read_header(&surface).unwrap(), state);
            }
        }
    }

    #[test]
    fn should_blacken_the_sentinel_when_there_is_no_secret() {
        let mut surface = prepare_5x5_surface();
        let mut header = HeaderPixels::read_from(&surface).unwrap();
        header.set_has_secret_message(true);
        header.set_has_secret_message(false);
        header.write_to(&mut surface).unwrap();

        assert_eq!(surface.get_color(0, 0).unwrap(), Color::rgba(0, 0, 0, 3));
        assert!(!read_header(&surface).unwrap().has_secret_message);
    }

    #[test]
    fn should_not_detect_a_secret_in_a_plain_image() {
        let surface = prepare_5x5_surface();

        assert!(!read_header(&surface).unwrap().has_secret_message);
    }

    #[test]
    fn should_read_bits_per_channel_as_popcount() {
        let mut surface = prepare_5x5_surface();
        surface
            .set_color(1, 0, Color::rgba(0, 0b1010_0100, 0, 255))
            .unwrap();

        assert_eq!(read_header(&surface).unwrap().bits_per_color_channel, 3);
    }

    #[test]
    fn should_reject_invalid_bit_widths() {
        let mut header = HeaderPixels::read_from(&prepare_5x5_surface()).unwrap();

        for bits in [0, 9, 255] {
            match header.set_bits_per_color_channel(bits) {
                Err(StegafyError::InvalidBitWidth(b)) => assert_eq!(b, bits),
                other => panic!("unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn should_need_two_columns() {
        let surface = PixelSurface::filled(1, 10, Color::WHITE);

        assert!(matches!(
            ensure_header_fits(&surface),
            Err(StegafyError::OutOfBounds { x: 1, y: 0, .. })
        ));
    }
}

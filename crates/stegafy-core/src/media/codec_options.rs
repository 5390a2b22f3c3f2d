use crate::header::{validate_bit_width, MIN_BITS_PER_CHANNEL};
use crate::result::Result;

/// Options for hiding secrets in images
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CodecOptions {
    /// How many of the low bits of red, green and blue carry a text secret.
    /// Higher values raise the capacity and the visible noise alike.
    ///
    /// Image secrets always use 1 bit of the blue channel.
    pub bits_per_color_channel: u8,

    /// Swaps the upper and lower half of a hidden image, this is stored in
    /// the header and undone on unveil.
    pub scramble_image: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            bits_per_color_channel: MIN_BITS_PER_CHANNEL,
            scramble_image: false,
        }
    }
}

impl CodecOptions {
    pub fn with_bits_per_color_channel(mut self, bits: u8) -> Self {
        self.bits_per_color_channel = bits;
        self
    }

    pub fn with_scramble_image(mut self, scramble: bool) -> Self {
        self.scramble_image = scramble;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_bit_width(self.bits_per_color_channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StegafyError;

    #[test]
    fn should_default_to_one_bit_and_no_scrambling() {
        let options = CodecOptions::default();

        assert_eq!(options.bits_per_color_channel, 1);
        assert!(!options.scramble_image);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn should_reject_bit_widths_beyond_a_byte() {
        let options = CodecOptions::default().with_bits_per_color_channel(9);

        assert!(matches!(
            options.validate(),
            Err(StegafyError::InvalidBitWidth(9))
        ));
    }
}

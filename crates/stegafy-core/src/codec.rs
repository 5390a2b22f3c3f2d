//! Hides a [`Payload`] in the LSBs of a [`PixelSurface`] and gets it back.
//!
//! Every embed validates all of its inputs first and only then writes, so a
//! rejected call leaves the carrier byte for byte as it was.
//!
//! ```rust
//! use stegafy_core::codec::{Payload, StegoCodec};
//! use stegafy_core::surface::{Color, PixelSurface};
//!
//! let mut carrier = PixelSurface::filled(16, 16, Color::rgb(120, 80, 40));
//! StegoCodec::embed_text(&mut carrier, "Hello World", Some("KEY"), 2)
//!     .expect("message fits into 16x16 pixels");
//!
//! match StegoCodec::decode(&carrier).expect("carrier has a secret") {
//!     Payload::Text(text) => {
//!         assert_eq!(text.message, "HELLOWORLD");
//!         assert_eq!(text.encryption_key.as_deref(), Some("KEY"));
//!     }
//!     Payload::Image(_) => unreachable!("a text was hidden"),
//! }
//! ```

use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::bits::{binary_to_text, chunks_of, from_binary, low_bits_mask, text_to_binary};
use crate::bits::{to_binary8, BITS_PER_BYTE};
use crate::cipher;
use crate::error::StegafyError;
use crate::header::{
    ensure_header_fits, read_header, validate_bit_width, write_header, HeaderState,
    HEADER_PIXEL_COUNT, MIN_BITS_PER_CHANNEL,
};
use crate::monochrome::MonochromeImage;
use crate::result::Result;
use crate::surface::{Color, PixelAccess, PixelSurface};

/// terminates every text secret
pub const STOP_MARKER: &str = "#.-.-.-#";
const STOP_MARKER_PADDING: char = ' ';

/// red, green and blue carry payload bits, alpha never does
pub const PAYLOAD_CHANNELS_PER_PIXEL: usize = 3;

/// bit width used for image secrets, they only live in the blue LSB
const IMAGE_BITS_PER_CHANNEL: u8 = 1;

/// A text secret, as hidden or as unveiled.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SecretText {
    pub message: String,
    /// keyword of the substitution cipher, `None` for plain text
    pub encryption_key: Option<String>,
    /// the still encrypted letters, only set when unveiling an encrypted text
    pub cipher_text: Option<String>,
    pub bits_per_channel: u8,
}

impl SecretText {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            encryption_key: None,
            cipher_text: None,
            bits_per_channel: MIN_BITS_PER_CHANNEL,
        }
    }

    pub fn with_encryption_key(mut self, key: impl Into<String>) -> Self {
        self.encryption_key = Some(key.into());
        self
    }

    pub fn with_bits_per_channel(mut self, bits: u8) -> Self {
        self.bits_per_channel = bits;
        self
    }
}

/// What can be hidden in a carrier.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Payload {
    Image(MonochromeImage),
    Text(SecretText),
}

pub struct StegoCodec;

impl StegoCodec {
    /// Hides any payload, `scramble_image` is only used for image secrets.
    pub fn embed(carrier: &mut PixelSurface, payload: &Payload, scramble_image: bool) -> Result<()> {
        match payload {
            Payload::Image(secret) => Self::embed_image(carrier, secret, scramble_image),
            Payload::Text(text) => Self::embed_text(
                carrier,
                &text.message,
                text.encryption_key.as_deref(),
                text.bits_per_channel,
            ),
        }
    }

    /// Hides a monochrome image in the blue channel LSBs.
    ///
    /// With `encrypt` the whole LSB plane of the carrier gets its upper and
    /// lower half swapped after embedding, [`StegoCodec::decode`] swaps it back.
    pub fn embed_image(
        carrier: &mut PixelSurface,
        secret: &MonochromeImage,
        encrypt: bool,
    ) -> Result<()> {
        ensure_header_fits(carrier)?;
        secret.ensure_fits_into(carrier).inspect_err(|e| warn!("{e}"))?;
        debug!(
            "hiding a {}x{} image in a {}x{} carrier, scrambled: {encrypt}",
            secret.width(),
            secret.height(),
            carrier.width(),
            carrier.height()
        );

        secret.embed_into(carrier)?;
        if encrypt {
            MonochromeImage::from_embedded_secret(carrier)?
                .get_flipped()
                .embed_into(carrier)?;
        }

        write_header(
            carrier,
            &HeaderState {
                has_secret_message: true,
                has_encryption: encrypt,
                bits_per_color_channel: IMAGE_BITS_PER_CHANNEL,
                is_secret_text: false,
            },
        )
    }

    /// Hides a text message in the low `bits_per_channel` bits of red, green
    /// and blue of every pixel after the header.
    ///
    /// A non empty `encryption_key` runs the message through the keyword
    /// cipher first.
    pub fn embed_text(
        carrier: &mut PixelSurface,
        message: &str,
        encryption_key: Option<&str>,
        bits_per_channel: u8,
    ) -> Result<()> {
        validate_bit_width(bits_per_channel)?;
        ensure_header_fits(carrier)?;

        let encryption_key = encryption_key.filter(|k| !k.is_empty());
        let binary = text_to_binary(&wire_message(message, encryption_key))
            .inspect_err(|e| warn!("{e}"))?;
        let required = binary.len();
        let available = Self::text_capacity(carrier, bits_per_channel);
        debug!("text secret needs {required} of {available} available bits");
        if required > available {
            let e = StegafyError::PayloadTooLarge {
                required,
                available,
            };
            warn!("{e}");
            return Err(e);
        }

        let mut chunks = chunks_of(&binary, bits_per_channel as usize);
        let width = carrier.width();
        for i in HEADER_PIXEL_COUNT..carrier.pixel_count() {
            if chunks.is_empty() {
                break;
            }
            let (x, y) = ((i % width as usize) as u32, (i / width as usize) as u32);
            let color = carrier.get_color(x, y)?;
            let color = Color {
                r: hide_chunk(color.r, &mut chunks, bits_per_channel)?,
                g: hide_chunk(color.g, &mut chunks, bits_per_channel)?,
                b: hide_chunk(color.b, &mut chunks, bits_per_channel)?,
                a: color.a,
            };
            carrier.set_color(x, y, color)?;
        }

        write_header(
            carrier,
            &HeaderState {
                has_secret_message: true,
                has_encryption: encryption_key.is_some(),
                bits_per_color_channel: bits_per_channel,
                is_secret_text: true,
            },
        )
    }

    /// Reads the header and unveils whatever it announces.
    pub fn decode(carrier: &PixelSurface) -> Result<Payload> {
        ensure_header_fits(carrier).map_err(|_| StegafyError::NoSecretPresent)?;
        let header = read_header(carrier)?;
        trace!("header {header:?}");
        if !header.has_secret_message {
            return Err(StegafyError::NoSecretPresent);
        }

        if header.is_secret_text {
            Ok(Payload::Text(Self::decode_text(carrier, &header)?))
        } else {
            let secret = MonochromeImage::from_embedded_secret(carrier)?;
            Ok(Payload::Image(if header.has_encryption {
                secret.get_flipped()
            } else {
                secret
            }))
        }
    }

    /// number of payload bits a carrier offers for text secrets
    pub fn text_capacity(carrier: &PixelSurface, bits_per_channel: u8) -> usize {
        carrier.pixel_count().saturating_sub(HEADER_PIXEL_COUNT)
            * PAYLOAD_CHANNELS_PER_PIXEL
            * bits_per_channel as usize
    }

    fn decode_text(carrier: &PixelSurface, header: &HeaderState) -> Result<SecretText> {
        let bits = header.bits_per_color_channel;
        validate_bit_width(bits)?;

        let mut unveiled = UnveiledText::default();
        let width = carrier.width() as usize;
        for i in HEADER_PIXEL_COUNT..carrier.pixel_count() {
            let color = carrier.get_color((i % width) as u32, (i / width) as u32)?;
            // checked per channel, untouched channels after the end would add noise characters
            for channel in [color.r, color.g, color.b] {
                unveiled.push_bits(&to_binary8(channel)[BITS_PER_BYTE - bits as usize..])?;
                if let Some(message) = unveiled.finished_message() {
                    debug!(
                        "found the end of the text secret after {} pixels",
                        i + 1 - HEADER_PIXEL_COUNT
                    );
                    return Self::into_secret_text(message, header);
                }
            }
        }

        Err(StegafyError::StopMarkerNotFound)
    }

    fn into_secret_text(message: &str, header: &HeaderState) -> Result<SecretText> {
        let bits_per_channel = header.bits_per_color_channel;
        if !header.has_encryption {
            return Ok(SecretText::new(message).with_bits_per_channel(bits_per_channel));
        }
        let decrypted = cipher::decrypt(message)?;

        Ok(SecretText {
            message: decrypted.plain_text,
            encryption_key: Some(decrypted.keyword),
            cipher_text: Some(decrypted.cipher_text),
            bits_per_channel,
        })
    }
}

/// the text that is turned into payload bits
fn wire_message(message: &str, encryption_key: Option<&str>) -> String {
    let mut wire = match encryption_key {
        Some(key) => cipher::encrypt(message, key),
        None => message.to_string(),
    };
    wire.push_str(STOP_MARKER);
    wire.push(STOP_MARKER_PADDING);
    wire
}

/// Replaces the low `bits` bits of `channel` with the next chunk, a short
/// last chunk is padded with zeros on the right. Without chunks left the
/// channel stays as it is.
fn hide_chunk(channel: u8, chunks: &mut VecDeque<String>, bits: u8) -> Result<u8> {
    let Some(chunk) = chunks.pop_front() else {
        return Ok(channel);
    };
    let value = from_binary(&chunk)? << (bits as usize - chunk.len());

    Ok((channel & !low_bits_mask(bits)) | value)
}

/// Collects unveiled bits and turns every complete byte into a character.
#[derive(Default)]
struct UnveiledText {
    pending: String,
    text: String,
}

impl UnveiledText {
    fn push_bits(&mut self, bits: &str) -> Result<()> {
        self.pending.push_str(bits);
        if self.pending.len() >= BITS_PER_BYTE {
            let complete = self.pending.len() - self.pending.len() % BITS_PER_BYTE;
            self.text.push_str(&binary_to_text(&self.pending[..complete])?);
            self.pending.drain(..complete);
        }

        Ok(())
    }

    /// the message in front of the stop marker, once the marker showed up
    fn finished_message(&self) -> Option<&str> {
        self.text.trim_end().strip_suffix(STOP_MARKER)
    }
}

//! # Stegafy Core API
//!
//! Hides either a text message or a monochrome image in the least significant
//! bits of a carrier image and unveils it again. The carrier keeps a two pixel
//! header that tells what kind of secret it holds, so unveiling needs no
//! options at all.
//!
//! The codec itself ([`StegoCodec`]) works on a raw [`PixelSurface`], the
//! [`api`] builders add reading and writing image files on top.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! stegafy_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_keyword("Secret")         // will encrypt the letters of the message with this keyword
//!     .with_image("tests/images/plain/carrier-image.png")
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil data from an image
//!
//! ```rust
//! use tempfile::tempdir;
//! use stegafy_core::Payload;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("image-with-a-message-inside.png");
//!
//! stegafy_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("tests/images/plain/carrier-image.png")
//!     .with_output(&carrier)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let payload = stegafy_core::api::unveil::prepare()
//!     .from_secret_file(&carrier)
//!     .into_output_folder(temp_dir.path())
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! match payload {
//!     Payload::Text(text) => assert_eq!(text.message, "Hello, World!"),
//!     Payload::Image(_) => unreachable!(),
//! }
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod cipher;
pub mod codec;
pub mod commands;
pub mod error;
pub mod header;
pub mod media;
pub mod monochrome;
pub mod result;
pub mod surface;

pub use crate::codec::{Payload, SecretText, StegoCodec};
pub use crate::error::StegafyError;
pub use crate::header::HeaderState;
pub use crate::media::{CodecOptions, Persist};
pub use crate::monochrome::MonochromeImage;
pub use crate::result::Result;
pub use crate::surface::{Color, PixelAccess, PixelSurface};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegafyError {
    /// Represents a missing payload, for example neither a message nor a secret image was given
    #[error("No payload to hide was provided")]
    NullPayload,

    /// Represents a bits per color channel value outside of 1..=8
    #[error("Invalid bits per color channel: {0} (must be between 1 and 8)")]
    InvalidBitWidth(u8),

    /// Represents a text payload that does not fit into the carrier image
    #[error(
        "Capacity Error: the message requires {required} bits but the carrier only provides {available} bits"
    )]
    PayloadTooLarge { required: usize, available: usize },

    /// Represents a secret image that is bigger than the carrier image on at least one axis
    #[error(
        "Capacity Error: the secret image with the dimensions {0}x{1} does not fit into the carrier image with the dimensions {2}x{3}"
    )]
    SecretTooLarge(u32, u32, u32, u32),

    /// Represents a pixel access outside of the image extent
    #[error("Pixel ({x}, {y}) is out of bounds for an image of {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Represents an unveil of no secret data, the header pixels did not carry the secret marker
    #[error("No secret data found")]
    NoSecretPresent,

    /// Represents a pixel buffer that does not match the given width
    #[error("Pixel buffer of {len} bytes does not hold whole rows of {width} BGRA pixels")]
    InvalidPixelBuffer { len: usize, width: u32 },

    /// Represents a string that is not a binary representation of a byte
    #[error("Invalid bit string: {0:?}")]
    InvalidBitString(String),

    /// Represents a message or keyword character that does not fit into a single byte
    #[error("Character {0:?} cannot be hidden, only characters up to U+00FF are supported")]
    UnsupportedCharacter(char),

    /// Represents an encrypted message that lacks the keyword separator
    #[error("Encrypted message does not contain a keyword")]
    InvalidCipherEnvelope,

    /// Represents a text secret that has no end, the stop marker was never found
    #[error("The text secret is not terminated")]
    StopMarkerNotFound,

    /// Represents an unsupported carrier media. For example, a GIF file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,
}

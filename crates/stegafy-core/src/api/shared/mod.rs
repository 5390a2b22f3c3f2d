mod keyword;

pub use keyword::*;

/// file names used when unveiling into a folder
pub(crate) const SECRET_MESSAGE_FILE: &str = "secret-message.txt";
pub(crate) const ENCRYPTED_MESSAGE_FILE: &str = "secret-message.encrypted.txt";
pub(crate) const SECRET_IMAGE_FILE: &str = "secret-image.png";

use crate::error::StegafyError;

pub type Result<T> = std::result::Result<T, StegafyError>;

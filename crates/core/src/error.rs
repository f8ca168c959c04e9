use crate::Field;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("{field} is not a valid hex string: {value:?}")]
    InvalidHexString { field: Field, value: String },

    #[error(
        "{field} must be 32 bytes ({} hex digits) but got {} hex digits",
        .expected,
        .actual
    )]
    InvalidInputLength {
        field: Field,
        expected: usize,
        actual: usize,
    },

    #[error("output root preimage must be {expected} bytes but got {actual}")]
    InvalidPreimageLength { expected: usize, actual: usize },

    #[error("no preset named {0:?}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, Error>;

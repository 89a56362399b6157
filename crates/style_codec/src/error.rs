use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid target dimensions {width}x{height}: both sides must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Normalization std must be non-zero")]
    ZeroStd,

    #[error("Tensor buffer holds {actual} floats, expected {expected} for a {width}x{height}x3 image")]
    TensorSizeMismatch {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },

    #[error("Executor failure: {0}")]
    Executor(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

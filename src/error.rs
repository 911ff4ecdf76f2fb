use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid image: {width}x{height} buffer is empty or malformed")]
    InvalidImage { width: usize, height: usize },

    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("mask combination requires at least one input mask")]
    EmptyMaskSet,
}

pub type Result<T> = std::result::Result<T, Error>;

// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BytenormError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unrecognized byte-order tag: {0:?}")]
    InvalidOrderTag(char),

    #[error("Invalid stride: {stride} bytes for {width}-byte elements")]
    InvalidStride { stride: usize, width: usize },

    #[error("Buffer too short: descriptor needs {needed} bytes, buffer holds {available}")]
    BufferTooShort { needed: usize, available: usize },

    #[error("Truncated buffer: {len} bytes is not a whole number of {width}-byte elements")]
    TruncatedBuffer { len: usize, width: usize },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, BytenormError>;

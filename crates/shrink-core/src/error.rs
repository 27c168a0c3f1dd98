use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors from the stream and file entry points.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

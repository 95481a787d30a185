// sramlink/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("message too large: {actual} bytes exceeds {max}")]
    MessageTooLarge { actual: usize, max: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("timed out waiting for register {address:#06x} after {timeout_ms} ms")]
    RegisterTimeout { address: u16, timeout_ms: u64 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("crc mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },

    #[error("tag reported request failed")]
    RequestFailed,

    #[error("tag did not handle the request")]
    RequestNotHandled,

    #[error("link error: {0}")]
    Link(String),
}

impl Error {
    /// Whether the error stems from malformed caller input. Such errors are
    /// never worth retrying; re-presenting the tag cannot fix them.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidMessage(_)
                | Error::MessageTooLarge { .. }
                | Error::InvalidLength { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

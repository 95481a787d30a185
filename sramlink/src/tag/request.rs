// sramlink/src/tag/request.rs

use crate::types::Password;

/// Application requests understood by the tag firmware. New requests
/// should be added here so every opcode and body encoding lives in one
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Program a new password and URL; the tag answers with its 64-byte
    /// public key.
    ProgramUrl {
        /// The 8-byte user password.
        password: Password,
        /// Variable-length URL to sign against.
        url: String,
    },
    /// Fetch the tag's 64-byte public key.
    PublicKey,
    /// Factory-reset the tag; answered with an empty acknowledgement.
    Reset {
        /// The 8-byte user password.
        password: Password,
    },
}

impl Request {
    /// The application opcode byte.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::ProgramUrl { .. } => 0xB0,
            Self::PublicKey => 0xB1,
            Self::Reset { .. } => 0xB2,
        }
    }

    /// Encode the request message: `[opcode, 0, 0, 0]` followed by the
    /// request body.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.opcode(), 0x00, 0x00, 0x00];
        match self {
            Self::ProgramUrl { password, url } => {
                out.extend_from_slice(password.as_bytes());
                out.extend_from_slice(url.as_bytes());
            }
            Self::PublicKey => {}
            Self::Reset { password } => {
                out.extend_from_slice(password.as_bytes());
            }
        }
        out
    }
}

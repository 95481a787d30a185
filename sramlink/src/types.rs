// sramlink/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// Tag password - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password([u8; 8]);

impl Password {
    /// Wrap an 8-byte password.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw password bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Password {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

impl TryFrom<&str> for Password {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.as_bytes())
    }
}

/// Tag public key - Newtype Pattern (64 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; 64]);

impl PublicKey {
    /// Wrap a 64-byte public key.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Lowercase hex rendering, for logs and display.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 64 {
            return Err(Error::InvalidLength {
                expected: 64,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 64];
        arr.copy_from_slice(&bytes[..64]);
        Ok(Self(arr))
    }
}

/// A status register poll target: address plus the mask/expected pair that
/// defines when the register is considered ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterSpec {
    /// 16-bit register address, sent little-endian on the wire.
    pub address: u16,
    /// Bits of the register value that matter.
    pub mask: u32,
    /// Value the masked register must equal.
    pub expected: u32,
}

impl RegisterSpec {
    /// The arbiter has granted the host write access to the SRAM window.
    pub const ARBITER_READY: Self = Self {
        address: 0x00A1,
        mask: 0x0000_0F00,
        expected: 0x0000_0B00,
    };

    /// The tag has unlocked and re-arbitrated the window back to the host.
    pub const UNLOCK_READY: Self = Self {
        address: 0x00A0,
        mask: 0x0000_0300,
        expected: 0x0000_0100,
    };

    /// A poll is successful iff `(value & mask) == expected`.
    pub fn matches(&self, value: u32) -> bool {
        (value & self.mask) == self.expected
    }
}

/// Which side the tag's transfer-direction pin is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    /// SRAM mailbox access: host may write the shared window.
    Sram,
    /// The tag's native NDEF mode, restored after a transaction.
    Ndef,
}

impl TransferMode {
    /// Sub-function byte for the mode-toggle command.
    pub fn function_id(&self) -> u8 {
        match self {
            Self::Sram => 0x04,
            Self::Ndef => 0x09,
        }
    }
}

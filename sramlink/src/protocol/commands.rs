// sramlink/src/protocol/commands.rs

use crate::constants::{
    HANDOFF_PAGE, MODE_TOGGLE_PREFIX, OP_READ_BLOCKS, OP_READ_REGISTER, OP_SET_TRANSFER_MODE,
    OP_WRITE_BLOCKS, PAGE_SIZE,
};
use crate::protocol::Frame;
use crate::types::TransferMode;

/// Which SRAM area a block read targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReadArea {
    /// The 8-byte frame header page pair.
    Header = 0x00,
    /// Message body pages following the header.
    Body = 0x02,
}

/// Raw transceive commands understood by the tag. New commands should be
/// added here so every opcode/parameter encoding lives in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read a 32-bit status register.
    ReadRegister {
        /// Register address, little-endian on the wire.
        address: u16,
    },
    /// Write whole pages into the SRAM window.
    WriteBlocks {
        /// First page to write.
        start_page: u8,
        /// Page-aligned data; the page count parameter is derived from it.
        data: Vec<u8>,
    },
    /// Read pages back from the SRAM window.
    ReadBlocks {
        /// Header or body area.
        area: ReadArea,
        /// Count-minus-one page count.
        pages: u8,
    },
    /// Switch the tag's transfer-direction / arbiter mode.
    SetTransferMode(TransferMode),
}

impl Command {
    /// The control-handoff write that returns the mailbox window to the
    /// tag after a message write. Mandatory: without it the tag never acts
    /// on the frame.
    pub fn handoff() -> Self {
        Self::WriteBlocks {
            start_page: HANDOFF_PAGE,
            data: vec![0xFF; PAGE_SIZE],
        }
    }

    /// The raw command opcode.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::ReadRegister { .. } => OP_READ_REGISTER,
            Self::WriteBlocks { .. } => OP_WRITE_BLOCKS,
            Self::ReadBlocks { .. } => OP_READ_BLOCKS,
            Self::SetTransferMode(_) => OP_SET_TRANSFER_MODE,
        }
    }

    /// Encode the command parameters (everything after the opcode).
    pub fn params(&self) -> Vec<u8> {
        match self {
            Self::ReadRegister { address } => address.to_le_bytes().to_vec(),
            Self::WriteBlocks { start_page, data } => {
                debug_assert!(!data.is_empty() && data.len() % PAGE_SIZE == 0);
                let mut params = vec![*start_page, Frame::page_count(data)];
                params.extend_from_slice(data);
                params
            }
            Self::ReadBlocks { area, pages } => vec![*area as u8, *pages],
            Self::SetTransferMode(mode) => {
                vec![MODE_TOGGLE_PREFIX, mode.function_id(), 0x00, 0x00, 0x00]
            }
        }
    }
}

// sramlink/src/constants.rs
//! Common protocol constants used across the crate

/// Size of the tag's SRAM mailbox window in bytes
pub const SRAM_SIZE: usize = 256;

/// One addressable SRAM page: commands address pages, not bytes
pub const PAGE_SIZE: usize = 4;

/// Mailbox frame header: magic(2) + status(1) + length(1) + crc32(4)
pub const HEADER_LEN: usize = 8;

/// Maximum unpadded message payload length
pub const MAX_MESSAGE_LEN: usize = SRAM_SIZE - HEADER_LEN;

/// Fixed frame magic: 0xE1 0xED
pub const FRAME_MAGIC: [u8; 2] = [0xE1, 0xED];

/// Status bit 0: the tag handled the request
pub const STATUS_HANDLED: u8 = 0x01;
/// Status bit 1: the tag rejected the request. Authoritative over bit 0.
pub const STATUS_FAILED: u8 = 0x02;

/// Read a 32-bit status register
pub const OP_READ_REGISTER: u8 = 0xC0;
/// Toggle the tag's transfer-direction / arbiter mode
pub const OP_SET_TRANSFER_MODE: u8 = 0xC1;
/// Read SRAM pages
pub const OP_READ_BLOCKS: u8 = 0xD2;
/// Write SRAM pages
pub const OP_WRITE_BLOCKS: u8 = 0xD3;

/// First parameter byte of every mode-toggle command
pub const MODE_TOGGLE_PREFIX: u8 = 0xA8;

/// Writing 0xFF..FF to this page hands the mailbox window back to the tag
pub const HANDOFF_PAGE: u8 = 0x3F;

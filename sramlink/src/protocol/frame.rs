// sramlink/src/protocol/frame.rs

use crate::constants::{
    FRAME_MAGIC, HEADER_LEN, MAX_MESSAGE_LEN, PAGE_SIZE, STATUS_FAILED, STATUS_HANDLED,
};
use crate::{Error, Result};

/// CRC used over the unpadded message payload. ISO-HDLC is the standard
/// zlib CRC-32 the tag firmware computes.
const CRC32: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

/// CRC32 of an unpadded payload, as carried in the frame header.
pub fn payload_crc(payload: &[u8]) -> u32 {
    CRC32.checksum(payload)
}

/// Mailbox frame helper. Provides encode/decode of the wire frame
/// Format: [Magic(2)] [Status(1)] [Length(1)] [CRC32 LE(4)] [Data(padded)]
/// Magic: 0xE1 0xED
/// Data is the payload zero-padded to a whole number of 4-byte pages;
/// Length is the unpadded payload length and the CRC covers only that.
pub struct Frame;

impl Frame {
    /// Encode a payload into a full mailbox frame. The status byte is
    /// always written as zero; only the tag sets status bits.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() {
            return Err(Error::InvalidMessage("empty payload".into()));
        }
        if payload.len() > MAX_MESSAGE_LEN {
            return Err(Error::MessageTooLarge {
                actual: payload.len(),
                max: MAX_MESSAGE_LEN,
            });
        }

        let padded_len = payload.len().next_multiple_of(PAGE_SIZE);
        let mut out = Vec::with_capacity(HEADER_LEN + padded_len);
        out.extend_from_slice(&FRAME_MAGIC);
        out.push(0x00);
        out.push(payload.len() as u8);
        out.extend_from_slice(&payload_crc(payload).to_le_bytes());
        out.extend_from_slice(payload);
        out.resize(HEADER_LEN + padded_len, 0x00);
        Ok(out)
    }

    /// Structurally decode a frame: magic, length bound, CRC. Status bits
    /// are parsed but not yet enforced; callers apply the status policy via
    /// [`Message::into_payload`].
    ///
    /// Trailing padding beyond `length` is accepted and ignored, so the
    /// input may be the exact encoded frame or a header page plus a
    /// truncated body read.
    pub fn decode(frame: &[u8]) -> Result<Message> {
        if frame.len() < HEADER_LEN {
            return Err(Error::InvalidLength {
                expected: HEADER_LEN,
                actual: frame.len(),
            });
        }

        // Magic is checked before any other field is trusted.
        if frame[..2] != FRAME_MAGIC {
            return Err(Error::FrameFormat("magic not found".into()));
        }

        let status = MessageStatus::from_bits(frame[2]);
        let length = frame[3] as usize;
        if length > MAX_MESSAGE_LEN {
            return Err(Error::FrameFormat("payload too large".into()));
        }

        let expected = u32::from_le_bytes([frame[4], frame[5], frame[6], frame[7]]);

        if frame.len() < HEADER_LEN + length {
            return Err(Error::InvalidLength {
                expected: HEADER_LEN + length,
                actual: frame.len(),
            });
        }

        let payload = frame[HEADER_LEN..HEADER_LEN + length].to_vec();
        let actual = payload_crc(&payload);
        if actual != expected {
            return Err(Error::CrcMismatch { expected, actual });
        }

        Ok(Message { status, payload })
    }

    /// Page count parameter for the write-block command carrying `frame`.
    /// The wire encoding is count-minus-one: a 12-byte frame is 2.
    pub fn page_count(frame: &[u8]) -> u8 {
        (frame.len() / PAGE_SIZE - 1) as u8
    }

    /// Page count parameter for the body read of a message of `length`
    /// bytes. Count-minus-one like the write side, with one extra page
    /// whenever the count is not itself a multiple of 4; the tag truncates
    /// boundary-length transfers without the slack page.
    pub fn body_page_count(length: usize) -> u8 {
        let mut pages = ((length & !(PAGE_SIZE - 1)) / PAGE_SIZE).saturating_sub(1);
        if pages % 4 != 0 {
            pages += 1;
        }
        pages as u8
    }
}

/// A structurally valid, CRC-checked message read back from the mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Status bits as interpreted from the frame header.
    pub status: MessageStatus,
    /// The unpadded payload.
    pub payload: Vec<u8>,
}

impl Message {
    /// Apply the status policy: only a handled message yields its payload.
    /// A structurally valid frame can still represent an application-level
    /// failure, so this check is mandatory even after the CRC passed.
    pub fn into_payload(self) -> Result<Vec<u8>> {
        match self.status {
            MessageStatus::Handled => Ok(self.payload),
            MessageStatus::Failed => Err(Error::RequestFailed),
            MessageStatus::Unhandled => Err(Error::RequestNotHandled),
        }
    }
}

/// Interpretation of the frame status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// Bit 0 set: the tag processed the request successfully.
    Handled,
    /// Bit 1 set: the tag rejected the request. Wins over bit 0.
    Failed,
    /// Neither bit set: the tag never acted on the request.
    Unhandled,
}

impl MessageStatus {
    /// Decode the raw status byte.
    pub fn from_bits(bits: u8) -> Self {
        if bits & STATUS_FAILED != 0 {
            Self::Failed
        } else if bits & STATUS_HANDLED != 0 {
            Self::Handled
        } else {
            Self::Unhandled
        }
    }
}

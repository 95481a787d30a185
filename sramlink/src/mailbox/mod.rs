// sramlink/src/mailbox/mod.rs

//! Framed message transport over the SRAM mailbox window.
//!
//! A [`Mailbox`] drives one write/read exchange through the raw transceive
//! primitive: it encodes payloads into CRC-protected frames, splits them
//! into page writes, and reassembles and verifies responses. Sessions hand
//! a `Mailbox` to the caller's operation once the window is arbitrated.

pub mod poll;

pub use poll::wait_for_register;

use crate::constants::{FRAME_MAGIC, HEADER_LEN, MAX_MESSAGE_LEN};
use crate::protocol::{Command, Frame, ReadArea};
use crate::session::LinkConfig;
use crate::transport::Transceiver;
use crate::types::RegisterSpec;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Message-level access to the SRAM window of an arbitrated link.
pub struct Mailbox<'a> {
    link: &'a mut (dyn Transceiver + 'a),
    config: &'a LinkConfig,
}

impl<'a> Mailbox<'a> {
    /// Wrap an arbitrated link. Callers normally receive a `Mailbox` from
    /// [`crate::session::Session::perform`] rather than building one.
    pub fn new(link: &'a mut (dyn Transceiver + 'a), config: &'a LinkConfig) -> Self {
        Self { link, config }
    }

    fn execute(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        self.link.transceive(cmd.opcode(), &cmd.params())
    }

    /// Encode `payload` into a frame, write it into the window, and hand
    /// the window to the tag. The handoff write is mandatory; without it
    /// the tag never acts on the frame.
    pub fn write_message(&mut self, payload: &[u8]) -> Result<()> {
        let frame = Frame::encode(payload)?;
        log::debug!("write message ({} bytes): {}", payload.len(), bytes_to_hex(payload));

        self.execute(&Command::WriteBlocks {
            start_page: 0x00,
            data: frame,
        })?;
        self.execute(&Command::handoff())?;
        Ok(())
    }

    /// Read back the tag's response message, waiting up to the configured
    /// read timeout for the tag to re-arbitrate the window to the host.
    pub fn read_message(&mut self) -> Result<Vec<u8>> {
        self.read_message_with_timeout(self.config.read_timeout_ms)
    }

    /// [`Self::read_message`] with an explicit unlock budget.
    pub fn read_message_with_timeout(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        // The window must be host-readable before any page read is valid.
        poll::wait_for_register(
            self.link,
            RegisterSpec::UNLOCK_READY,
            timeout_ms,
            self.config.poll_interval_ms,
        )?;

        let mut buf = self.execute(&Command::ReadBlocks {
            area: ReadArea::Header,
            pages: 1,
        })?;
        if buf.len() < HEADER_LEN {
            return Err(Error::InvalidLength {
                expected: HEADER_LEN,
                actual: buf.len(),
            });
        }
        buf.truncate(HEADER_LEN);

        // Reject garbage before issuing any body read.
        if buf[..2] != FRAME_MAGIC {
            return Err(Error::FrameFormat("magic not found".into()));
        }
        let length = buf[3] as usize;
        if length > MAX_MESSAGE_LEN {
            return Err(Error::FrameFormat("payload too large".into()));
        }

        if length > 0 {
            let mut body = self.execute(&Command::ReadBlocks {
                area: ReadArea::Body,
                pages: Frame::body_page_count(length),
            })?;
            body.truncate(length);
            buf.extend_from_slice(&body);
        }

        let message = Frame::decode(&buf)?;
        log::debug!(
            "read message ({} bytes, status {:?})",
            message.payload.len(),
            message.status
        );
        message.into_payload()
    }

    /// Convenience: write a request and read the response in one call.
    pub fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        self.write_message(request)?;
        self.read_message()
    }
}

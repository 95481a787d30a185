//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransceiver scripting so tests
//! across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::HEADER_LEN;
use crate::protocol::frame::payload_crc;
use crate::transport::mock::MockTransceiver;

/// Encode a 32-bit register value as a little-endian read response.
#[doc(hidden)]
pub fn register_value(value: u32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// A register read that satisfies the arbiter-ready spec.
#[doc(hidden)]
pub fn arbiter_ready() -> Vec<u8> {
    register_value(0x0000_0B00)
}

/// A register read that satisfies the unlock-ready spec.
#[doc(hidden)]
pub fn unlock_ready() -> Vec<u8> {
    register_value(0x0000_0100)
}

/// Build a tag response frame with explicit status bits: the header plus
/// the payload zero-padded to whole pages.
#[doc(hidden)]
pub fn response_frame(status: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![0xE1, 0xED, status, payload.len() as u8];
    frame.extend_from_slice(&payload_crc(payload).to_le_bytes());
    frame.extend_from_slice(payload);
    while (frame.len() - HEADER_LEN) % 4 != 0 {
        frame.push(0x00);
    }
    frame
}

/// Script the transaction preamble: SRAM mode-toggle ack plus immediately
/// ready arbiter and unlock registers.
#[doc(hidden)]
pub fn seed_transaction_preamble(mock: &mut MockTransceiver) {
    mock.push_response(vec![]);
    mock.push_response(arbiter_ready());
    mock.push_response(unlock_ready());
}

/// Script one full message exchange as the tag would answer it: acks for
/// the two block writes, unlock-ready for the read poll, then the header
/// page and (if the payload is non-empty) the body pages of a response
/// frame carrying `status` and `payload`.
#[doc(hidden)]
pub fn seed_exchange(mock: &mut MockTransceiver, status: u8, payload: &[u8]) {
    mock.push_response(vec![]); // frame write ack
    mock.push_response(vec![]); // handoff write ack
    mock.push_response(unlock_ready());

    let frame = response_frame(status, payload);
    mock.push_response(frame[..HEADER_LEN].to_vec());
    if !payload.is_empty() {
        mock.push_response(frame[HEADER_LEN..].to_vec());
    }
}

/// Script the NDEF mode-toggle ack that closes a successful transaction.
#[doc(hidden)]
pub fn seed_transaction_epilogue(mock: &mut MockTransceiver) {
    mock.push_response(vec![]);
}

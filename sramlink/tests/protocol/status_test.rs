use sramlink::protocol::{Frame, MessageStatus};
use sramlink::test_support::response_frame;
use sramlink::Error;

#[test]
fn handled_yields_payload() {
    let frame = response_frame(0b01, &[0xAA, 0xBB]);
    let msg = Frame::decode(&frame).unwrap();
    assert_eq!(msg.status, MessageStatus::Handled);
    assert_eq!(msg.into_payload().unwrap(), vec![0xAA, 0xBB]);
}

#[test]
fn failed_bit_wins_even_with_valid_crc() {
    for status in [0b10u8, 0b11u8] {
        let frame = response_frame(status, &[0xAA]);
        let msg = Frame::decode(&frame).unwrap();
        assert_eq!(msg.status, MessageStatus::Failed);
        assert!(matches!(msg.into_payload(), Err(Error::RequestFailed)));
    }
}

#[test]
fn zero_status_means_unhandled() {
    let frame = response_frame(0b00, &[0xAA]);
    let msg = Frame::decode(&frame).unwrap();
    assert_eq!(msg.status, MessageStatus::Unhandled);
    assert!(matches!(msg.into_payload(), Err(Error::RequestNotHandled)));
}

#[test]
fn bad_magic_rejected_before_status_or_crc() {
    // Everything after the magic is garbage; the error must still be about
    // the magic, proving no later field was inspected.
    let frame = vec![0x00, 0xED, 0xFF, 0xFF, 0x01, 0x02, 0x03, 0x04];
    match Frame::decode(&frame) {
        Err(Error::FrameFormat(msg)) => assert!(msg.contains("magic")),
        other => panic!("expected magic rejection, got: {:?}", other),
    }
}

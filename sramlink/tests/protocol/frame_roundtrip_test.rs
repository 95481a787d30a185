use proptest::prelude::*;
use sramlink::constants::{HEADER_LEN, MAX_MESSAGE_LEN, PAGE_SIZE};
use sramlink::protocol::{Frame, MessageStatus};
use sramlink::Error;

#[test]
fn three_byte_payload_makes_a_twelve_byte_frame() {
    let frame = Frame::encode(&[0x01, 0x02, 0x03]).unwrap();
    assert_eq!(frame.len(), 12);
    assert_eq!(Frame::page_count(&frame), 2);
}

#[test]
fn max_payload_fills_the_sram_window() {
    let payload = vec![0x5A; MAX_MESSAGE_LEN];
    let frame = Frame::encode(&payload).unwrap();
    assert_eq!(frame.len(), 256);
    assert_eq!(Frame::page_count(&frame), 63);
}

proptest! {
    #[test]
    fn roundtrip_for_all_payload_lengths(
        payload in prop::collection::vec(any::<u8>(), 1..=MAX_MESSAGE_LEN)
    ) {
        let frame = Frame::encode(&payload).unwrap();
        prop_assert_eq!(frame.len() % PAGE_SIZE, 0);
        prop_assert_eq!((frame.len() - HEADER_LEN) % PAGE_SIZE, 0);
        prop_assert_eq!(frame[3] as usize, payload.len());
        prop_assert_eq!(Frame::page_count(&frame) as usize, frame.len() / PAGE_SIZE - 1);

        let msg = Frame::decode(&frame).unwrap();
        prop_assert_eq!(msg.status, MessageStatus::Unhandled); // writer leaves status zero
        prop_assert_eq!(msg.payload, payload);
    }

    #[test]
    fn any_single_byte_corruption_is_detected(
        payload in prop::collection::vec(any::<u8>(), 1..64),
        flip in any::<u8>().prop_filter("must change the byte", |b| *b != 0),
        index in any::<prop::sample::Index>(),
    ) {
        let frame = Frame::encode(&payload).unwrap();
        let mut corrupted = frame.clone();
        let i = HEADER_LEN + index.index(payload.len());
        corrupted[i] ^= flip;

        match Frame::decode(&corrupted) {
            Err(Error::CrcMismatch { .. }) => {}
            other => prop_assert!(false, "expected crc mismatch, got: {:?}", other),
        }
    }
}

use sramlink::protocol::{Command, Frame, ReadArea};
use sramlink::tag::Request;
use sramlink::types::TransferMode;

#[path = "../common/mod.rs"]
mod common;

#[test]
fn raw_command_wire_shapes() {
    let read = Command::ReadRegister { address: 0x00A0 };
    assert_eq!((read.opcode(), read.params()), (0xC0, vec![0xA0, 0x00]));

    let header = Command::ReadBlocks {
        area: ReadArea::Header,
        pages: 1,
    };
    assert_eq!((header.opcode(), header.params()), (0xD2, vec![0x00, 0x01]));

    let sram = Command::SetTransferMode(TransferMode::Sram);
    assert_eq!(sram.opcode(), 0xC1);
    assert_eq!(sram.params(), vec![0xA8, 0x04, 0x00, 0x00, 0x00]);

    let handoff = Command::handoff();
    assert_eq!(handoff.opcode(), 0xD3);
    assert_eq!(handoff.params(), vec![0x3F, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn request_encodes_and_frames() {
    let req = Request::ProgramUrl {
        password: common::fixtures::sample_password(),
        url: common::fixtures::sample_url().into(),
    };

    let message = req.encode();
    assert_eq!(message[0], 0xB0);

    // The application request rides inside a mailbox frame unchanged.
    let frame = Frame::encode(&message).unwrap();
    let decoded = Frame::decode(&frame).unwrap();
    assert_eq!(decoded.payload, message);
}

#[test]
fn write_blocks_params_mirror_frame_pages() {
    let frame = Frame::encode(&[0x11; 20]).unwrap();
    let pages = Frame::page_count(&frame);
    let cmd = Command::WriteBlocks {
        start_page: 0x00,
        data: frame.clone(),
    };
    let params = cmd.params();
    assert_eq!(params[0], 0x00);
    assert_eq!(params[1], pages);
    assert_eq!(&params[2..], &frame[..]);
}

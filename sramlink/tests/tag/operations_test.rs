use sramlink::constants::OP_WRITE_BLOCKS;
use sramlink::session::Session;
use sramlink::tag::operations;
use sramlink::test_support::{
    seed_exchange, seed_transaction_epilogue, seed_transaction_preamble,
};
use sramlink::transport::mock::MockTransceiver;
use sramlink::Error;

#[path = "../common/mod.rs"]
mod common;

#[test]
fn program_url_returns_the_tag_public_key() {
    let mut mock = MockTransceiver::new();
    seed_transaction_preamble(&mut mock);
    seed_exchange(&mut mock, 0x01, &common::fixtures::sample_key_bytes());
    seed_transaction_epilogue(&mut mock);

    let mut session = Session::with_config(mock, common::fixtures::fast_config());
    let key = operations::program_url(
        &mut session,
        common::fixtures::sample_password(),
        common::fixtures::sample_url(),
    )
    .unwrap();
    assert_eq!(key, common::fixtures::sample_public_key());

    // The frame write carries the request: opcode, pad, password, url
    let mock = session.into_link();
    let writes = mock.params_for(OP_WRITE_BLOCKS);
    let frame = &writes[0][2..];
    assert_eq!(frame[8], 0xB0);
    assert_eq!(&frame[12..20], b"hunter12");
}

#[test]
fn public_key_round_trip() {
    let mut mock = MockTransceiver::new();
    seed_transaction_preamble(&mut mock);
    seed_exchange(&mut mock, 0x01, &common::fixtures::sample_key_bytes());
    seed_transaction_epilogue(&mut mock);

    let mut session = Session::with_config(mock, common::fixtures::fast_config());
    let key = operations::public_key(&mut session).unwrap();
    assert_eq!(key.as_bytes(), &common::fixtures::sample_key_bytes());
}

#[test]
fn undersized_key_response_is_rejected() {
    let mut mock = MockTransceiver::new();
    seed_transaction_preamble(&mut mock);
    seed_exchange(&mut mock, 0x01, &[0xAB; 32]); // half a key
    seed_transaction_epilogue(&mut mock);

    let mut session = Session::with_config(mock, common::fixtures::fast_config());
    let err = operations::public_key(&mut session).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 64,
            actual: 32
        }
    ));
    // Release still happened despite the parse failure
    assert_eq!(session.into_link().releases, 1);
}

#[test]
fn reset_accepts_empty_acknowledgement() {
    let mut mock = MockTransceiver::new();
    seed_transaction_preamble(&mut mock);
    seed_exchange(&mut mock, 0x01, &[]);
    seed_transaction_epilogue(&mut mock);

    let mut session = Session::with_config(mock, common::fixtures::fast_config());
    operations::reset(&mut session, common::fixtures::sample_password()).unwrap();
}

#[test]
fn reset_with_wrong_password_surfaces_tag_rejection() {
    let mut mock = MockTransceiver::new();
    seed_transaction_preamble(&mut mock);
    seed_exchange(&mut mock, 0x02, &[]); // status: failed

    let mut session = Session::with_config(mock, common::fixtures::fast_config());
    let err =
        operations::reset(&mut session, common::fixtures::sample_password()).unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
    assert_eq!(session.into_link().releases, 1);
}

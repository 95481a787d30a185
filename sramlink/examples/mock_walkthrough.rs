//! Walk a full program-URL transaction against a scripted mock link.
//!
//! Run with logging to watch the transaction phases:
//! `RUST_LOG=debug cargo run --example mock_walkthrough`

use std::convert::TryFrom;

use sramlink::session::{LinkConfig, Session};
use sramlink::tag::operations;
use sramlink::test_support::{
    seed_exchange, seed_transaction_epilogue, seed_transaction_preamble,
};
use sramlink::transport::mock::MockTransceiver;
use sramlink::types::Password;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut mock = MockTransceiver::new();
    seed_transaction_preamble(&mut mock);
    seed_exchange(&mut mock, 0x01, &[0x42; 64]);
    seed_transaction_epilogue(&mut mock);

    let config = LinkConfig {
        sram_settle_ms: 0,
        ndef_settle_ms: 0,
        ..LinkConfig::default()
    };
    let mut session = Session::with_config(mock, config);

    let password = Password::try_from("hunter12")?;
    let key = operations::program_url(&mut session, password, "https://example.com/verify/")?;
    println!("tag public key: {}", key.to_hex());

    Ok(())
}

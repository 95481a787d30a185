// fixtures.rs — commonly used payloads and timing configs for tests

use std::convert::TryFrom;

use sramlink::session::LinkConfig;
use sramlink::types::{Password, PublicKey};

pub fn sample_password() -> Password {
    Password::try_from("hunter12").unwrap()
}

pub fn sample_key_bytes() -> [u8; 64] {
    let mut bytes = [0u8; 64];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }
    bytes
}

pub fn sample_public_key() -> PublicKey {
    PublicKey::from_bytes(sample_key_bytes())
}

pub fn sample_url() -> &'static str {
    "https://example.com/verify/"
}

/// Timing config that keeps mock-driven tests fast.
pub fn fast_config() -> LinkConfig {
    LinkConfig {
        poll_interval_ms: 1,
        arbiter_timeout_ms: 25,
        unlock_timeout_ms: 25,
        read_timeout_ms: 25,
        sram_settle_ms: 0,
        ndef_settle_ms: 0,
    }
}

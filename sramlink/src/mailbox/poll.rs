// sramlink/src/mailbox/poll.rs

//! Config poller: spins on a status register until a mask/expected pair is
//! satisfied or a time budget runs out.

use std::time::Instant;

use crate::protocol::Command;
use crate::transport::Transceiver;
use crate::types::RegisterSpec;
use crate::utils::{ms, sleep_ms};
use crate::{Error, Result};

/// Poll `spec.address` until `(value & mask) == expected`.
///
/// Returns immediately on the first satisfying read. Individual transceive
/// failures are swallowed and polling continues; a single failed read means
/// "not yet", not fatal. Fails with [`Error::RegisterTimeout`] once
/// `timeout_ms` has elapsed without success.
pub fn wait_for_register(
    link: &mut dyn Transceiver,
    spec: RegisterSpec,
    timeout_ms: u64,
    interval_ms: u64,
) -> Result<()> {
    let cmd = Command::ReadRegister {
        address: spec.address,
    };
    let params = cmd.params();
    let started = Instant::now();

    loop {
        match link.transceive(cmd.opcode(), &params) {
            Ok(resp) if resp.len() >= 4 => {
                let value = u32::from_le_bytes([resp[0], resp[1], resp[2], resp[3]]);
                if spec.matches(value) {
                    log::debug!("register {:#06x} ready: {:#010x}", spec.address, value);
                    return Ok(());
                }
                log::debug!("register {:#06x} not ready: {:#010x}", spec.address, value);
            }
            Ok(resp) => {
                log::debug!(
                    "short register response ({} bytes) from {:#06x}, polling continues",
                    resp.len(),
                    spec.address
                );
            }
            Err(e) => {
                log::debug!("register read failed, polling continues: {}", e);
            }
        }

        if started.elapsed() >= ms(timeout_ms) {
            break;
        }
        sleep_ms(interval_ms);
    }

    Err(Error::RegisterTimeout {
        address: spec.address,
        timeout_ms,
    })
}

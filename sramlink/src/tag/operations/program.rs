// sramlink/src/tag/operations/program.rs

use std::convert::TryFrom;

use crate::session::Session;
use crate::tag::Request;
use crate::transport::Transceiver;
use crate::types::{Password, PublicKey};
use crate::Result;

/// Program the tag with a new password and URL. The tag answers with the
/// public key it will sign URLs with.
pub fn program_url<T: Transceiver>(
    session: &mut Session<T>,
    password: Password,
    url: &str,
) -> Result<PublicKey> {
    let request = Request::ProgramUrl {
        password,
        url: url.to_string(),
    };

    session.perform(|mailbox| {
        let response = mailbox.exchange(&request.encode())?;
        let key = PublicKey::try_from(&response[..])?;
        log::debug!("programmed url, public key {}", key.to_hex());
        Ok(key)
    })
}

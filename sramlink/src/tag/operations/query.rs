// sramlink/src/tag/operations/query.rs

use std::convert::TryFrom;

use crate::session::Session;
use crate::tag::Request;
use crate::transport::Transceiver;
use crate::types::PublicKey;
use crate::Result;

/// Fetch the tag's public key.
pub fn public_key<T: Transceiver>(session: &mut Session<T>) -> Result<PublicKey> {
    session.perform(|mailbox| {
        let response = mailbox.exchange(&Request::PublicKey.encode())?;
        PublicKey::try_from(&response[..])
    })
}

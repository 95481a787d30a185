// sramlink/src/tag/operations/reset.rs

use crate::session::Session;
use crate::tag::Request;
use crate::transport::Transceiver;
use crate::types::Password;
use crate::Result;

/// Factory-reset the tag. The tag acknowledges with an empty message; a
/// rejected password surfaces as [`crate::Error::RequestFailed`].
pub fn reset<T: Transceiver>(session: &mut Session<T>, password: Password) -> Result<()> {
    let request = Request::Reset { password };

    session.perform(|mailbox| {
        let response = mailbox.exchange(&request.encode())?;
        if !response.is_empty() {
            log::debug!("reset acknowledgement carried {} bytes", response.len());
        }
        Ok(())
    })
}

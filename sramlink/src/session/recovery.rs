// sramlink/src/session/recovery.rs

//! Retry/recovery variant of the transaction supervisor.
//!
//! Used when an operation must survive tag movement mid-transaction. On a
//! transient failure the link is dropped and re-acquired and the same
//! operation is retried from the top; a permanent failure aborts after one
//! attempt. Operations must be restartable: partial progress from a failed
//! attempt is discarded.

use crate::mailbox::Mailbox;
use crate::session::Session;
use crate::transport::Transceiver;
use crate::{Error, Result};

/// A failed attempt, classified for the retry decision.
#[derive(Debug)]
pub enum Failure {
    /// Communication/link trouble. Re-presenting the tag can fix it.
    Transient(Error),
    /// Explicit domain rejection. Retrying cannot change the outcome.
    Permanent(Error),
}

impl Failure {
    /// Tag an error as transient.
    pub fn transient(err: Error) -> Self {
        Self::Transient(err)
    }

    /// Promote an error to a permanent, non-retryable failure.
    pub fn permanent(err: Error) -> Self {
        Self::Permanent(err)
    }

    /// Unwrap the underlying error.
    pub fn into_inner(self) -> Error {
        match self {
            Self::Transient(err) | Self::Permanent(err) => err,
        }
    }
}

/// Default classification: malformed caller input can never be fixed by a
/// retry; everything else (timeouts, link loss, protocol noise) is assumed
/// transient until the caller says otherwise.
impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        if err.is_invalid_argument() {
            Self::Permanent(err)
        } else {
            Self::Transient(err)
        }
    }
}

/// Progress events emitted while a recovered transaction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// An attempt has started; the caller may show a progress indicator.
    Working,
    /// The link dropped mid-attempt; the user should re-present the tag.
    ConnectionLost,
}

impl<T: Transceiver> Session<T> {
    /// Run a supervised transaction that retries across transient link
    /// loss.
    ///
    /// `op` reports failures pre-classified as [`Failure`]; plain `?` on a
    /// [`crate::Error`] applies the default classification, and callers
    /// promote domain rejections with [`Failure::permanent`]. Transient
    /// failures release and re-acquire the link and rerun `op`, unbounded:
    /// the loop ends when an attempt succeeds, a permanent failure aborts
    /// it, or the human gives up and the link stops re-acquiring.
    pub fn perform_with_recovery<R>(
        &mut self,
        mut notify: impl FnMut(Notice),
        mut op: impl FnMut(&mut Mailbox<'_>) -> std::result::Result<R, Failure>,
    ) -> Result<R> {
        self.link.acquire()?;

        loop {
            notify(Notice::Working);
            match self.run_exchange(&mut op) {
                Ok(value) => {
                    if let Err(e) = self.link.release() {
                        log::warn!("link release failed: {}", e);
                    }
                    return Ok(value);
                }
                Err(Failure::Permanent(err)) => {
                    log::warn!("permanent failure, aborting: {}", err);
                    if let Err(e) = self.link.invalidate() {
                        log::warn!("link invalidation failed: {}", e);
                    }
                    return Err(err);
                }
                Err(Failure::Transient(err)) => {
                    log::warn!("transient failure, restarting link: {}", err);
                    notify(Notice::ConnectionLost);
                    self.link.restart()?;
                }
            }
        }
    }
}

// sramlink/src/session/mod.rs

//! Transaction supervisor.
//!
//! A [`Session`] owns the link for one logical operation: it acquires the
//! technology session, arbitrates the SRAM window to the host, runs the
//! caller's operation against a [`Mailbox`], restores the tag's native
//! mode, and guarantees release on every exit path.

pub mod recovery;

pub use recovery::{Failure, Notice};

use crate::mailbox::{poll, Mailbox};
use crate::protocol::Command;
use crate::transport::Transceiver;
use crate::types::{RegisterSpec, TransferMode};
use crate::utils::sleep_ms;
use crate::{Error, Result};

/// Timing tunables for one link. Poll intervals and timeout budgets vary
/// between tag hardware revisions, so none of them are hard-coded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConfig {
    /// Delay between register poll attempts.
    pub poll_interval_ms: u64,
    /// Budget for the arbiter to grant host write access.
    pub arbiter_timeout_ms: u64,
    /// Budget for the tag to unlock. Long: covers a human tap-and-hold.
    pub unlock_timeout_ms: u64,
    /// Budget for the tag to produce a response message.
    pub read_timeout_ms: u64,
    /// Settle delay after switching the tag into SRAM mode.
    pub sram_settle_ms: u64,
    /// Settle delay after restoring the tag's NDEF mode.
    pub ndef_settle_ms: u64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            arbiter_timeout_ms: 3_000,
            unlock_timeout_ms: 30_000,
            read_timeout_ms: 30_000,
            sram_settle_ms: 200,
            ndef_settle_ms: 100,
        }
    }
}

/// Supervisor for transactions against one tag link.
pub struct Session<T: Transceiver> {
    link: T,
    config: LinkConfig,
}

impl<T: Transceiver> Session<T> {
    /// Create a session with default timing.
    pub fn new(link: T) -> Self {
        Self::with_config(link, LinkConfig::default())
    }

    /// Create a session with explicit timing tunables.
    pub fn with_config(link: T, config: LinkConfig) -> Self {
        Self { link, config }
    }

    /// The session's timing configuration.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Tear the session apart and return the underlying link.
    pub fn into_link(self) -> T {
        self.link
    }

    /// Run one supervised transaction.
    ///
    /// Acquires the technology session, switches the tag into SRAM mode,
    /// polls arbiter and unlock readiness, and hands `op` a [`Mailbox`].
    /// The session is released exactly once on every exit path; a release
    /// failure is logged and never masks the operation's outcome.
    pub fn perform<R>(&mut self, op: impl FnOnce(&mut Mailbox<'_>) -> Result<R>) -> Result<R> {
        log::info!("transaction: acquiring link");
        let outcome = match self.link.acquire() {
            Ok(()) => self.run_exchange(op),
            Err(e) => Err(e),
        };

        log::info!("transaction: releasing link");
        if let Err(e) = self.link.release() {
            log::warn!("link release failed: {}", e);
        }
        outcome
    }

    /// Steps 2-6 of the transaction sequence, shared between [`Self::perform`]
    /// and the recovery variant. Generic over the error type so recovery
    /// attempts can classify failures on the way out.
    pub(crate) fn run_exchange<R, E>(
        &mut self,
        op: impl FnOnce(&mut Mailbox<'_>) -> std::result::Result<R, E>,
    ) -> std::result::Result<R, E>
    where
        E: From<Error>,
    {
        log::info!("transaction: enabling sram transfer mode");
        self.set_transfer_mode(TransferMode::Sram)?;
        sleep_ms(self.config.sram_settle_ms);

        log::info!("transaction: waiting for arbiter");
        poll::wait_for_register(
            &mut self.link,
            RegisterSpec::ARBITER_READY,
            self.config.arbiter_timeout_ms,
            self.config.poll_interval_ms,
        )
        .map_err(E::from)?;

        log::info!("transaction: waiting for unlock");
        poll::wait_for_register(
            &mut self.link,
            RegisterSpec::UNLOCK_READY,
            self.config.unlock_timeout_ms,
            self.config.poll_interval_ms,
        )
        .map_err(E::from)?;

        log::info!("transaction: executing operation");
        let value = op(&mut Mailbox::new(&mut self.link, &self.config))?;

        log::info!("transaction: restoring ndef transfer mode");
        self.set_transfer_mode(TransferMode::Ndef)?;
        sleep_ms(self.config.ndef_settle_ms);

        Ok(value)
    }

    fn set_transfer_mode(&mut self, mode: TransferMode) -> Result<()> {
        let cmd = Command::SetTransferMode(mode);
        self.link.transceive(cmd.opcode(), &cmd.params())?;
        Ok(())
    }
}

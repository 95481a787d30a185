// sramlink/src/prelude.rs

//! Convenience re-exports of the crate's common surface.

pub use crate::mailbox::{wait_for_register, Mailbox};
pub use crate::protocol::{Command, Frame, Message, MessageStatus, ReadArea};
pub use crate::session::{Failure, LinkConfig, Notice, Session};
pub use crate::tag::Request;
pub use crate::transport::Transceiver;
pub use crate::{Error, Password, PublicKey, RegisterSpec, Result, TransferMode};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, ms, sleep_ms};

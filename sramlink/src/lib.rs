// sramlink/src/lib.rs

//! sramlink
//!
//! Host-side transport and transaction engine for NFC tags that expose an
//! SRAM mailbox (a small host/tag shared memory window) instead of a native
//! message interface. The crate builds a CRC-protected request/response
//! protocol on top of a raw ISO 15693 transceive primitive: register
//! polling, message framing, and a supervised transaction lifecycle that
//! survives transient link loss.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod mailbox;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

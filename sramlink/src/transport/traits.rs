// sramlink/src/transport/traits.rs

use crate::Result;

/// Transceiver abstracts the platform radio driver away from the protocol
/// and session logic. Host environments differ in how the raw command is
/// passed down (one concatenated block vs. separate opcode and parameter
/// fields); implementations normalize both shapes behind `transceive` so
/// callers never branch on platform.
pub trait Transceiver {
    /// Send one raw command and wait for the tag's response bytes.
    ///
    /// Blocks until the response arrives or the driver reports failure;
    /// link loss surfaces as [`crate::Error::Link`]. Drivers should bound
    /// this call themselves so a dead link cannot hang the caller.
    fn transceive(&mut self, opcode: u8, params: &[u8]) -> Result<Vec<u8>>;

    /// Acquire exclusive ownership of the contactless technology session.
    /// The medium is a singleton: at most one session is active at a time.
    fn acquire(&mut self) -> Result<()>;

    /// Release the technology session.
    fn release(&mut self) -> Result<()>;

    /// Drop and immediately re-acquire the session after transient link
    /// loss. Default implementation releases then acquires; drivers with a
    /// native restart primitive can override.
    fn restart(&mut self) -> Result<()> {
        self.release()?;
        self.acquire()
    }

    /// Tear down the session after a permanent failure. Default falls back
    /// to `release`; drivers that can surface a terminal message to the
    /// user can override.
    fn invalidate(&mut self) -> Result<()> {
        self.release()
    }
}

// sramlink/src/transport/mock.rs

use crate::transport::traits::Transceiver;
use crate::{Error, Result};

/// Mock transceiver for unit tests. It records every raw command and
/// session call and returns queued responses in order.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    /// Recorded transceive calls: (opcode, params)
    pub calls: Vec<(u8, Vec<u8>)>,
    /// Scripted responses, consumed front to back. An `Err` entry injects
    /// a failure for that exchange.
    pub responses: Vec<Result<Vec<u8>>>,
    /// Number of acquire calls observed
    pub acquires: usize,
    /// Number of release calls observed
    pub releases: usize,
    /// Number of invalidate calls observed
    pub invalidations: usize,
    /// Testing hook: number of acquire calls that should fail
    pub acquire_failures: usize,
}

impl MockTransceiver {
    /// Create an empty mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for the next unanswered exchange.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    /// Queue a failing exchange.
    pub fn push_failure(&mut self, err: Error) {
        self.responses.push(Err(err));
    }

    /// Set how many subsequent acquire calls should fail (for tests).
    pub fn set_acquire_failures(&mut self, n: usize) {
        self.acquire_failures = n;
    }

    /// Recorded params of every call with the given opcode.
    pub fn params_for(&self, opcode: u8) -> Vec<&[u8]> {
        self.calls
            .iter()
            .filter(|(op, _)| *op == opcode)
            .map(|(_, params)| params.as_slice())
            .collect()
    }
}

impl Transceiver for MockTransceiver {
    fn transceive(&mut self, opcode: u8, params: &[u8]) -> Result<Vec<u8>> {
        self.calls.push((opcode, params.to_vec()));
        if self.responses.is_empty() {
            Err(Error::Link("no scripted response".into()))
        } else {
            self.responses.remove(0)
        }
    }

    fn acquire(&mut self) -> Result<()> {
        if self.acquire_failures > 0 {
            self.acquire_failures -= 1;
            return Err(Error::Link("acquire refused".into()));
        }
        self.acquires += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.releases += 1;
        Ok(())
    }

    fn invalidate(&mut self) -> Result<()> {
        self.invalidations += 1;
        Ok(())
    }
}

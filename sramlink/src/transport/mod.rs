// sramlink/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use traits::Transceiver;

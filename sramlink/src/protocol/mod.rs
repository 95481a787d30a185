// sramlink/src/protocol/mod.rs

pub mod commands;
pub mod frame;

pub use commands::{Command, ReadArea};
pub use frame::{Frame, Message, MessageStatus};

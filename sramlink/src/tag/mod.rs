// sramlink/src/tag/mod.rs

//! Application-level commands for the URL-signing tag, built on top of the
//! transport. These are callers of the transport, not part of it: each one
//! encodes a request, runs it inside a supervised transaction, and parses
//! the response payload.

mod request;
pub use request::Request;

pub mod operations;

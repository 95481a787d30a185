// sramlink/src/tag/operations/mod.rs

pub mod program;
pub mod query;
pub mod reset;

pub use program::program_url;
pub use query::public_key;
pub use reset::reset;

pub mod consts;

mod b58;

pub use b58::{Address, Digest, ParseError, Signature};

/// An amount of the chain's base currency unit (lamports).
pub type Amount = u64;

pub type SlotNumber = u64;

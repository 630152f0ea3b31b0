#![no_std]

//! Pure rule checks for the collection contract.
//!
//! Nothing here touches storage: callers load the relevant state, ask a
//! guard for a verdict, and only write once every guard has passed.

pub mod metadata;
pub mod mint;
pub mod ownership;

pub use metadata::*;
pub use mint::*;
pub use ownership::*;

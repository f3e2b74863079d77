//! Block cipher modes of operation
//!
//! Both engines wrap a [`BlockCipher`](super::BlockCipher) and a per-call IV;
//! neither retains state between calls.

pub mod cbc;
pub mod cfb;

pub use cbc::Cbc;
pub use cfb::Cfb;

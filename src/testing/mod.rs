//! Testing utilities and mock implementations
//!
//! Mock search and fetch providers so the tool system can be exercised
//! without any real backend. The binary also wires these in until a real
//! backend integration exists.

pub mod mocks;

pub use mocks::*;

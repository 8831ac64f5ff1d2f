//! Infrastructure implementations.
//!
//! Contains the repository port and its in-memory adapter.

pub mod memory;
pub mod ports;

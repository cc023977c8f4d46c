//! Utilities shared by the relay crates: logging setup and time handling.

pub mod logger;
pub mod time;

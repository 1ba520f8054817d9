//! CLI commands

pub mod describe;
pub mod memory;

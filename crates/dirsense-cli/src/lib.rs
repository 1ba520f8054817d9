//! dirsense-cli library
//!
//! This module exposes the internal functionality of dirsense-cli for testing purposes.

pub mod cli;
pub mod logging;

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub use cli::{Cli, Commands, MemoryCommands, Settings};

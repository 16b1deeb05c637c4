//! CLI argument definitions for geyserpack
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod build;
mod core;

pub use build::BuildArgs;
pub use core::{Cli, Commands};

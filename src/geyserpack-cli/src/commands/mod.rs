//! Command handlers for geyserpack CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod build;
pub mod configure;
pub mod import;

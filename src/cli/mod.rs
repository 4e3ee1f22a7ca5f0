//! CLI module
//!
//! Command-line interface for generating type declarations.
//!
//! # Commands
//!
//! - `generate` - Sample a collection tree and write declaration files
//! - `check` - Verify credentials and Firestore access

mod commands;
mod runner;

pub use commands::{Cli, Commands, FieldOrderArg};
pub use runner::Runner;

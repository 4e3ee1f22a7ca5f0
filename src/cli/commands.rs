//! CLI commands and argument parsing

use crate::config::FieldOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Firestore TypeScript type-declaration generator
#[derive(Parser, Debug)]
#[command(name = "firetype")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate declaration files for a collection and its subcollections
    Generate {
        /// Root collection path (e.g. "users" or "users/alice/orders")
        collection: String,

        /// Service account credentials file (JSON)
        credentials: PathBuf,

        /// Output directory for declaration files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Maximum subcollections visited per document (0 = no recursion)
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// Field ordering in generated types
        #[arg(long, default_value = "first-seen")]
        order: FieldOrderArg,

        /// Declaration file extension
        #[arg(long, default_value = "ts")]
        ext: String,
    },

    /// Verify credentials and Firestore access
    Check {
        /// Service account credentials file (JSON)
        credentials: PathBuf,
    },
}

/// Field ordering flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FieldOrderArg {
    /// Order fields as first seen across sampled documents
    FirstSeen,
    /// Sort fields by name
    Alphabetical,
}

impl From<FieldOrderArg> for FieldOrder {
    fn from(arg: FieldOrderArg) -> Self {
        match arg {
            FieldOrderArg::FirstSeen => FieldOrder::FirstSeen,
            FieldOrderArg::Alphabetical => FieldOrder::Alphabetical,
        }
    }
}
